//! Simulated Transport - artificial latency shim
//!
//! Emulates the round-trip of a real business-data backend. Only
//! timing is affected; payloads pass through untouched. Delay
//! sampling is the single place the server draws real randomness.

use std::ops::Range;
use std::time::Duration;

use rand::Rng;

/// Kind of simulated round-trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Initial full-insight fetch
    Fetch,
    /// Headline regeneration
    Regenerate,
}

/// Delay ranges in milliseconds, sampled uniformly
#[derive(Debug, Clone)]
pub struct DelayConfig {
    pub fetch_ms: Range<u64>,
    pub regenerate_ms: Range<u64>,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            fetch_ms: 1500..2500,
            regenerate_ms: 800..1300,
        }
    }
}

impl DelayConfig {
    /// Zero latency, for tests
    pub fn none() -> Self {
        Self {
            fetch_ms: 0..1,
            regenerate_ms: 0..1,
        }
    }
}

/// Latency-simulating wrapper around the insight generator
pub struct SimulatedTransport {
    config: DelayConfig,
}

impl SimulatedTransport {
    pub fn new(config: DelayConfig) -> Self {
        Self { config }
    }

    /// Suspend for a uniformly sampled delay
    pub async fn delay(&self, kind: RequestKind) {
        let range = match kind {
            RequestKind::Fetch => self.config.fetch_ms.clone(),
            RequestKind::Regenerate => self.config.regenerate_ms.clone(),
        };

        let ms = rand::thread_rng().gen_range(range);
        tracing::debug!("Simulating {:?} latency: {}ms", kind, ms);
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges_match_presentation_timing() {
        let config = DelayConfig::default();
        assert_eq!(config.fetch_ms, 1500..2500);
        assert_eq!(config.regenerate_ms, 800..1300);
    }

    #[tokio::test]
    async fn test_zero_delay_config_resolves_immediately() {
        let transport = SimulatedTransport::new(DelayConfig::none());
        let started = std::time::Instant::now();
        transport.delay(RequestKind::Fetch).await;
        transport.delay(RequestKind::Regenerate).await;
        assert!(started.elapsed() < Duration::from_millis(100));
    }
}
