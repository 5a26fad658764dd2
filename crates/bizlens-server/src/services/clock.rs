//! System Clock - production Clock implementation

use chrono::Utc;

use bizlens::Clock;

/// Wall-clock milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // timestamp_millis is negative only before 1970
        Utc::now().timestamp_millis().max(0) as u64
    }
}
