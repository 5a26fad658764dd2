//! Clock Port
//!
//! Timestamp source for headline regeneration. Injected rather than
//! read ambiently so tests can pin the bucket selection.

/// Source of wall-clock timestamps
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}
