//! Service Ports

pub mod clock;
pub mod insight_provider;

pub use clock::Clock;
pub use insight_provider::InsightProvider;
