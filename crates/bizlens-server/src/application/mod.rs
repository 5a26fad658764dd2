//! Application Services (Use Cases)

pub mod insight_service;

pub use insight_service::InsightService;
