//! Insight Provider Port
//!
//! Abstract interface the presentation layer calls for business
//! insights. The contract holds whether the implementation answers
//! synchronously or suspends first, so a latency-simulating shim can
//! wrap the generator without changing callers.

use async_trait::async_trait;

use crate::domain::entities::{BusinessInsight, BusinessQuery};
use crate::domain::errors::DomainError;

/// Service interface for fetching and refreshing insights
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Fetch the full insight for a query
    async fn fetch_insight(&self, query: &BusinessQuery) -> Result<BusinessInsight, DomainError>;

    /// Produce a fresh headline for a query
    async fn regenerate_headline(&self, query: &BusinessQuery) -> Result<String, DomainError>;
}
