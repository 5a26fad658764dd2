//! Insight Application Service (Use Case)
//!
//! Applies the simulated transport delay, then delegates synthesis to
//! the domain generator. Queries arrive already validated; the
//! generator itself is total over strings and never fails.

use std::sync::Arc;

use async_trait::async_trait;

use bizlens::{
    BusinessInsight, BusinessQuery, Clock, DomainError, InsightGenerator, InsightProvider,
};

use crate::services::transport::{RequestKind, SimulatedTransport};

/// Application service for insight operations
pub struct InsightService<C: Clock> {
    generator: InsightGenerator,
    transport: SimulatedTransport,
    clock: Arc<C>,
}

impl<C: Clock> InsightService<C> {
    pub fn new(transport: SimulatedTransport, clock: Arc<C>) -> Self {
        Self {
            generator: InsightGenerator::new(),
            transport,
            clock,
        }
    }
}

#[async_trait]
impl<C: Clock + 'static> InsightProvider for InsightService<C> {
    async fn fetch_insight(&self, query: &BusinessQuery) -> Result<BusinessInsight, DomainError> {
        self.transport.delay(RequestKind::Fetch).await;

        let insight = self.generator.generate(query);
        tracing::info!(
            "Generated insight for {} ({}): rating {}, {} reviews",
            query.name(),
            query.location(),
            insight.rating,
            insight.reviews
        );

        Ok(insight)
    }

    async fn regenerate_headline(&self, query: &BusinessQuery) -> Result<String, DomainError> {
        self.transport.delay(RequestKind::Regenerate).await;

        let headline = self
            .generator
            .regenerate_headline(query, self.clock.now_millis());
        tracing::info!("Regenerated headline for {}", query.name());

        Ok(headline)
    }
}
