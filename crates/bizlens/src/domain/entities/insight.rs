//! BusinessInsight - Generated rating/review/headline triple
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Insight produced for a single business query
///
/// Immutable once returned; it carries no identity beyond the call
/// that produced it and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessInsight {
    /// Star rating in [4.00, 4.45], stepped by 0.05
    pub rating: f64,
    /// Review count in [50, 549]
    pub reviews: u32,
    /// Rendered marketing headline
    pub headline: String,
}
