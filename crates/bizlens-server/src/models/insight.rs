//! Insight DTOs - business-data request/response shapes

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use bizlens::BusinessInsight;

/// Business data request
#[derive(Debug, Deserialize, ToSchema)]
pub struct BusinessDataRequest {
    /// Business name, as typed into the form
    pub name: String,
    /// Business location, as typed into the form
    pub location: String,
}

/// Business data response
#[derive(Debug, Serialize, ToSchema)]
pub struct BusinessDataResponse {
    /// Star rating in [4.00, 4.45]
    pub rating: f64,
    /// Review count in [50, 549]
    pub reviews: u32,
    /// Rendered marketing headline
    pub headline: String,
}

impl From<BusinessInsight> for BusinessDataResponse {
    fn from(insight: BusinessInsight) -> Self {
        Self {
            rating: insight.rating,
            reviews: insight.reviews,
            headline: insight.headline,
        }
    }
}

/// Query pair for headline regeneration
#[derive(Debug, Deserialize, IntoParams)]
pub struct RegenerateHeadlineParams {
    /// Business name
    pub name: String,
    /// Business location
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serializes_with_contract_field_names() {
        let response = BusinessDataResponse::from(BusinessInsight {
            rating: 4.25,
            reviews: 395,
            headline: "h".to_string(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["rating"], 4.25);
        assert_eq!(json["reviews"], 395);
        assert_eq!(json["headline"], "h");
    }
}
