//! Insight Routes - mock business-data endpoints
//!
//! HTTP handlers that validate the query pair and delegate to the
//! insight provider.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::models::{BusinessDataRequest, BusinessDataResponse, RegenerateHeadlineParams};
use crate::AppState;
use bizlens::{BusinessQuery, DomainError};

fn into_status(err: DomainError) -> (axum::http::StatusCode, String) {
    match err {
        DomainError::Validation(message) => (axum::http::StatusCode::BAD_REQUEST, message),
        DomainError::Transport(message) => (axum::http::StatusCode::BAD_GATEWAY, message),
    }
}

/// Fetch the insight for a business
#[utoipa::path(
    post,
    path = "/business-data",
    request_body = BusinessDataRequest,
    responses(
        (status = 200, description = "Generated insight", body = BusinessDataResponse),
        (status = 400, description = "Missing business name or location"),
        (status = 502, description = "Transport failure")
    ),
    tag = "Insight"
)]
pub async fn business_data(
    State(state): State<AppState>,
    Json(payload): Json<BusinessDataRequest>,
) -> Result<Json<BusinessDataResponse>, (axum::http::StatusCode, String)> {
    let query = BusinessQuery::new(&payload.name, &payload.location).map_err(|e| {
        tracing::warn!("Rejected business-data request: {}", e);
        into_status(e)
    })?;

    let insight = state
        .insights
        .fetch_insight(&query)
        .await
        .map_err(into_status)?;

    Ok(Json(insight.into()))
}

/// Regenerate the headline for a business
#[utoipa::path(
    get,
    path = "/regenerate-headline",
    params(RegenerateHeadlineParams),
    responses(
        (status = 200, description = "Fresh headline", body = String),
        (status = 400, description = "Missing business name or location"),
        (status = 502, description = "Transport failure")
    ),
    tag = "Insight"
)]
pub async fn regenerate_headline(
    State(state): State<AppState>,
    Query(params): Query<RegenerateHeadlineParams>,
) -> Result<Json<String>, (axum::http::StatusCode, String)> {
    let query = BusinessQuery::new(&params.name, &params.location).map_err(|e| {
        tracing::warn!("Rejected regenerate-headline request: {}", e);
        into_status(e)
    })?;

    let headline = state
        .insights
        .regenerate_headline(&query)
        .await
        .map_err(into_status)?;

    Ok(Json(headline))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/business-data", post(business_data))
        .route("/regenerate-headline", get(regenerate_headline))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_validation_error_maps_to_bad_request_with_field_message() {
        let err = BusinessQuery::new("", "Mumbai").unwrap_err();
        let (status, message) = into_status(err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Business name is required");
    }

    #[test]
    fn test_transport_error_maps_to_bad_gateway() {
        let (status, _) = into_status(DomainError::transport("connection reset"));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
