//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{BusinessDataRequest, BusinessDataResponse};
use crate::routes::insight;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "bizlens API",
        version = "0.1.0",
        description = "Mock business-data backend: deterministic ratings, review counts, and marketing headlines for a (name, location) pair.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    paths(
        insight::business_data,
        insight::regenerate_headline,
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Insight", description = "Deterministic business insight generation"),
    ),
    components(
        schemas(
            BusinessDataRequest,
            BusinessDataResponse,
        )
    ),
)]
pub struct ApiDoc;
