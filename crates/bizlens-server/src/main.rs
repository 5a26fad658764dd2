use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod application;
mod models;
mod routes;
mod services;

use application::InsightService;
use bizlens::InsightProvider;
use services::clock::SystemClock;
use services::transport::{DelayConfig, SimulatedTransport};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub insights: Arc<dyn InsightProvider>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "bizlens API is running - insights on demand".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bizlens_server=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("📊 bizlens API initializing...");

    // Wire the generator behind the simulated transport
    let transport = SimulatedTransport::new(DelayConfig::default());
    let insights: Arc<dyn InsightProvider> =
        Arc::new(InsightService::new(transport, Arc::new(SystemClock)));

    let state = AppState { insights };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::insight::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state);

    let addr = std::env::var("BIZLENS_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ bizlens API ready on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
