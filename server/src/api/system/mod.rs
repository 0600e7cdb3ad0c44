pub mod health;
pub mod index;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the service index and health endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route("/health", get(health::health))
}

#[derive(OpenApi)]
#[openapi(
    paths(index::index, health::health),
    components(schemas(index::IndexResponse, health::HealthResponse))
)]
pub struct ApiDoc;
