pub mod recommend;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new().route("/recommend", post(recommend::recommend))
}

#[derive(OpenApi)]
#[openapi(
    paths(recommend::recommend),
    components(schemas(
        recommend::RecommendRequest,
        recommend::RecommendResponse,
        souschef_core::MatchResult,
    ))
)]
pub struct ApiDoc;
