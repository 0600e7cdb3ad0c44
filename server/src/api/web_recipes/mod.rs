pub mod discover;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/web-recipes endpoints (mounted at /api/web-recipes)
pub fn router() -> Router<AppState> {
    Router::new().route("/discover", post(discover::discover))
}

#[derive(OpenApi)]
#[openapi(
    paths(discover::discover),
    components(schemas(
        discover::DiscoverRequest,
        discover::DiscoverResponse,
        souschef_core::WebRecipeCandidate,
    ))
)]
pub struct ApiDoc;
