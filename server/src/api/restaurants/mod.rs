pub mod search;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/restaurants endpoints (mounted at /api/restaurants)
pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search::search))
}

#[derive(OpenApi)]
#[openapi(
    paths(search::search),
    components(schemas(search::RestaurantSearchResponse, souschef_core::Venue))
)]
pub struct ApiDoc;
