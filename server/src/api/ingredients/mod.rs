pub mod recognize;

use crate::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/ingredients endpoints (mounted at /api/ingredients)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recognize", post(recognize::recognize))
        .layer(DefaultBodyLimit::max(recognize::MAX_UPLOAD_BYTES))
}

#[derive(OpenApi)]
#[openapi(
    paths(recognize::recognize),
    components(schemas(
        recognize::RecognizeUploadRequest,
        recognize::RecognizeHintRequest,
        souschef_core::Recognition,
    ))
)]
pub struct ApiDoc;
