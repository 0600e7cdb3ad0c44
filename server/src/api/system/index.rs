use axum::{response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IndexResponse {
    pub service: String,
    pub endpoints: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Service name and endpoint listing", body = IndexResponse)
    )
)]
pub async fn index() -> impl IntoResponse {
    Json(IndexResponse {
        service: "Souschef API".to_string(),
        endpoints: vec![
            "/health".to_string(),
            "/api/ingredients/recognize".to_string(),
            "/api/recipes/recommend".to_string(),
            "/api/shopping-list".to_string(),
            "/api/restaurants/search".to_string(),
            "/api/web-recipes/discover".to_string(),
            "/docs".to_string(),
        ],
    })
}
