use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use souschef_core::{normalize, MatchResult};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecommendRequest {
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecommendResponse {
    pub recipes: Vec<MatchResult>,
}

#[utoipa::path(
    post,
    path = "/api/recipes/recommend",
    tag = "recipes",
    request_body = RecommendRequest,
    responses(
        (status = 200, description = "Ranked recipe recommendations", body = RecommendResponse),
        (status = 400, description = "Empty ingredient list", body = ErrorResponse)
    )
)]
pub async fn recommend(
    State(state): State<AppState>,
    Json(payload): Json<RecommendRequest>,
) -> impl IntoResponse {
    let user = normalize(&payload.ingredients);
    if user.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "ingredients must contain at least one non-empty entry".to_string(),
            }),
        )
            .into_response();
    }

    let recipes = souschef_core::recommend(&user, &state.catalog.all(), state.match_threshold);
    (StatusCode::OK, Json(RecommendResponse { recipes })).into_response()
}
