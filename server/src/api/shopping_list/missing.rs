use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use souschef_core::{shopping_gap, CatalogError, ShoppingItem};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ShoppingListRequest {
    pub recipe_id: i64,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShoppingListResponse {
    pub missing: Vec<ShoppingItem>,
}

#[utoipa::path(
    post,
    path = "/api/shopping-list",
    tag = "shopping_list",
    request_body = ShoppingListRequest,
    responses(
        (status = 200, description = "Missing ingredients in stored order", body = ShoppingListResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn shopping_list(
    State(state): State<AppState>,
    Json(payload): Json<ShoppingListRequest>,
) -> impl IntoResponse {
    match shopping_gap(
        state.catalog.as_ref(),
        payload.recipe_id,
        &payload.ingredients,
    ) {
        Ok(missing) => (StatusCode::OK, Json(ShoppingListResponse { missing })).into_response(),
        Err(CatalogError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "recipe not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "shopping gap computation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "failed to compute shopping list".to_string(),
                }),
            )
                .into_response()
        }
    }
}
