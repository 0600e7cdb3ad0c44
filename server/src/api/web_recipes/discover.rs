use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use souschef_core::{normalize, ProviderError, WebRecipeCandidate};
use utoipa::ToSchema;

const DEFAULT_LIMIT: usize = 5;
const MAX_LIMIT: usize = 10;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DiscoverRequest {
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DiscoverResponse {
    pub results: Vec<WebRecipeCandidate>,
}

#[utoipa::path(
    post,
    path = "/api/web-recipes/discover",
    tag = "web_recipes",
    request_body = DiscoverRequest,
    responses(
        (status = 200, description = "Ranked web recipe candidates; empty when the upstream search fails", body = DiscoverResponse),
        (status = 400, description = "Empty ingredient list", body = ErrorResponse),
        (status = 503, description = "Web search provider not configured", body = ErrorResponse)
    )
)]
pub async fn discover(
    State(state): State<AppState>,
    Json(payload): Json<DiscoverRequest>,
) -> impl IntoResponse {
    if normalize(&payload.ingredients).is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "ingredients must contain at least one non-empty entry".to_string(),
            }),
        )
            .into_response();
    }

    let limit = payload.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let Some(provider) = state.search.as_deref() else {
        return not_configured();
    };

    match souschef_core::discover(
        provider,
        &payload.ingredients,
        payload.cuisine.as_deref(),
        limit,
    )
    .await
    {
        Ok(results) => (StatusCode::OK, Json(DiscoverResponse { results })).into_response(),
        Err(ProviderError::NotConfigured(message)) => {
            tracing::warn!(%message, "web search provider misconfigured");
            not_configured()
        }
        // A configured provider that fails upstream degrades to an empty
        // candidate list instead of failing the request.
        Err(e) => {
            tracing::warn!(error = %e, "web discovery failed, returning empty results");
            (
                StatusCode::OK,
                Json(DiscoverResponse {
                    results: Vec::new(),
                }),
            )
                .into_response()
        }
    }
}

fn not_configured() -> axum::response::Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: "web search provider not configured".to_string(),
        }),
    )
        .into_response()
}
