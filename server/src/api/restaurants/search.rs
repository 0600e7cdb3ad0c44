use crate::api::ErrorResponse;
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use souschef_core::Venue;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub cuisine: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RestaurantSearchResponse {
    pub cuisine: String,
    pub results: Vec<Venue>,
}

#[utoipa::path(
    get,
    path = "/api/restaurants/search",
    tag = "restaurants",
    params(
        ("cuisine" = Option<String>, Query, description = "Cuisine to search for (default Italian)"),
        ("lat" = Option<String>, Query, description = "Latitude (default 41.76)"),
        ("lng" = Option<String>, Query, description = "Longitude (default -72.67)")
    ),
    responses(
        (status = 200, description = "Nearby venues; empty when the upstream search fails", body = RestaurantSearchResponse),
        (status = 400, description = "Invalid coordinates", body = ErrorResponse)
    )
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let cuisine = params.cuisine.unwrap_or_else(|| "Italian".to_string());
    let lat = params.lat.as_deref().unwrap_or("41.76").parse::<f64>();
    let lng = params.lng.as_deref().unwrap_or("-72.67").parse::<f64>();
    let (lat, lng) = match (lat, lng) {
        (Ok(lat), Ok(lng)) => (lat, lng),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "invalid lat/lng".to_string(),
                }),
            )
                .into_response()
        }
    };

    // An unreachable upstream degrades to an empty result list; the search
    // proxy must not take the whole flow down.
    let results = match state.places.nearby_search(&cuisine, lat, lng).await {
        Ok(venues) => venues,
        Err(e) => {
            tracing::warn!(error = %e, "restaurant search failed, returning empty results");
            Vec::new()
        }
    };

    (
        StatusCode::OK,
        Json(RestaurantSearchResponse { cuisine, results }),
    )
        .into_response()
}
