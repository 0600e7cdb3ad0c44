use crate::api::ErrorResponse;
use crate::AppState;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use utoipa::ToSchema;

/// Upload limit: 5MB
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct RecognizeUploadRequest {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

/// JSON debugging body used when no image is uploaded.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RecognizeHintRequest {
    #[serde(default)]
    pub mock_image_hint: String,
}

#[utoipa::path(
    post,
    path = "/api/ingredients/recognize",
    tag = "ingredients",
    request_body(content_type = "multipart/form-data", content = RecognizeUploadRequest),
    responses(
        (status = 200, description = "Recognized ingredients with freshness", body = souschef_core::Recognition),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 415, description = "Unsupported image type", body = ErrorResponse)
    )
)]
pub async fn recognize(State(state): State<AppState>, request: Request) -> Response {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if content_type.starts_with("multipart/form-data") {
        let multipart = match Multipart::from_request(request, &()).await {
            Ok(multipart) => multipart,
            Err(e) => {
                return (e.status(), Json(ErrorResponse { error: e.body_text() })).into_response()
            }
        };
        return recognize_upload(&state, multipart).await;
    }

    // JSON debugging path; a missing or malformed body falls back to an
    // empty hint, which selects the default canned list.
    let hint = match axum::body::to_bytes(request.into_body(), MAX_UPLOAD_BYTES).await {
        Ok(bytes) => serde_json::from_slice::<RecognizeHintRequest>(&bytes)
            .map(|body| body.mock_image_hint)
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    match state.classifier.classify_hint(&hint).await {
        Ok(recognition) => (StatusCode::OK, Json(recognition)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "hint classification failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "ingredient recognition failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn recognize_upload(state: &AppState, mut multipart: Multipart) -> Response {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("image") => break field,
            Ok(Some(_)) => continue,
            Ok(None) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "no image field in form data".to_string(),
                    }),
                )
                    .into_response()
            }
            Err(e) => {
                tracing::warn!("Multipart read error: {}", e);
                return (e.status(), Json(ErrorResponse { error: e.body_text() })).into_response();
            }
        }
    };

    let filename = field.file_name().unwrap_or("").to_string();
    if filename.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "empty filename".to_string(),
            }),
        )
            .into_response();
    }
    if !allowed_extension(&filename) {
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(ErrorResponse {
                error: "only jpg/png allowed".to_string(),
            }),
        )
            .into_response();
    }

    let data = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Field read error: {}", e);
            let error = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                "file too large (max 5MB)".to_string()
            } else {
                e.body_text()
            };
            return (e.status(), Json(ErrorResponse { error })).into_response();
        }
    };

    match state.classifier.classify_image(&data).await {
        Ok(recognition) => (StatusCode::OK, Json(recognition)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "image classification failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "ingredient recognition failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn allowed_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| matches!(ext.to_lowercase().as_str(), "jpg" | "jpeg" | "png"))
        .unwrap_or(false)
}
