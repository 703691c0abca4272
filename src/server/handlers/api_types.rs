//! Typed request/response payloads for the HTTP API.
//!
//! Explicit structs rather than inline `serde_json::json!()` so that every
//! body shape derives `ToSchema` for the generated OpenAPI document.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ner::{Entity, ExtractError};

/// Body of a `POST /ner` request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TextRequest {
    /// The text to analyze for named entities.
    pub text: String,
}

/// A single annotated span in the input text.
#[derive(Debug, Serialize, ToSchema)]
pub struct EntitySpan {
    /// The matched substring.
    pub text: String,
    /// Entity category from the model's taxonomy (e.g. PERSON, ORG, DATE).
    pub label: String,
    /// 0-based character offset of the first character of the span.
    pub start_char: usize,
    /// 0-based character offset one past the last character of the span.
    pub end_char: usize,
}

impl From<Entity> for EntitySpan {
    fn from(entity: Entity) -> Self {
        Self {
            text: entity.text,
            label: entity.label,
            start_char: entity.start_char,
            end_char: entity.end_char,
        }
    }
}

/// Response body for `POST /ner`.
#[derive(Debug, Serialize, ToSchema)]
pub struct NerResponse {
    /// Detected entities, ordered left to right, non-overlapping.
    pub entities: Vec<EntitySpan>,
    /// The original request text, unmodified.
    pub input: String,
}

/// Fixed payload for the liveness endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct LivenessResponse {
    pub message: String,
}

/// Error payload returned for validation and extraction failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: bool,
    pub message: String,
}

/// Failures surfaced by the API, mapped explicitly to HTTP status codes.
#[derive(Debug)]
pub enum ApiError {
    /// The request body failed schema validation (422).
    Validation(String),
    /// The extractor failed while annotating (500).
    Extraction(ExtractError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            ApiError::Extraction(err) => {
                tracing::error!("entity extraction failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (
            status,
            Json(ErrorBody {
                error: true,
                message,
            }),
        )
            .into_response()
    }
}
