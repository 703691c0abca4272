//! API endpoint handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use super::super::AppState;
use super::api_types::{ApiError, EntitySpan, ErrorBody, LivenessResponse, NerResponse, TextRequest};

/// Liveness endpoint: confirms the process is running and accepting
/// connections. No side effects, no failure modes.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = LivenessResponse)
    ),
    tag = "Health"
)]
pub async fn read_root() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "NER microservice is running!".to_string(),
    })
}

/// Extract named entities from the posted text.
///
/// The body is decoded into `TextRequest` before this handler body runs;
/// a missing or mistyped `text` field is rejected with 422 and the
/// extractor is never invoked.
#[utoipa::path(
    post,
    path = "/ner",
    request_body = TextRequest,
    responses(
        (status = 200, description = "Entities detected in the input", body = NerResponse),
        (status = 422, description = "Body missing `text` or wrong type", body = ErrorBody),
        (status = 500, description = "The extractor failed on the input", body = ErrorBody)
    ),
    tag = "Ner"
)]
pub async fn extract_entities(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<NerResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    let entities = state
        .extractor
        .annotate(&request.text)
        .map_err(ApiError::Extraction)?;

    Ok(Json(NerResponse {
        entities: entities.into_iter().map(EntitySpan::from).collect(),
        input: request.text,
    }))
}
