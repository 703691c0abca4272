//! OpenAPI spec generation and serving.

use axum::Json;
use utoipa::OpenApi;

use super::api;
use super::api_types;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "nerd API",
        description = "Named-entity recognition microservice",
        version = "0.1.0"
    ),
    paths(api::read_root, api::extract_entities),
    components(schemas(
        api_types::TextRequest,
        api_types::NerResponse,
        api_types::EntitySpan,
        api_types::LivenessResponse,
        api_types::ErrorBody,
    )),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Ner", description = "Entity extraction")
    )
)]
struct ApiDoc;

/// Serve the generated OpenAPI document.
pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
