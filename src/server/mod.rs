//! Web server exposing the entity extractor over HTTP.
//!
//! The whole surface is a request/response adapter: a liveness endpoint and
//! a single extraction endpoint, plus the generated OpenAPI document. The
//! loaded model is the only shared state and is immutable after startup.

mod handlers;
mod routes;

pub use handlers::{ApiError, EntitySpan, ErrorBody, LivenessResponse, NerResponse, TextRequest};
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::ner::{EntityExtractor, TaggerModel};

/// Shared state for the web server.
///
/// The extractor is constructed once at startup and injected here; handlers
/// receive it by reference through the request's state and never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn EntityExtractor>,
}

impl AppState {
    pub fn new(extractor: Arc<dyn EntityExtractor>) -> Self {
        Self { extractor }
    }
}

/// Start the web server.
///
/// Loads the model artifact first; a load failure aborts startup.
pub async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let model = TaggerModel::load(settings.model.as_deref())?;
    tracing::info!(model = model.model_id(), "model artifact loaded");

    let state = AppState::new(Arc::new(model));
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app() -> axum::Router {
        let model = TaggerModel::load(None).expect("embedded model should load");
        create_router(AppState::new(Arc::new(model)))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn post_ner(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/ner")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_liveness() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "NER microservice is running!");
    }

    #[tokio::test]
    async fn test_liveness_independent_of_prior_requests() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(post_ner(r#"{"text": "Berlin"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(!json["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ner_echoes_input() {
        let response = test_app()
            .oneshot(post_ner(r#"{"text": "no entities here"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["input"], "no entities here");
        assert_eq!(json["entities"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_ner_missing_text_is_422() {
        let response = test_app()
            .oneshot(post_ner(r#"{"body": "wrong field"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["error"], true);
    }

    #[tokio::test]
    async fn test_ner_wrong_type_is_422() {
        let response = test_app()
            .oneshot(post_ner(r#"{"text": 123}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_ner_malformed_body_is_422() {
        let response = test_app().oneshot(post_ner("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_ner_person_and_place_scenario() {
        let response = test_app()
            .oneshot(post_ner(r#"{"text": "Barack Obama was born in Hawaii."}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["input"], "Barack Obama was born in Hawaii.");

        let entities = json["entities"].as_array().unwrap();
        assert!(entities
            .iter()
            .any(|e| e["text"] == "Barack Obama" && e["label"] == "PERSON"));
        assert!(entities
            .iter()
            .any(|e| e["text"] == "Hawaii" && e["label"] == "GPE"));
    }

    #[tokio::test]
    async fn test_openapi_document() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["paths"]["/ner"]["post"].is_object());
    }
}
