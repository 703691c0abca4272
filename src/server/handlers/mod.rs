//! HTTP request handlers for the NER service.

mod api;
mod api_types;
mod openapi;

// Re-export handlers for use by the router
pub use api::{extract_entities, read_root};
pub use api_types::{ApiError, EntitySpan, ErrorBody, LivenessResponse, NerResponse, TextRequest};
pub use openapi::serve_openapi;
