//! Named-entity extraction.
//!
//! Provides an `EntityExtractor` trait for pluggable extraction backends and
//! the built-in `TaggerModel`, which compiles a pre-trained artifact of
//! gazetteers and patterns once at startup.

mod artifact;
mod tagger;

pub use artifact::{Gazetteer, ModelArtifact, ModelError, PatternSpec};
pub use tagger::TaggerModel;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single extracted entity and its position in the input.
///
/// `start_char` and `end_char` are 0-based character offsets over the
/// original input forming a half-open interval; the characters in
/// `[start_char, end_char)` are exactly `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    /// Category from the model's taxonomy (e.g. PERSON, ORG, DATE). The
    /// service never interprets labels.
    pub label: String,
    pub start_char: usize,
    pub end_char: usize,
}

/// Errors raised by an extractor while annotating.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("annotation failed: {0}")]
    Failed(String),
}

/// Trait for pluggable extraction backends.
///
/// The built-in `TaggerModel` matches gazetteers and patterns from a
/// pre-trained artifact. Other backends (ONNX sequence taggers, remote
/// models) can implement this trait and be injected into the server state
/// instead.
pub trait EntityExtractor: Send + Sync {
    /// Identifier of the loaded model (e.g. "en_ner_sm@1.0").
    fn model_id(&self) -> &str;

    /// Extract named entities from `text`, ordered by `start_char`
    /// ascending with no overlapping spans.
    fn annotate(&self, text: &str) -> Result<Vec<Entity>, ExtractError>;
}
