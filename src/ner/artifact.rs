//! Pre-trained model artifact format.
//!
//! An artifact is a JSON document bundling gazetteers (exact surface forms
//! per label) and regex patterns. It is parsed and validated once at process
//! start; any defect is fatal to startup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading or validating a model artifact.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {label} pattern: {source}")]
    Pattern {
        label: String,
        #[source]
        source: regex::Error,
    },

    #[error("model artifact '{0}' defines no gazetteers or patterns")]
    Empty(String),

    #[error("gazetteer '{0}' has no terms")]
    EmptyGazetteer(String),

    #[error("label '{0}' is not in the artifact's taxonomy")]
    UnknownLabel(String),
}

/// Surface forms sharing one label, matched exactly on word boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gazetteer {
    pub label: String,
    pub terms: Vec<String>,
}

/// A regex pattern producing spans with one label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSpec {
    pub label: String,
    pub regex: String,
    /// Capture group holding the span (0 = whole match).
    #[serde(default)]
    pub group: usize,
    /// Tie-break weight when spans of equal extent compete.
    #[serde(default = "default_priority")]
    pub priority: u8,
}

fn default_priority() -> u8 {
    1
}

/// Deserialized model artifact, validated but not yet compiled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    pub version: String,
    /// Label taxonomy this model emits. When non-empty, every gazetteer and
    /// pattern label must appear here.
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub gazetteers: Vec<Gazetteer>,
    #[serde(default)]
    pub patterns: Vec<PatternSpec>,
    /// Surface forms never emitted as PERSON by the name heuristics.
    #[serde(default)]
    pub person_stopwords: Vec<String>,
}

impl ModelArtifact {
    /// Parse an artifact from JSON and validate its cross-references.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Read and parse an artifact file.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let json = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Identifier combining name and version.
    pub fn id(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.gazetteers.is_empty() && self.patterns.is_empty() {
            return Err(ModelError::Empty(self.name.clone()));
        }

        for gazetteer in &self.gazetteers {
            if gazetteer.terms.is_empty() {
                return Err(ModelError::EmptyGazetteer(gazetteer.label.clone()));
            }
        }

        if !self.labels.is_empty() {
            let labelled = self
                .gazetteers
                .iter()
                .map(|g| &g.label)
                .chain(self.patterns.iter().map(|p| &p.label));
            for label in labelled {
                if !self.labels.contains(label) {
                    return Err(ModelError::UnknownLabel(label.clone()));
                }
            }
        }

        Ok(())
    }
}
