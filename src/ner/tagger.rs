//! Gazetteer- and pattern-based tagging model.
//!
//! A `TaggerModel` is compiled from a `ModelArtifact` once at startup and is
//! immutable afterwards. Matching runs on byte offsets; candidate spans from
//! every matcher are resolved into a sorted, non-overlapping sequence
//! (higher-priority, then longer, then leftmost spans claim first) and
//! converted to character offsets.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use regex::Regex;

use super::artifact::{ModelArtifact, ModelError};
use super::{Entity, EntityExtractor, ExtractError};

/// Matching priority for gazetteer terms; beats any pattern on a tie.
const GAZETTEER_PRIORITY: u8 = 3;

/// Default model artifact compiled into the binary.
const EMBEDDED_ARTIFACT: &str = include_str!("../../models/en_ner_sm.json");

/// One compiled matching rule.
struct Matcher {
    label: String,
    regex: Regex,
    group: usize,
    priority: u8,
}

/// Pre-trained tagging model, immutable after load.
pub struct TaggerModel {
    id: String,
    matchers: Vec<Matcher>,
    person_stopwords: HashSet<String>,
}

impl TaggerModel {
    /// Load and compile a model artifact, or the embedded default when
    /// `path` is `None`. Any load or compile failure is returned to the
    /// caller, which treats it as fatal.
    pub fn load(path: Option<&Path>) -> Result<Self, ModelError> {
        let artifact = match path {
            Some(path) => ModelArtifact::from_path(path)?,
            None => ModelArtifact::from_json(EMBEDDED_ARTIFACT)?,
        };
        Self::from_artifact(&artifact)
    }

    /// Compile an already-parsed artifact.
    pub fn from_artifact(artifact: &ModelArtifact) -> Result<Self, ModelError> {
        let mut matchers = Vec::with_capacity(artifact.gazetteers.len() + artifact.patterns.len());

        for gazetteer in &artifact.gazetteers {
            matchers.push(Matcher {
                label: gazetteer.label.clone(),
                regex: compile_gazetteer(&gazetteer.label, &gazetteer.terms)?,
                group: 0,
                priority: GAZETTEER_PRIORITY,
            });
        }

        for pattern in &artifact.patterns {
            let regex = Regex::new(&pattern.regex).map_err(|source| ModelError::Pattern {
                label: pattern.label.clone(),
                source,
            })?;
            matchers.push(Matcher {
                label: pattern.label.clone(),
                regex,
                group: pattern.group,
                priority: pattern.priority,
            });
        }

        Ok(Self {
            id: artifact.id(),
            matchers,
            person_stopwords: artifact.person_stopwords.iter().cloned().collect(),
        })
    }
}

impl EntityExtractor for TaggerModel {
    fn model_id(&self) -> &str {
        &self.id
    }

    fn annotate(&self, text: &str) -> Result<Vec<Entity>, ExtractError> {
        let mut candidates = Vec::new();

        for matcher in &self.matchers {
            for captures in matcher.regex.captures_iter(text) {
                let Some(matched) = captures.get(matcher.group) else {
                    continue;
                };
                if matched.is_empty() {
                    continue;
                }
                if matcher.label == "PERSON" && self.person_stopwords.contains(matched.as_str()) {
                    continue;
                }
                candidates.push(Candidate {
                    start: matched.start(),
                    end: matched.end(),
                    label: &matcher.label,
                    priority: matcher.priority,
                });
            }
        }

        let resolved = resolve_overlaps(candidates);
        Ok(to_entities(text, &resolved))
    }
}

/// Candidate span in byte offsets, before overlap resolution.
struct Candidate<'m> {
    start: usize,
    end: usize,
    label: &'m str,
    priority: u8,
}

/// Keep a sorted, non-overlapping subset of candidate spans.
///
/// Spans claim text in rank order: higher priority first, then longer span,
/// then leftmost. A span overlapping an already-claimed span is dropped.
/// Gazetteer matches therefore beat pattern matches, and a full-name pattern
/// beats the looser capitalized-pair heuristic inside it.
fn resolve_overlaps(mut candidates: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    candidates.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then((b.end - b.start).cmp(&(a.end - a.start)))
            .then(a.start.cmp(&b.start))
    });

    let mut kept: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let overlaps = kept
            .iter()
            .any(|k| candidate.start < k.end && k.start < candidate.end);
        if !overlaps {
            kept.push(candidate);
        }
    }

    kept.sort_by_key(|c| c.start);
    kept
}

/// Convert byte-offset spans into character-offset entities.
fn to_entities(text: &str, spans: &[Candidate<'_>]) -> Vec<Entity> {
    let mut char_of_byte = HashMap::new();
    let mut char_count = 0;
    for (char_idx, (byte_idx, _)) in text.char_indices().enumerate() {
        char_of_byte.insert(byte_idx, char_idx);
        char_count = char_idx + 1;
    }
    char_of_byte.insert(text.len(), char_count);

    spans
        .iter()
        .map(|span| Entity {
            text: text[span.start..span.end].to_string(),
            label: span.label.to_string(),
            start_char: char_of_byte[&span.start],
            end_char: char_of_byte[&span.end],
        })
        .collect()
}

/// Build one alternation regex for a gazetteer, longest term first so the
/// leftmost-first alternation prefers the longest surface form.
fn compile_gazetteer(label: &str, terms: &[String]) -> Result<Regex, ModelError> {
    let mut sorted: Vec<&String> = terms.iter().collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let alternation = sorted
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"\b(?:{})\b", alternation)).map_err(|source| ModelError::Pattern {
        label: label.to_string(),
        source,
    })
}
