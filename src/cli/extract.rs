//! One-shot extraction command.
//!
//! Runs the same extractor the server uses, without the HTTP layer.

use std::io::Read;
use std::path::PathBuf;

use console::style;

use crate::ner::{EntityExtractor, TaggerModel};

/// Extract entities from text and print them as JSON.
pub async fn cmd_extract(
    text: Option<String>,
    file: Option<PathBuf>,
    model: Option<PathBuf>,
) -> anyhow::Result<()> {
    let input = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let tagger = TaggerModel::load(model.as_deref())?;
    let entities = tagger.annotate(&input)?;

    if entities.is_empty() {
        eprintln!("{} No entities found", style("→").cyan());
    }
    println!("{}", serde_json::to_string_pretty(&entities)?);

    Ok(())
}
