//! Natural language processing layer: model cache and extraction calls.

pub mod lexicon;
pub mod ner;
pub mod registry;

use thiserror::Error;
use tracing::debug;

use crate::nlp::{
    ner::Span,
    registry::{ModelId, ModelRegistry},
};

/// Failures surfaced by model loading and extraction.
#[derive(Debug, Error)]
pub enum NerError {
    #[error("model `{0}` is not installed; run `ner-workbench fetch --model {0}` to install it")]
    ModelUnavailable(ModelId),
    #[error("unknown model `{0}`; supported models are en_core_web_sm, en_core_web_md and en_core_web_lg")]
    UnknownModel(String),
    #[error("the input text is empty; nothing to analyze")]
    EmptyInput,
    #[error("the input text exceeds the {0} byte limit")]
    InputTooLong(usize),
    #[error("reading model data: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing model data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    Internal(String),
}

/// Run one synchronous extraction over the submitted text.
///
/// Spans come back ordered by start offset and never overlap.
pub fn analyze(registry: &ModelRegistry, model: ModelId, text: &str) -> Result<Vec<Span>, NerError> {
    if text.trim().is_empty() {
        return Err(NerError::EmptyInput);
    }
    let limit = registry.settings().max_input_chars;
    if text.len() > limit {
        return Err(NerError::InputTooLong(limit));
    }
    let ner = registry.get(model)?;
    let spans = ner.extract(text);
    debug!(%model, spans = spans.len(), "extraction complete");
    Ok(spans)
}
