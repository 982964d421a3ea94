//! Model artefacts: gazetteer lexicons loaded from disk or the binary.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{config::Settings, nlp::registry::ModelId, nlp::NerError};

/// One gazetteer entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermEntry {
    pub phrase: String,
    pub label: String,
}

/// The on-disk model artefact consumed by [`crate::nlp::ner::LexiconNer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    pub name: String,
    pub description: String,
    /// Enables the regex rules for DATE/TIME/MONEY/PERCENT/QUANTITY spans.
    #[serde(default)]
    pub enable_patterns: bool,
    pub terms: Vec<TermEntry>,
}

/// File name a model installs under the models directory.
pub fn file_name(id: ModelId) -> String {
    format!("{id}.json")
}

fn bundled(id: ModelId) -> &'static str {
    match id {
        ModelId::EnCoreWebSm => include_str!("../../assets/en_core_web_sm.json"),
        ModelId::EnCoreWebMd => include_str!("../../assets/en_core_web_md.json"),
        ModelId::EnCoreWebLg => include_str!("../../assets/en_core_web_lg.json"),
    }
}

/// Load a model lexicon. Installed files win over bundled copies.
pub fn load(settings: &Settings, id: ModelId) -> Result<Lexicon, NerError> {
    let path = settings.join_models(file_name(id));
    if path.exists() {
        let raw = std::fs::read_to_string(&path)?;
        return Ok(serde_json::from_str(&raw)?);
    }
    if id.is_bundled() {
        return Ok(serde_json::from_str(bundled(id))?);
    }
    Err(NerError::ModelUnavailable(id))
}

/// Write the bundled lexicon for `id` into the models directory.
pub fn install(settings: &Settings, id: ModelId) -> Result<PathBuf, NerError> {
    std::fs::create_dir_all(&settings.models_dir)?;
    let path = settings.join_models(file_name(id));
    std::fs::write(&path, bundled(id))?;
    Ok(path)
}
