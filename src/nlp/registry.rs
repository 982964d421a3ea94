//! Model identifiers and the process-lifetime model cache.

use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
    sync::{Arc, Mutex},
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    config::Settings,
    nlp::{
        lexicon,
        ner::{LexiconNer, Ner},
        NerError,
    },
};

/// The fixed set of supported pretrained model identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum ModelId {
    /// Small English pipeline, bundled with the binary.
    #[value(name = "en_core_web_sm")]
    #[serde(rename = "en_core_web_sm")]
    EnCoreWebSm,
    /// Medium English pipeline, adds date/money/percent pattern rules.
    #[value(name = "en_core_web_md")]
    #[serde(rename = "en_core_web_md")]
    EnCoreWebMd,
    /// Large English pipeline with the widest gazetteer coverage.
    #[value(name = "en_core_web_lg")]
    #[serde(rename = "en_core_web_lg")]
    EnCoreWebLg,
}

impl ModelId {
    pub const ALL: [ModelId; 3] = [
        ModelId::EnCoreWebSm,
        ModelId::EnCoreWebMd,
        ModelId::EnCoreWebLg,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnCoreWebSm => "en_core_web_sm",
            Self::EnCoreWebMd => "en_core_web_md",
            Self::EnCoreWebLg => "en_core_web_lg",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::EnCoreWebSm => "small English model (bundled)",
            Self::EnCoreWebMd => "medium English model with pattern rules",
            Self::EnCoreWebLg => "large English model with extended coverage",
        }
    }

    /// Bundled models load from the binary when no lexicon file is installed.
    pub fn is_bundled(&self) -> bool {
        matches!(self, Self::EnCoreWebSm)
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = NerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| NerError::UnknownModel(s.to_string()))
    }
}

/// Caches one loaded inference object per model id for the process lifetime.
pub struct ModelRegistry {
    settings: Settings,
    cache: Mutex<HashMap<ModelId, Arc<dyn Ner>>>,
}

impl ModelRegistry {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Return the cached inference object, loading it on first use.
    pub fn get(&self, id: ModelId) -> Result<Arc<dyn Ner>, NerError> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|_| NerError::Internal("model cache lock poisoned".into()))?;
        if let Some(model) = cache.get(&id) {
            return Ok(Arc::clone(model));
        }
        let lexicon = lexicon::load(&self.settings, id)?;
        info!(model = %id, terms = lexicon.terms.len(), "loaded model");
        let model: Arc<dyn Ner> = Arc::new(LexiconNer::new(lexicon));
        cache.insert(id, Arc::clone(&model));
        Ok(model)
    }

    /// Whether the model can be loaded without further installation.
    pub fn is_available(&self, id: ModelId) -> bool {
        id.is_bundled() || self.settings.join_models(lexicon::file_name(id)).exists()
    }
}
