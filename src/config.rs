//! Runtime configuration utilities for ner-workbench.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::nlp::registry::ModelId;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Folder holding installed model lexicon files.
    pub models_dir: PathBuf,
    /// Model used when a request does not name one.
    pub default_model: ModelId,
    /// Upper bound on submitted text size, in bytes.
    pub max_input_chars: usize,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let models_dir = env::var("MODELS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./models"));
        let default_model = match env::var("DEFAULT_MODEL") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid DEFAULT_MODEL `{raw}`"))?,
            Err(_) => ModelId::EnCoreWebSm,
        };
        let max_input_chars = env::var("MAX_INPUT_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50_000);

        std::fs::create_dir_all(&models_dir).context("creating models dir")?;

        Ok(Self {
            models_dir,
            default_model,
            max_input_chars,
        })
    }

    /// Convenience helper for paths under the models directory.
    pub fn join_models<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.models_dir.join(path)
    }
}
