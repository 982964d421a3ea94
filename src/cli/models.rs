//! CLI entry-point listing supported models and their availability.

use anyhow::Result;
use tracing::instrument;

use crate::{
    config::Settings,
    nlp::registry::{ModelId, ModelRegistry},
};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let registry = ModelRegistry::new(settings);
    for model in ModelId::ALL {
        let status = if registry.is_available(model) {
            "available"
        } else {
            "not installed"
        };
        println!("{:<16} {:<14} {}", model.as_str(), status, model.description());
    }
    Ok(())
}
