//! CLI entry-point for installing bundled model lexicons.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    nlp::{lexicon, registry::ModelId},
};

/// Args for the `fetch` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Model to install; installs every model when omitted.
    #[arg(long, value_enum)]
    pub model: Option<ModelId>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let targets: Vec<ModelId> = match args.model {
        Some(model) => vec![model],
        None => ModelId::ALL.to_vec(),
    };
    for model in targets {
        let path = lexicon::install(&settings, model)?;
        info!(model = %model, path = %path.display(), "installed model lexicon");
    }
    Ok(())
}
