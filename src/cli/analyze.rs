//! CLI entry-point for one-shot entity extraction.

use std::{
    io::{Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, ValueEnum};
use tracing::instrument;

use crate::{
    config::Settings,
    nlp::{
        self,
        ner::Span,
        registry::{ModelId, ModelRegistry},
    },
    render::{export, table},
};

/// Args for the `analyze` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Model identifier to run; defaults to the configured model.
    #[arg(long, value_enum)]
    pub model: Option<ModelId>,
    /// Text to analyze; reads stdin when neither --text nor --input is given.
    #[arg(long)]
    pub text: Option<String>,
    /// Read the text from a file instead.
    #[arg(long, conflicts_with = "text")]
    pub input: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
    /// Write output to a file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let text = read_text(&args)?;
    let model = args.model.unwrap_or(settings.default_model);
    let registry = ModelRegistry::new(settings);
    let spans = nlp::analyze(&registry, model, &text)?;

    let rendered: Vec<u8> = match args.format {
        OutputFormat::Table => render_table(&spans).into_bytes(),
        OutputFormat::Json => serde_json::to_vec_pretty(&table::rows(&spans))?,
        OutputFormat::Csv => export::to_csv(&spans)?,
    };
    match args.output {
        Some(path) => std::fs::write(&path, rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => std::io::stdout().write_all(&rendered)?,
    }
    Ok(())
}

fn read_text(args: &Args) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}

fn render_table(spans: &[Span]) -> String {
    let rows = table::rows(spans);
    if rows.is_empty() {
        return "no entities found\n".to_string();
    }
    let mut out = String::new();
    out.push_str(&format!(
        "{:<30} {:<12} {:>6} {:>6}\n",
        "ENTITY", "LABEL", "START", "END"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<30} {:<12} {:>6} {:>6}\n",
            row.entity, row.label, row.start, row.end
        ));
    }
    out
}
