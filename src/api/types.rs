//! Shared DTOs for JSON requests and responses.

use serde::{Deserialize, Serialize};

use crate::render::chart::LabelCount;

#[derive(Debug, Clone, Serialize)]
pub struct EntityDto {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisDto {
    pub model: String,
    pub entity_count: usize,
    pub entities: Vec<EntityDto>,
    pub label_counts: Vec<LabelCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelDto {
    pub id: String,
    pub description: String,
    pub available: bool,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Falls back to the configured default model when omitted.
    pub model: Option<String>,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    pub model: String,
    pub text: String,
}
