//! Tabular listing of extracted spans.

use serde::Serialize;

use crate::nlp::ner::Span;

/// One display row per detected entity.
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub entity: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
}

pub fn rows(spans: &[Span]) -> Vec<TableRow> {
    spans
        .iter()
        .map(|span| TableRow {
            entity: span.text.clone(),
            label: span.label.clone(),
            start: span.start,
            end: span.end,
        })
        .collect()
}
