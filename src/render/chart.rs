//! Label frequency aggregation for the bar chart view.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{nlp::ner::Span, render::label_color};

/// One bar in the per-label frequency chart.
#[derive(Debug, Clone, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
    /// Bar width as a percentage of the most frequent label.
    pub percent: usize,
    pub color: &'static str,
}

/// Aggregate spans into bars sorted by descending count, then label.
pub fn label_counts(spans: &[Span]) -> Vec<LabelCount> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for span in spans {
        *counts.entry(span.label.clone()).or_insert(0) += 1;
    }
    let max = counts.values().copied().max().unwrap_or(0).max(1);
    let mut bars: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| {
            let color = label_color(&label);
            LabelCount {
                label,
                count,
                percent: count * 100 / max,
                color,
            }
        })
        .collect();
    bars.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    bars
}
