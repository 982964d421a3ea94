//! Stateless presentation transforms over extracted spans.

pub mod chart;
pub mod export;
pub mod highlight;
pub mod table;

/// Fixed display palette for common entity labels.
pub fn label_color(label: &str) -> &'static str {
    match label {
        "PERSON" => "#7aecec",
        "ORG" => "#feca74",
        "GPE" => "#ff9561",
        "LOC" => "#ff8197",
        "DATE" | "TIME" => "#bfe1d9",
        "MONEY" | "PERCENT" | "QUANTITY" => "#e4e7d2",
        "WORK_OF_ART" => "#f0d0ff",
        "FAC" => "#aab7d4",
        "PRODUCT" => "#bfeeb7",
        "EVENT" => "#f89e96",
        "LAW" => "#ddd1ff",
        "LANGUAGE" => "#ff8461",
        _ => "#cccccc",
    }
}
