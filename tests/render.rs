use ner_workbench::nlp::ner::Span;
use ner_workbench::render::{chart, highlight, label_color, table};

fn span(text: &str, label: &str, start: usize, end: usize) -> Span {
    Span {
        text: text.to_string(),
        label: label.to_string(),
        start,
        end,
    }
}

#[test]
fn highlight_wraps_entities_and_escapes_markup() {
    let text = "Tim Cook <b>loves</b> Apple";
    let spans = vec![span("Tim Cook", "PERSON", 0, 8), span("Apple", "ORG", 22, 27)];
    let html = highlight::render(text, &spans);
    assert!(html.starts_with("<mark class=\"entity\""));
    assert!(html.contains("&lt;b&gt;loves&lt;/b&gt;"));
    assert!(html.contains("PERSON"));
    assert!(html.contains(label_color("ORG")));
    assert!(!html.contains("<b>"));
}

#[test]
fn highlight_skips_spans_outside_the_text() {
    let text = "short";
    let spans = vec![span("bogus", "ORG", 2, 40)];
    assert_eq!(highlight::render(text, &spans), "short");
}

#[test]
fn empty_result_set_renders_cleanly() {
    let html = highlight::render("nothing here", &[]);
    assert_eq!(html, "nothing here");
    assert!(table::rows(&[]).is_empty());
    assert!(chart::label_counts(&[]).is_empty());
}

#[test]
fn table_rows_preserve_order_and_offsets() {
    let spans = vec![span("Apple", "ORG", 0, 5), span("Boston", "GPE", 10, 16)];
    let rows = table::rows(&spans);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].entity, "Apple");
    assert_eq!(rows[1].start, 10);
    assert_eq!(rows[1].end, 16);
}

#[test]
fn chart_counts_sort_descending_with_full_width_max() {
    let spans = vec![
        span("Apple", "ORG", 0, 5),
        span("Google", "ORG", 6, 12),
        span("Tim Cook", "PERSON", 13, 21),
    ];
    let bars = chart::label_counts(&spans);
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].label, "ORG");
    assert_eq!(bars[0].count, 2);
    assert_eq!(bars[0].percent, 100);
    assert_eq!(bars[1].label, "PERSON");
    assert_eq!(bars[1].count, 1);
    assert_eq!(bars[1].percent, 50);
    assert_eq!(bars[0].color, label_color("ORG"));
}

#[test]
fn unknown_labels_get_the_fallback_colour() {
    assert_eq!(label_color("SOMETHING_ELSE"), "#cccccc");
}
