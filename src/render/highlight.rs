//! Inline HTML highlighting of entity spans.

use crate::{nlp::ner::Span, render::label_color};

/// Render the source text with each entity wrapped in a coloured mark.
///
/// Expects the ordered, non-overlapping spans produced by extraction; spans
/// falling outside the text are skipped rather than panicking.
pub fn render(text: &str, spans: &[Span]) -> String {
    let mut html = String::with_capacity(text.len() * 2);
    let mut cursor = 0;
    for span in spans {
        if span.start < cursor || span.end > text.len() || span.start >= span.end {
            continue;
        }
        escape_into(&text[cursor..span.start], &mut html);
        html.push_str("<mark class=\"entity\" style=\"background: ");
        html.push_str(label_color(&span.label));
        html.push_str("\">");
        escape_into(&text[span.start..span.end], &mut html);
        html.push_str("<span class=\"entity-label\">");
        escape_into(&span.label, &mut html);
        html.push_str("</span></mark>");
        cursor = span.end;
    }
    escape_into(&text[cursor..], &mut html);
    html
}

fn escape_into(raw: &str, out: &mut String) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
