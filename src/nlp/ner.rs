//! Gazetteer-and-pattern NER backend behind the `Ner` trait.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::nlp::lexicon::Lexicon;

/// Extracted entity span with byte offsets into the source text.
///
/// Offsets always fall on char boundaries, so `text[start..end]` is the
/// matched substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
}

/// Trait for NER implementations.
pub trait Ner: Send + Sync + std::fmt::Debug {
    fn extract(&self, text: &str) -> Vec<Span>;
}

static PATTERN_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    let rules = [
        (
            r"(?i)\$\d+(?:,\d{3})*(?:\.\d+)?(?:\s?(?:million|billion|trillion))?",
            "MONEY",
        ),
        (r"\b\d+(?:\.\d+)?%", "PERCENT"),
        (
            r"(?i)\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\b(?:\s\d{1,2}(?:,\s?\d{4})?)?",
            "DATE",
        ),
        (r"(?i)\b(?:last|next|this)\s(?:week|month|quarter|year)\b", "DATE"),
        (
            r"(?i)\b\d{1,2}(?::\d{2})?\s?(?:am|pm)\b|\b(?:midnight|noon)\b",
            "TIME",
        ),
        (
            r"(?i)\b\d+(?:\.\d+)?\s?(?:km|kg|mg|miles?|pounds|tons?)\b",
            "QUANTITY",
        ),
    ];
    rules
        .iter()
        .map(|(pattern, label)| (Regex::new(pattern).expect("pattern rule compiles"), *label))
        .collect()
});

/// Lexicon-backed implementation: gazetteer scan plus optional regex rules.
#[derive(Debug)]
pub struct LexiconNer {
    lexicon: Lexicon,
}

impl LexiconNer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }
}

impl Ner for LexiconNer {
    fn extract(&self, text: &str) -> Vec<Span> {
        let mut candidates = Vec::new();
        for term in &self.lexicon.terms {
            find_phrase(text, &term.phrase, &term.label, &mut candidates);
        }
        if self.lexicon.enable_patterns {
            for (rule, label) in PATTERN_RULES.iter() {
                for found in rule.find_iter(text) {
                    candidates.push(Span {
                        text: found.as_str().to_string(),
                        label: (*label).to_string(),
                        start: found.start(),
                        end: found.end(),
                    });
                }
            }
        }
        resolve_overlaps(candidates)
    }
}

/// ASCII-case-insensitive scan for `phrase` on word boundaries.
fn find_phrase(text: &str, phrase: &str, label: &str, out: &mut Vec<Span>) {
    if phrase.is_empty() || phrase.len() > text.len() {
        return;
    }
    let bytes = text.as_bytes();
    let mut i = 0;
    while i + phrase.len() <= text.len() {
        if !text.is_char_boundary(i) {
            i += 1;
            continue;
        }
        let end = i + phrase.len();
        if text.is_char_boundary(end)
            && text[i..end].eq_ignore_ascii_case(phrase)
            && boundary_before(bytes, i)
            && boundary_after(bytes, end)
        {
            out.push(Span {
                text: text[i..end].to_string(),
                label: label.to_string(),
                start: i,
                end,
            });
            i = end;
        } else {
            i += 1;
        }
    }
}

fn boundary_before(bytes: &[u8], start: usize) -> bool {
    start == 0 || !bytes[start - 1].is_ascii_alphanumeric()
}

fn boundary_after(bytes: &[u8], end: usize) -> bool {
    end == bytes.len() || !bytes[end].is_ascii_alphanumeric()
}

/// Keep the earliest-starting, longest candidates and drop anything that
/// overlaps an already kept span. Exact duplicates collapse to one span.
fn resolve_overlaps(mut candidates: Vec<Span>) -> Vec<Span> {
    candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
    let mut spans: Vec<Span> = Vec::new();
    for candidate in candidates {
        match spans.last() {
            Some(kept) if candidate.start < kept.end => continue,
            _ => spans.push(candidate),
        }
    }
    spans
}
