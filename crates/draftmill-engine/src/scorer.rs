//! Heuristic quality scoring for generated article bodies.
//!
//! Five checks, 20 points each. The score is advisory: it is persisted on
//! the content record and surfaced in the activity log, but never blocks a
//! run.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

const MIN_WORDS: usize = 300;
const MIN_PARAGRAPHS: usize = 3;
const SENTENCE_LENGTH_RANGE: (f32, f32) = (10.0, 20.0);
const MIN_UNIQUENESS: f32 = 0.6;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h[2-6][^>]*>.*?</h[2-6]>").expect("heading regex is valid")
});

/// Result of scoring one body.
#[derive(Debug, Clone)]
pub struct QualityReport {
    /// 0..=100 in steps of 20.
    pub score: i16,
    /// Words in the body after HTML is stripped.
    pub word_count: usize,
    pub avg_sentence_length: f32,
    /// One entry per failed check.
    pub issues: Vec<&'static str>,
}

/// Score an HTML article body. Pure and deterministic.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score(body: &str) -> QualityReport {
    let words = extract_words(body);
    let word_count = words.len();

    let sentence_count = body.matches(['.', '!', '?']).count();
    let avg_sentence_length = if sentence_count > 0 {
        word_count as f32 / sentence_count as f32
    } else {
        0.0
    };

    let distinct: HashSet<&str> = words.iter().map(String::as_str).collect();
    let uniqueness = if word_count > 0 {
        distinct.len() as f32 / word_count as f32
    } else {
        0.0
    };

    let mut points = 0;
    let mut issues = Vec::new();

    if word_count >= MIN_WORDS {
        points += 20;
    } else {
        issues.push("too short");
    }

    if HEADING_RE.is_match(body) {
        points += 20;
    } else {
        issues.push("missing headings");
    }

    if body.split("</p>").count() >= MIN_PARAGRAPHS {
        points += 20;
    } else {
        issues.push("not enough paragraphs");
    }

    let (lo, hi) = SENTENCE_LENGTH_RANGE;
    if avg_sentence_length >= lo && avg_sentence_length <= hi {
        points += 20;
    } else {
        issues.push("sentence length issues");
    }

    if uniqueness >= MIN_UNIQUENESS {
        points += 20;
    } else {
        issues.push("low uniqueness");
    }

    QualityReport {
        score: points,
        word_count,
        avg_sentence_length,
        issues,
    }
}

/// Lowercased alphanumeric words from a body after HTML tags are removed.
fn extract_words(body: &str) -> Vec<String> {
    strip_html(body)
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// Remove HTML tags from a fragment, keeping the text content.
#[must_use]
pub fn strip_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
