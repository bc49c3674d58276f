//! Whitespace normalization and sentence splitting.
//!
//! A sentence ends at `.`, `!` or `?` followed by whitespace, or at the
//! end of the text. There is no abbreviation or quotation handling:
//! `"e.g. this"` splits after `e.g.`, while `"3.14"` stays whole because
//! no whitespace follows the period.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// Terminal punctuation followed by the whitespace that separates it from
// the next sentence. The punctuation is one ASCII byte.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// A sentence of normalized text with its word count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub word_count: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let word_count = word_count(&text);
        Self { text, word_count }
    }
}

/// Count whitespace-delimited words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Trim the text and collapse every whitespace run into one space.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Split text into sentences, in order.
///
/// Terminal punctuation stays attached to its sentence and the
/// separating whitespace is dropped. The text after the last boundary
/// is kept even without punctuation. Empty or whitespace-only input
/// yields no sentences.
///
/// # Example
///
/// ```
/// use shorts_creator::core::chunker::split_sentences;
///
/// let sentences = split_sentences("Hi there!  How are\nyou? Fine");
/// let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
/// assert_eq!(texts, vec!["Hi there!", "How are you?", "Fine"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(&normalized) {
        let end = boundary.start() + 1;
        sentences.push(Sentence::new(&normalized[start..end]));
        start = boundary.end();
    }

    // Normalized text never ends in whitespace, so the tail is non-empty
    sentences.push(Sentence::new(&normalized[start..]));

    sentences
}
