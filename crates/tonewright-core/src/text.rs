//! Text segmentation.
//!
//! Splits raw text into words, sentences, and paragraphs with fixed delimiter
//! rules. Every function here is total: empty or whitespace-only input yields
//! empty sequences (or a sentence count of one).

use regex::Regex;
use std::sync::LazyLock;

/// A word is one or more word characters.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// A sentence terminator group: one or more of `.`, `!`, `?`.
static TERMINATOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Two or more consecutive newlines. Lines holding only spaces or tabs count as blank.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n(?:[ \t]*\r?\n)+").expect("valid regex"));

/// Extract word tokens, preserving case.
///
/// Punctuation splits words, so `don't` yields `don` and `t`.
pub fn extract_words(text: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Count sentence-terminator groups (`...` counts once).
pub fn count_sentence_terminators(text: &str) -> usize {
    TERMINATOR_PATTERN.find_iter(text).count()
}

/// Number of sentences, never less than one.
///
/// Terminator-free input still counts as a single sentence so that averages
/// stay defined.
pub fn sentence_count(text: &str) -> usize {
    count_sentence_terminators(text).max(1)
}

/// Split text into trimmed, non-empty sentences.
///
/// The terminators themselves are dropped.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<&str> {
    TERMINATOR_PATTERN
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into sentence-sized chunks without trimming them.
///
/// Used where the raw spacing matters (double-space detection).
pub fn split_sentences_raw(text: &str) -> Vec<&str> {
    TERMINATOR_PATTERN
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Split text into non-blank paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
