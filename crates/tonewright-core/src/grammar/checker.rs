//! Grammar issue detection.
//!
//! A diagnostic pass that reports likely grammar slips without changing the
//! text: double spaces, lowercase sentence starts, commonly confused words,
//! repeated words, and missing terminal punctuation.
//!
//! The confusion list is deliberately separate from the rewrite tables in
//! [`crate::rewrite::spelling`]. Missing apostrophes ("dont") are fixed by the
//! rewrite pipeline but are not reported here.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::text;

/// Minimum length of a repeated word worth reporting ("the the", not "a a").
const MIN_REPEATED_WORD_LEN: usize = 3;

/// Commonly confused word patterns and the advice emitted for each.
static CONFUSION_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\byour a\b", "Replace \"your a\" with \"you're a\""),
        (r"(?i)\bits a\b", "Replace \"its a\" with \"it's a\""),
        (r"(?i)\btheir is\b", "Replace \"their is\" with \"there is\""),
        (
            r"(?i)\bthen I\b",
            "Check \"then I\": use \"than\" when making a comparison",
        ),
        (
            r"(?i)\beffect the\b",
            "Check \"effect the\": \"affect\" is usually the verb, \"effect\" the noun",
        ),
        (r"(?i)\baccept for\b", "Replace \"accept for\" with \"except for\""),
        (r"(?i)\bloose weight\b", "Replace \"loose weight\" with \"lose weight\""),
        (r"(?i)\bshould of\b", "Replace \"should of\" with \"should have\""),
        (r"(?i)\bcould of\b", "Replace \"could of\" with \"could have\""),
        (r"(?i)\bwould of\b", "Replace \"would of\" with \"would have\""),
    ]
    .into_iter()
    .map(|(pattern, advice)| (Regex::new(pattern).expect("valid regex"), advice))
    .collect()
});

/// Multiple consecutive spaces.
static DOUBLE_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"  +").expect("valid regex"));

/// Word tokens for repeated-word detection.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Check `input` for likely grammar issues.
///
/// Returns distinct advisory messages in scan order.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn check_grammar(input: &str) -> Vec<String> {
    let mut issues = IssueList::default();

    for sentence in text::split_sentences_raw(input) {
        if DOUBLE_SPACE.is_match(sentence) {
            issues.push("Multiple consecutive spaces found".to_string());
        }

        if sentence
            .trim_start()
            .chars()
            .next()
            .is_some_and(char::is_lowercase)
        {
            issues.push("Sentence should start with a capital letter".to_string());
        }

        for (pattern, advice) in CONFUSION_PATTERNS.iter() {
            if pattern.is_match(sentence) {
                issues.push((*advice).to_string());
            }
        }

        for word in repeated_words(sentence) {
            issues.push(format!("Repeated word: \"{word}\""));
        }
    }

    let trimmed = input.trim();
    if !trimmed.is_empty() && !trimmed.ends_with(['.', '!', '?']) {
        issues.push("Text should end with punctuation (., !, or ?)".to_string());
    }

    tracing::debug!(issue_count = issues.items.len(), "grammar check complete");
    issues.items
}

/// Words immediately repeated (separated only by whitespace), lowercased.
fn repeated_words(sentence: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut previous: Option<regex::Match<'_>> = None;

    for current in WORD.find_iter(sentence) {
        if let Some(prev) = previous {
            let gap = &sentence[prev.end()..current.start()];
            let word = current.as_str();
            if !gap.is_empty()
                && gap.chars().all(char::is_whitespace)
                && word.chars().count() >= MIN_REPEATED_WORD_LEN
                && prev.as_str().to_lowercase() == word.to_lowercase()
            {
                found.push(word.to_lowercase());
            }
        }
        previous = Some(current);
    }

    found
}

/// Insertion-ordered set of messages.
#[derive(Default)]
struct IssueList {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl IssueList {
    fn push(&mut self, message: String) {
        if self.seen.insert(message.clone()) {
            self.items.push(message);
        }
    }
}
