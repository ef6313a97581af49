//! Final punctuation and spacing cleanup.
//!
//! Always the last rewrite stage. [`cleanup`] is idempotent: running it on its
//! own output changes nothing. The step order matters for that; spacing
//! around punctuation is settled before capitalization looks for sentence
//! starts, and the terminal full stop is added last.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static INNER_SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S)[ \t]{2,}").expect("valid regex"));

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[ \t]*([^"]*?)[ \t]*""#).expect("valid regex"));

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+([.!?,;:])").expect("valid regex"));

static DOT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{2,}").expect("valid regex"));

static BANG_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!{2,}").expect("valid regex"));

static QUESTION_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?{2,}").expect("valid regex"));

static MISSING_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?,;:])(\p{L})").expect("valid regex"));

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

static SENTENCE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^\s*|[.!?]\s+)(\p{Ll})").expect("valid regex"));

static TRAILING_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]+(\r?)$").expect("valid regex"));

/// Closing marks that may follow a sentence terminator.
const CLOSERS: &[char] = &['"', '\'', ')', ']', '”', '’'];

/// Tidy spacing, punctuation, and capitalization, and end with a terminator.
pub fn cleanup(text: &str) -> String {
    let text = INNER_SPACE_RUN.replace_all(text, "${1} ");
    let text = QUOTED.replace_all(&text, "\"${1}\"");
    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "${1}");
    let text = collapse_terminal_runs(&text);
    let text = MISSING_SPACE.replace_all(&text, "${1} ${2}");
    let text = collapse_repeated_words(&text);
    let text = capitalize_sentence_starts(&text);
    let text = TRAILING_SPACE.replace_all(&text, "${1}");
    terminate(text.trim())
}

/// `!!` and `??` become one mark; two dots become one, three or more an ellipsis.
fn collapse_terminal_runs(text: &str) -> String {
    let text = DOT_RUN.replace_all(text, |caps: &Captures<'_>| {
        if caps[0].len() >= 3 { "..." } else { "." }.to_string()
    });
    let text = BANG_RUN.replace_all(&text, "!");
    QUESTION_RUN.replace_all(&text, "?").into_owned()
}

/// Drop an alphabetic word that repeats the previous one, ignoring case.
///
/// Only whitespace may separate the two, and at most one line break, so the
/// last word of a paragraph and the first of the next are never merged.
fn collapse_repeated_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_end = 0;
    let mut previous: Option<&str> = None;

    for word in WORD.find_iter(text) {
        let gap = &text[last_end..word.start()];
        let current = word.as_str();
        if let Some(prev) = previous
            && is_plain_gap(gap)
            && current.chars().all(char::is_alphabetic)
            && prev.to_lowercase() == current.to_lowercase()
        {
            last_end = word.end();
            continue;
        }
        out.push_str(gap);
        out.push_str(current);
        last_end = word.end();
        previous = Some(current);
    }

    out.push_str(&text[last_end..]);
    out
}

fn is_plain_gap(gap: &str) -> bool {
    !gap.is_empty() && gap.chars().all(char::is_whitespace) && gap.matches('\n').count() <= 1
}

fn capitalize_sentence_starts(text: &str) -> String {
    SENTENCE_START
        .replace_all(text, |caps: &Captures<'_>| {
            format!("{}{}", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}

/// Make sure non-empty text ends in `.`, `!`, or `?` (closing quotes and
/// brackets aside). A trailing `,`, `;`, or `:` is replaced.
fn terminate(text: &str) -> String {
    if text.is_empty() || ends_with_terminator(text) {
        return text.to_string();
    }
    let stripped = text.strip_suffix([',', ';', ':']).unwrap_or(text);
    if ends_with_terminator(stripped) {
        stripped.to_string()
    } else {
        format!("{stripped}.")
    }
}

fn ends_with_terminator(text: &str) -> bool {
    text.trim_end_matches(CLOSERS).ends_with(['.', '!', '?'])
}
