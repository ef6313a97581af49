//! Audience tone: professional and friendly rewrites.

use std::sync::LazyLock;

use super::register;
use super::rules::{self, Substitution, WordMap};

/// Everyday verbs and their business-register equivalents.
pub static PROFESSIONAL_VERBS: &[(&str, &str)] = &[
    ("get", "obtain"),
    ("got", "obtained"),
    ("buy", "purchase"),
    ("help", "assist"),
    ("use", "utilize"),
    ("start", "commence"),
    ("end", "conclude"),
    ("show", "demonstrate"),
    ("need", "require"),
    ("ask", "inquire"),
    ("tell", "inform"),
    ("check", "verify"),
    ("fix", "resolve"),
    ("try", "attempt"),
    ("think", "believe"),
    ("make sure", "ensure"),
    ("find out", "determine"),
];

/// Directives and their warmer phrasing.
pub static FRIENDLY_PHRASES: &[(&str, &str)] = &[
    ("you must", "please"),
    ("you need to", "please"),
    ("you should", "you might want to"),
    ("is required", "is needed"),
    ("is prohibited", "isn't allowed"),
    ("failure to", "not being able to"),
    ("immediately", "as soon as you can"),
    ("pursuant to", "following"),
];

/// Legalese dropped from friendly text, with the space after it.
static FRIENDLY_REMOVALS: LazyLock<Vec<Substitution>> =
    LazyLock::new(|| vec![Substitution::new(r"(?i)\bhereby\b[ \t]*", "")]);

/// Opening added to friendly text that doesn't already thank the reader.
pub const THANK_YOU: &str = "Thank you for reading. ";

static PROFESSIONAL_MAP: LazyLock<WordMap> = LazyLock::new(|| WordMap::new(PROFESSIONAL_VERBS));

static FRIENDLY_MAP: LazyLock<WordMap> = LazyLock::new(|| WordMap::new(FRIENDLY_PHRASES));

/// Formalize, then prefer formal business verbs.
pub fn professionalize(text: &str) -> String {
    PROFESSIONAL_MAP.apply(&register::formalize(text))
}

/// Thank the reader and soften directives.
///
/// Blank text is left blank rather than turned into a lone thank-you.
pub fn befriend(text: &str) -> String {
    let text = if text.trim().is_empty() || text.to_lowercase().contains("thank") {
        text.to_string()
    } else {
        format!("{THANK_YOU}{}", text.trim_start())
    };
    let text = FRIENDLY_MAP.apply(&text);
    rules::apply_all(&text, &FRIENDLY_REMOVALS)
}
