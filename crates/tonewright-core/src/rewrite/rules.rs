//! Declarative text substitutions.
//!
//! Rewrite stages are data: ordered lists of [`Substitution`] patterns folded
//! left to right with [`apply_all`], or a [`WordMap`] of whole-word
//! replacements applied in one pass. Both preserve the capitalization style of
//! what they replace: when the matched text starts with an uppercase letter,
//! the replacement's first letter is capitalized (and nothing else changes).

use std::collections::HashMap;
use std::fmt;

use regex::{Captures, Regex};

/// One regex substitution.
///
/// The replacement may reference capture groups (`${1}`).
#[derive(Clone)]
pub struct Substitution {
    pattern: Regex,
    replacement: &'static str,
}

impl Substitution {
    /// Compile a substitution. Panics on an invalid pattern, which is a
    /// programming error in a built-in table.
    pub fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid regex"),
            replacement,
        }
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The replacement template.
    pub const fn replacement(&self) -> &'static str {
        self.replacement
    }

    /// Replace every match in `text`.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures<'_>| {
                let mut out = String::new();
                caps.expand(self.replacement, &mut out);
                match_case(&caps[0], out)
            })
            .into_owned()
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Substitution")
            .field("pattern", &self.pattern.as_str())
            .field("replacement", &self.replacement)
            .finish()
    }
}

/// Fold `rules` over `text` in list order. Each rule sees the previous output.
pub fn apply_all(text: &str, rules: &[Substitution]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

/// Whole-word, case-insensitive replacement table applied in a single pass.
///
/// Keys may contain spaces (matched against any whitespace run) and
/// apostrophes (matched against `'` or `’`). Longer keys win over their
/// prefixes, so "a lot of" is replaced before "a lot" could be.
pub struct WordMap {
    entries: &'static [(&'static str, &'static str)],
    pattern: Regex,
    lookup: HashMap<String, &'static str>,
}

impl WordMap {
    /// Build a map from `(from, to)` pairs. `from` keys are lowercase.
    pub fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        let mut keys: Vec<&str> = entries.iter().map(|(from, _)| *from).collect();
        keys.sort_by_key(|k| std::cmp::Reverse(k.len()));

        let alternatives: Vec<String> = keys.iter().map(|k| key_pattern(k)).collect();
        let pattern = Regex::new(&format!("(?i)(?:{})", alternatives.join("|")))
            .expect("valid regex");

        let lookup = entries
            .iter()
            .map(|(from, to)| (normalize_key(from), *to))
            .collect();

        Self {
            entries,
            pattern,
            lookup,
        }
    }

    /// The `(from, to)` pairs this map was built from, in declaration order.
    pub const fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// Replace every whole-word occurrence of a key.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures<'_>| {
                let matched = &caps[0];
                self.lookup
                    .get(&normalize_key(matched))
                    .map_or_else(|| matched.to_string(), |to| match_case(matched, (*to).to_string()))
            })
            .into_owned()
    }
}

impl fmt::Debug for WordMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordMap")
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// Regex fragment for a literal key with word boundaries on word-character edges.
fn key_pattern(key: &str) -> String {
    let body = regex::escape(key)
        .replace(' ', r"\s+")
        .replace('\'', "['’]");
    let start = if key.starts_with(is_word_char) { r"\b" } else { "" };
    let end = if key.ends_with(is_word_char) { r"\b" } else { "" };
    format!("{start}{body}{end}")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lowercase, straight apostrophes, single spaces.
fn normalize_key(s: &str) -> String {
    s.to_lowercase()
        .replace('’', "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize `replacement` when `matched` starts with an uppercase letter.
fn match_case(matched: &str, replacement: String) -> String {
    if matched.chars().next().is_some_and(char::is_uppercase) {
        capitalize_first(&replacement)
    } else {
        replacement
    }
}

/// Uppercase the first character of `s`, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
