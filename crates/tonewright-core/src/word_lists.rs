//! Curated word lists for text analysis.
//!
//! Common (closed-class) words, transition words grouped by purpose, and the
//! auxiliary/participle lists used for passive voice detection.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// High-frequency function words.
pub static COMMON_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
        "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
        "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
        "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when",
        "make", "can", "like", "time", "no", "just", "him", "know", "take", "people", "into",
        "year", "your", "good", "some", "could", "them", "see", "other", "than", "then", "now",
        "look", "only", "come", "its", "over", "think", "also", "back", "after", "use", "two",
        "how", "our", "work", "first", "well", "way", "even", "new", "want", "because", "any",
        "these", "give", "day", "most", "us", "is", "was", "are", "were", "been", "has", "had",
    ]
    .into_iter()
    .collect()
});

/// Transition words and phrases, grouped by the relationship they express.
pub static TRANSITION_GROUPS: &[(&str, &[&str])] = &[
    (
        "addition",
        &[
            "also",
            "furthermore",
            "moreover",
            "additionally",
            "besides",
            "in addition",
        ],
    ),
    (
        "contrast",
        &[
            "however",
            "nevertheless",
            "nonetheless",
            "although",
            "whereas",
            "conversely",
            "on the other hand",
        ],
    ),
    (
        "cause",
        &[
            "therefore",
            "consequently",
            "thus",
            "hence",
            "accordingly",
            "as a result",
        ],
    ),
    (
        "sequence",
        &[
            "first",
            "next",
            "finally",
            "subsequently",
            "meanwhile",
            "afterward",
        ],
    ),
    (
        "example",
        &[
            "for example",
            "for instance",
            "specifically",
            "namely",
            "in particular",
        ],
    ),
];

/// Whole-word, case-insensitive matcher for any transition in [`TRANSITION_GROUPS`].
pub static TRANSITION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = TRANSITION_GROUPS
        .iter()
        .flat_map(|(_, words)| words.iter())
        .map(|w| regex::escape(w).replace(' ', r"\s+"))
        .collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|"))).expect("valid regex")
});

/// Whether `text` contains at least one transition word or phrase.
pub fn has_transition(text: &str) -> bool {
    TRANSITION_PATTERN.is_match(text)
}

/// Forms of "to be" that introduce passive constructions.
pub static PASSIVE_AUXILIARIES: &[&str] = &["was", "were", "been", "being", "is", "are", "am"];

/// Irregular past participles that do not end in `-ed` or `-en`.
pub static PAST_PARTICIPLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "done", "made", "built", "sent", "found", "held", "told", "kept", "brought", "bought",
        "caught", "taught", "thrown", "shown", "known", "paid", "sold", "left",
    ]
    .into_iter()
    .collect()
});
