//! Passive voice detection.
//!
//! Flags sentences containing a form of "to be" directly followed by a past
//! participle (`-ed`, `-en`, or a known irregular form). This is a surface
//! heuristic: "she is tired" and "it is open" are flagged too.

use crate::text;
use crate::word_lists::{PASSIVE_AUXILIARIES, PAST_PARTICIPLES};

/// Maximum number of passive sentences reported.
pub const MAX_PASSIVE_SENTENCES: usize = 5;

/// Detect passive sentences in `text`.
///
/// Returns up to [`MAX_PASSIVE_SENTENCES`] trimmed sentences in the order
/// they appear. A sentence is reported at most once.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn detect_passive_voice(text: &str) -> Vec<String> {
    text::split_sentences(text)
        .into_iter()
        .filter(|sentence| is_passive_sentence(sentence))
        .take(MAX_PASSIVE_SENTENCES)
        .map(str::to_string)
        .collect()
}

/// Whether a single sentence contains an auxiliary + participle pair.
pub fn is_passive_sentence(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    let words: Vec<&str> = lower
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .collect();

    words
        .windows(2)
        .any(|pair| PASSIVE_AUXILIARIES.contains(&pair[0]) && is_likely_past_participle(pair[1]))
}

/// Check if a lowercased word is likely a past participle.
fn is_likely_past_participle(word: &str) -> bool {
    word.ends_with("ed") || word.ends_with("en") || PAST_PARTICIPLES.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_en_participle() {
        let found = detect_passive_voice("The report was written yesterday.");
        assert_eq!(found, vec!["The report was written yesterday"]);
    }

    #[test]
    fn detects_ed_participle() {
        assert!(is_passive_sentence("The bug was fixed by Alice"));
    }

    #[test]
    fn detects_irregular_participle() {
        assert!(is_passive_sentence("The ball was thrown by John"));
        assert!(is_passive_sentence("Houses are built every year"));
    }

    #[test]
    fn active_sentence_not_flagged() {
        assert!(!is_passive_sentence("John threw the ball"));
        assert!(!is_passive_sentence("She is running home"));
    }

    #[test]
    fn participle_must_follow_directly() {
        assert!(!is_passive_sentence("The report was not finished"));
    }

    #[test]
    fn punctuation_attached_to_words_ignored() {
        assert!(is_passive_sentence("It was, finished, somehow"));
        assert!(is_passive_sentence("\"Was written\" is what it said"));
    }

    #[test]
    fn each_sentence_flagged_once() {
        let found = detect_passive_voice("It was done and was finished.");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn capped_at_five() {
        let text = "A was done. B was done. C was done. D was done. E was done. F was done. G was done.";
        let found = detect_passive_voice(text);
        assert_eq!(found.len(), MAX_PASSIVE_SENTENCES);
        assert_eq!(found[0], "A was done");
        assert_eq!(found[4], "E was done");
    }

    #[test]
    fn empty_text_returns_empty() {
        assert!(detect_passive_voice("").is_empty());
    }
}
