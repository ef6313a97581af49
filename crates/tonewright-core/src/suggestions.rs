//! Improvement suggestions derived from analysis metrics.
//!
//! Every rule is evaluated independently and all matching rules fire, in a
//! fixed priority order: readability, sentence length, complex words, passive
//! voice, paragraphing, transitions. Each rule contributes at most one message.

use crate::word_lists;

/// Metrics the suggestion rules read. Nothing is re-derived from the text
/// except the transition-word check, which needs the source.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionInput<'a> {
    /// Source text (only scanned for transition words).
    pub text: &'a str,
    /// Flesch Reading Ease score.
    pub readability_score: f64,
    /// Mean words per sentence.
    pub average_sentence_length: f64,
    /// Number of word tokens.
    pub word_count: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Number of non-blank paragraphs.
    pub paragraph_count: usize,
    /// Complex words, first-seen order.
    pub complex_words: &'a [String],
    /// Passive sentences found.
    pub passive_count: usize,
}

/// Build the ordered suggestion list.
///
/// Every rule is checked; text without words scores zero with no average
/// sentence length, so it gets the readability and sentence-length advice.
pub fn generate_suggestions(input: &SuggestionInput<'_>) -> Vec<String> {
    let mut suggestions = Vec::new();

    if input.readability_score < 30.0 {
        suggestions.push(
            "Your text is very difficult to read. Use shorter sentences and simpler words."
                .to_string(),
        );
    } else if input.readability_score < 60.0 {
        suggestions.push(
            "Your text is suited to educated audiences. Consider simplifying it for a wider readership."
                .to_string(),
        );
    }

    if input.average_sentence_length > 25.0 {
        suggestions.push(format!(
            "Sentences average {:.0} words. Break long sentences into shorter statements.",
            input.average_sentence_length
        ));
    } else if input.average_sentence_length < 10.0 {
        suggestions.push(
            "Your sentences are very short. Consider combining some of them for better flow."
                .to_string(),
        );
    }

    if input.complex_words.len() > 5 {
        let examples: Vec<String> = input
            .complex_words
            .iter()
            .take(3)
            .map(|w| format!("\"{w}\""))
            .collect();
        suggestions.push(format!(
            "Consider replacing complex words such as {} with simpler alternatives.",
            examples.join(", ")
        ));
    }

    if input.passive_count > 2 {
        suggestions.push(
            "Reduce passive voice. Active sentences are clearer and more direct.".to_string(),
        );
    }

    if input.word_count > 200 && input.paragraph_count < 2 {
        suggestions.push("Break your text into paragraphs to make it easier to scan.".to_string());
    }

    if input.sentence_count > 5 && !word_lists::has_transition(input.text) {
        suggestions.push(
            "Add transition words (however, therefore, for example) to connect your ideas."
                .to_string(),
        );
    }

    suggestions
}
