//! Text analysis: readability, vocabulary, passive voice, and suggestions.
//!
//! [`analyze`] is the single entry point. It tokenizes once, scores the text,
//! classifies its vocabulary, scans for passive sentences, and hands the
//! resulting metrics to the suggestion rules.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::grammar::passive_voice;
use crate::lexical;
use crate::readability::{self, ReadabilityLevel};
use crate::suggestions::{self, SuggestionInput};
use crate::text;

/// Structured analysis of a block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextAnalysis {
    /// Number of word tokens.
    pub word_count: usize,
    /// Number of sentences, never less than one.
    pub sentence_count: usize,
    /// Number of non-blank paragraphs.
    pub paragraph_count: usize,
    /// Mean characters per word (0 when there are no words).
    pub average_word_length: f64,
    /// Mean words per sentence (0 when there are no words).
    pub average_sentence_length: f64,
    /// Flesch Reading Ease, `0..=100`.
    pub readability_score: f64,
    /// Band for the readability score.
    pub readability_level: ReadabilityLevel,
    /// Distinct common words, lowercased, at most ten.
    pub common_words: Vec<String>,
    /// Distinct complex words as written, at most ten.
    pub complex_words: Vec<String>,
    /// Passive sentences, at most five.
    pub passive_voices: Vec<String>,
    /// Improvement suggestions in priority order.
    pub suggestions: Vec<String>,
}

impl TextAnalysis {
    /// Whether the readability score falls below `min`.
    pub fn below(&self, min: Option<f64>) -> bool {
        min.is_some_and(|min| self.readability_score < min)
    }
}

/// Analyze `input`.
///
/// Total over all input: empty or terminator-free text produces a valid
/// analysis with zeroed averages and a sentence count of one.
#[tracing::instrument(skip(input), fields(text_len = input.len()))]
pub fn analyze(input: &str) -> TextAnalysis {
    let stats = readability::score_text(input);
    let words = text::extract_words(input);
    let lexical = lexical::classify_words(&words);
    let passive_voices = passive_voice::detect_passive_voice(input);

    let suggestions = suggestions::generate_suggestions(&SuggestionInput {
        text: input,
        readability_score: stats.score,
        average_sentence_length: stats.average_sentence_length,
        word_count: stats.words,
        sentence_count: stats.sentences,
        paragraph_count: stats.paragraphs,
        complex_words: &lexical.complex,
        passive_count: passive_voices.len(),
    });

    tracing::debug!(
        words = stats.words,
        score = stats.score,
        suggestions = suggestions.len(),
        "analysis complete"
    );

    TextAnalysis {
        word_count: stats.words,
        sentence_count: stats.sentences,
        paragraph_count: stats.paragraphs,
        average_word_length: stats.average_word_length,
        average_sentence_length: stats.average_sentence_length,
        readability_score: stats.score,
        readability_level: stats.level,
        common_words: lexical.common,
        complex_words: lexical.complex,
        passive_voices,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   \n\n  ",
        "no terminators at all",
        "The cat sat on the mat. The dog ran fast.",
        "!!!???...",
        "The implementation of the comprehensive organizational restructuring initiative \
         necessitated the establishment of interdepartmental communication protocols.",
        "A was done. B was done. C was done. D was done. E was done. F was done.",
        "Supercalifragilistic extraordinarily incomprehensible antidisestablishmentarianism \
         notwithstanding, internationalization, characterization, and institutionalization \
         remained unquestionably problematic, overwhelmingly bureaucratic, and \
         indistinguishable from miscommunication.",
    ];

    #[test]
    fn empty_text_round_trip() {
        let analysis = analyze("");
        assert_eq!(analysis.word_count, 0);
        assert_eq!(analysis.sentence_count, 1);
        assert_eq!(analysis.paragraph_count, 0);
        assert_eq!(analysis.readability_score, 0.0);
        assert_eq!(analysis.readability_level, ReadabilityLevel::VeryDifficult);
        assert_eq!(analysis.average_word_length, 0.0);
        assert_eq!(analysis.average_sentence_length, 0.0);
        assert_eq!(analysis.suggestions.len(), 2);
        assert!(analysis.suggestions[0].contains("shorter sentences"));
        assert!(analysis.suggestions[1].contains("combining"));
    }

    #[test]
    fn punctuation_only_text_gets_suggestions() {
        let analysis = analyze("!!!???...");
        assert_eq!(analysis.word_count, 0);
        assert_eq!(analysis.suggestions.len(), 2);
    }

    #[test]
    fn bounds_hold_for_samples() {
        for sample in SAMPLES {
            let a = analyze(sample);
            assert!(
                (0.0..=100.0).contains(&a.readability_score),
                "score out of range for {sample:?}"
            );
            assert!(a.sentence_count >= 1);
            assert!(a.common_words.len() <= 10);
            assert!(a.complex_words.len() <= 10);
            assert!(a.passive_voices.len() <= 5);
        }
    }

    #[test]
    fn passive_sentence_flagged() {
        let analysis = analyze("The report was written yesterday.");
        assert_eq!(analysis.passive_voices, vec!["The report was written yesterday"]);
    }

    #[test]
    fn complex_word_suggestion_names_first_three() {
        let analysis = analyze(SAMPLES[7]);
        assert!(analysis.complex_words.len() > 5);
        let expected = format!(
            "\"{}\", \"{}\", \"{}\"",
            analysis.complex_words[0], analysis.complex_words[1], analysis.complex_words[2]
        );
        assert!(
            analysis.suggestions.iter().any(|s| s.contains(&expected)),
            "suggestions: {:?}",
            analysis.suggestions
        );
    }

    #[test]
    fn many_passive_sentences_suggest_active_voice() {
        let analysis = analyze(SAMPLES[6]);
        assert_eq!(analysis.passive_voices.len(), 5);
        assert!(analysis.suggestions.iter().any(|s| s.contains("passive voice")));
    }

    #[test]
    fn long_single_paragraph_suggests_breaking_up() {
        let text = "Short words make for easy reading. ".repeat(40);
        let analysis = analyze(&text);
        assert!(analysis.word_count > 200);
        assert_eq!(analysis.paragraph_count, 1);
        assert!(analysis.suggestions.iter().any(|s| s.contains("paragraphs")));
        assert!(analysis.suggestions.iter().any(|s| s.contains("transition")));
    }

    #[test]
    fn below_min_score() {
        let analysis = analyze("The cat sat on the mat.");
        assert!(!analysis.below(Some(50.0)));
        assert!(analysis.below(Some(101.0)));
        assert!(!analysis.below(None));
    }

    #[test]
    fn serializes_snake_case_with_level_label() {
        let json = serde_json::to_value(analyze("The cat sat.")).unwrap();
        assert_eq!(json["word_count"], 3);
        assert_eq!(json["readability_level"], "Very Easy");
    }
}
