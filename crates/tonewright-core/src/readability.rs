//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier to read. The score is clamped to `0..=100` and mapped
//! to the seven standard Flesch bands so that grades line up with other tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::syllables;
use crate::text;

/// Qualitative readability band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ReadabilityLevel {
    /// Score 90 and above.
    #[serde(rename = "Very Easy")]
    VeryEasy,
    /// Score 80 to below 90.
    #[serde(rename = "Easy")]
    Easy,
    /// Score 70 to below 80.
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    /// Score 60 to below 70.
    #[serde(rename = "Standard")]
    Standard,
    /// Score 50 to below 60.
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    /// Score 30 to below 50.
    #[serde(rename = "Difficult")]
    Difficult,
    /// Score below 30.
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
}

impl ReadabilityLevel {
    /// Map a Flesch score to its band. Thresholds are inclusive at the lower bound.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 80.0 {
            Self::Easy
        } else if score >= 70.0 {
            Self::FairlyEasy
        } else if score >= 60.0 {
            Self::Standard
        } else if score >= 50.0 {
            Self::FairlyDifficult
        } else if score >= 30.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }

    /// Human-readable label, e.g. `"Fairly Easy"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }
}

impl std::fmt::Display for ReadabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw counts and derived readability metrics for a block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityStats {
    /// Number of word tokens.
    pub words: usize,
    /// Number of sentences (at least one).
    pub sentences: usize,
    /// Number of non-blank paragraphs.
    pub paragraphs: usize,
    /// Total estimated syllables.
    pub syllables: usize,
    /// Mean characters per word, 0 for empty text.
    pub average_word_length: f64,
    /// Mean words per sentence, 0 for empty text.
    pub average_sentence_length: f64,
    /// Flesch Reading Ease, clamped to `0..=100`.
    pub score: f64,
    /// Band for [`Self::score`].
    pub level: ReadabilityLevel,
}

/// Compute the Flesch Reading Ease score.
///
/// Returns 0 when either count is zero.
pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }

    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    let score = 84.6f64.mul_add(-syllables_per_word, 1.015f64.mul_add(-words_per_sentence, 206.835));

    score.clamp(0.0, 100.0)
}

/// Score the readability of `text`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn score_text(text: &str) -> ReadabilityStats {
    let words = text::extract_words(text);
    let word_count = words.len();
    let sentences = text::sentence_count(text);
    let paragraphs = text::split_paragraphs(text).len();
    let syllables = syllables::count_syllables(words.iter().copied());

    let (average_word_length, average_sentence_length) = if word_count == 0 {
        (0.0, 0.0)
    } else {
        let chars: usize = words.iter().map(|w| w.chars().count()).sum();
        (
            chars as f64 / word_count as f64,
            word_count as f64 / sentences as f64,
        )
    };

    let score = flesch_reading_ease(word_count, sentences, syllables);

    ReadabilityStats {
        words: word_count,
        sentences,
        paragraphs,
        syllables,
        average_word_length,
        average_sentence_length,
        score,
        level: ReadabilityLevel::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_text_is_easy() {
        let stats = score_text("The cat sat on the mat. The dog ran fast.");
        assert_eq!(stats.words, 10);
        assert_eq!(stats.sentences, 2);
        assert!(stats.score > 90.0, "score was {}", stats.score);
        assert_eq!(stats.level, ReadabilityLevel::VeryEasy);
    }

    #[test]
    fn dense_text_is_hard() {
        let text = "The implementation of the comprehensive organizational restructuring \
                    initiative necessitated the establishment of interdepartmental \
                    communication protocols that facilitated the dissemination of \
                    procedural documentation.";
        let stats = score_text(text);
        assert_eq!(stats.score, 0.0);
        assert_eq!(stats.level, ReadabilityLevel::VeryDifficult);
    }

    #[test]
    fn zero_counts_score_zero() {
        assert_eq!(flesch_reading_ease(0, 1, 0), 0.0);
        assert_eq!(flesch_reading_ease(5, 0, 5), 0.0);
    }

    #[test]
    fn formula_matches_reference() {
        // 10 words, 2 sentences, 15 syllables
        let expected = 206.835 - 1.015 * 5.0 - 84.6 * 1.5;
        assert!((flesch_reading_ease(10, 2, 15) - expected).abs() < 1e-9);
    }

    #[test]
    fn score_is_clamped_high() {
        // One word, one syllable, one sentence would exceed 100.
        assert_eq!(flesch_reading_ease(1, 1, 1), 100.0);
    }

    #[test]
    fn level_bands_inclusive_at_lower_bound() {
        assert_eq!(ReadabilityLevel::from_score(100.0), ReadabilityLevel::VeryEasy);
        assert_eq!(ReadabilityLevel::from_score(90.0), ReadabilityLevel::VeryEasy);
        assert_eq!(ReadabilityLevel::from_score(89.99), ReadabilityLevel::Easy);
        assert_eq!(ReadabilityLevel::from_score(80.0), ReadabilityLevel::Easy);
        assert_eq!(ReadabilityLevel::from_score(70.0), ReadabilityLevel::FairlyEasy);
        assert_eq!(ReadabilityLevel::from_score(60.0), ReadabilityLevel::Standard);
        assert_eq!(ReadabilityLevel::from_score(50.0), ReadabilityLevel::FairlyDifficult);
        assert_eq!(ReadabilityLevel::from_score(30.0), ReadabilityLevel::Difficult);
        assert_eq!(ReadabilityLevel::from_score(29.99), ReadabilityLevel::VeryDifficult);
        assert_eq!(ReadabilityLevel::from_score(0.0), ReadabilityLevel::VeryDifficult);
    }

    #[test]
    fn level_serializes_as_label() {
        let json = serde_json::to_string(&ReadabilityLevel::FairlyDifficult).unwrap();
        assert_eq!(json, "\"Fairly Difficult\"");
        assert_eq!(ReadabilityLevel::Standard.to_string(), "Standard");
    }

    #[test]
    fn averages_for_empty_text_are_zero() {
        let stats = score_text("   ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.sentences, 1);
        assert_eq!(stats.average_word_length, 0.0);
        assert_eq!(stats.average_sentence_length, 0.0);
    }

    #[test]
    fn average_word_length_counts_chars() {
        let stats = score_text("ab abcd.");
        assert_eq!(stats.average_word_length, 3.0);
        assert_eq!(stats.average_sentence_length, 2.0);
    }
}
