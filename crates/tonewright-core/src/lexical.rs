//! Lexical classification into common and complex words.

use std::collections::HashSet;

use crate::syllables::count_syllables_in_word;
use crate::word_lists::COMMON_WORDS;

/// Maximum entries kept in each classification list.
pub const MAX_LISTED_WORDS: usize = 10;

/// Words longer than this many characters are complex.
const COMPLEX_MIN_CHARS: usize = 8;

/// Words with more than this many syllables are complex.
const COMPLEX_MIN_SYLLABLES: usize = 3;

/// Distinct common and complex words, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicalProfile {
    /// Lowercased common words.
    pub common: Vec<String>,
    /// Complex words as they appeared in the text.
    pub complex: Vec<String>,
}

/// Whether a word is long or polysyllabic enough to count as complex.
pub fn is_complex(word: &str) -> bool {
    word.chars().count() > COMPLEX_MIN_CHARS || count_syllables_in_word(word) > COMPLEX_MIN_SYLLABLES
}

/// Partition word tokens into common and complex sets.
///
/// Common words are recorded lowercased; complex words keep their casing and
/// are distinct by exact string. Each list stops growing at
/// [`MAX_LISTED_WORDS`], but scanning continues for the other list.
#[tracing::instrument(skip_all, fields(word_count = words.len()))]
pub fn classify_words(words: &[&str]) -> LexicalProfile {
    let mut profile = LexicalProfile::default();
    let mut seen_common: HashSet<String> = HashSet::new();
    let mut seen_complex: HashSet<&str> = HashSet::new();

    for &word in words {
        let lower = word.to_lowercase();
        if COMMON_WORDS.contains(lower.as_str()) {
            if profile.common.len() < MAX_LISTED_WORDS && seen_common.insert(lower.clone()) {
                profile.common.push(lower);
            }
        } else if is_complex(word)
            && profile.complex.len() < MAX_LISTED_WORDS
            && seen_complex.insert(word)
        {
            profile.complex.push(word.to_string());
        }
    }

    profile
}
