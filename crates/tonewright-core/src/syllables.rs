//! Vowel-group syllable estimation.

/// Estimate the syllables in a single word.
///
/// Counts each transition into a run of `a e i o u y`, drops one for a silent
/// trailing `e` when more than one group was found, and never returns less
/// than one (digits and empty strings count as a single syllable).
pub fn count_syllables_in_word(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut syllables: usize = 0;
    let mut previous_was_vowel = false;

    for ch in word.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if word.ends_with('e') && syllables > 1 {
        syllables -= 1;
    }

    syllables.max(1)
}

/// Total syllables across a sequence of words.
pub fn count_syllables<'a, I>(words: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    words.into_iter().map(count_syllables_in_word).sum()
}
