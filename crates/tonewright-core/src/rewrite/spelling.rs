//! Spelling and grammar fixes, the first rewrite stage.
//!
//! Three passes, in order: the misspelling table, the grammar fix patterns,
//! and the missing-apostrophe contractions. All of them are whole-word and
//! case-insensitive, and keep a leading capital on the replaced word.
//!
//! "effects" and "weather" are always rewritten to "affects" and "whether".
//! Without part-of-speech tagging there is no way to tell the legitimate uses
//! apart, so the noun forms are corrupted too.

use std::sync::LazyLock;

use super::rules::{self, Substitution, WordMap};

/// Common misspellings and their corrections.
pub static MISSPELLINGS: &[(&str, &str)] = &[
    ("teh", "the"),
    ("recieve", "receive"),
    ("recieved", "received"),
    ("seperate", "separate"),
    ("definately", "definitely"),
    ("occured", "occurred"),
    ("occurence", "occurrence"),
    ("untill", "until"),
    ("wich", "which"),
    ("alot", "a lot"),
    ("becuase", "because"),
    ("beleive", "believe"),
    ("acheive", "achieve"),
    ("adress", "address"),
    ("accross", "across"),
    ("agressive", "aggressive"),
    ("apparantly", "apparently"),
    ("arguement", "argument"),
    ("basicly", "basically"),
    ("begining", "beginning"),
    ("calender", "calendar"),
    ("comming", "coming"),
    ("commited", "committed"),
    ("completly", "completely"),
    ("concious", "conscious"),
    ("curiousity", "curiosity"),
    ("embarass", "embarrass"),
    ("enviroment", "environment"),
    ("existance", "existence"),
    ("familar", "familiar"),
    ("finaly", "finally"),
    ("foriegn", "foreign"),
    ("goverment", "government"),
    ("gaurd", "guard"),
    ("happend", "happened"),
    ("harrass", "harass"),
    ("immediatly", "immediately"),
    ("independant", "independent"),
    ("knowlege", "knowledge"),
    ("libary", "library"),
    ("lenght", "length"),
    ("neccessary", "necessary"),
    ("noticable", "noticeable"),
    ("occassion", "occasion"),
    ("persue", "pursue"),
    ("posession", "possession"),
    ("prefered", "preferred"),
    ("publically", "publicly"),
    ("realy", "really"),
    ("refered", "referred"),
    ("relevent", "relevant"),
    ("succesful", "successful"),
    ("suprise", "surprise"),
    ("tommorow", "tomorrow"),
    ("tounge", "tongue"),
    ("truely", "truly"),
    ("wierd", "weird"),
    ("writting", "writing"),
    ("thier", "their"),
    ("freind", "friend"),
    ("speach", "speech"),
    ("effects", "affects"),
    ("weather", "whether"),
];

/// Apostrophe-less contractions.
pub static CONTRACTIONS: &[(&str, &str)] = &[
    ("dont", "don't"),
    ("doesnt", "doesn't"),
    ("didnt", "didn't"),
    ("cant", "can't"),
    ("wont", "won't"),
    ("isnt", "isn't"),
    ("arent", "aren't"),
    ("wasnt", "wasn't"),
    ("werent", "weren't"),
    ("hasnt", "hasn't"),
    ("havent", "haven't"),
    ("hadnt", "hadn't"),
    ("couldnt", "couldn't"),
    ("shouldnt", "shouldn't"),
    ("wouldnt", "wouldn't"),
    ("im", "I'm"),
    ("ive", "I've"),
    ("youre", "you're"),
    ("theyre", "they're"),
    ("thats", "that's"),
    ("whats", "what's"),
];

static MISSPELLING_MAP: LazyLock<WordMap> = LazyLock::new(|| WordMap::new(MISSPELLINGS));

static CONTRACTION_MAP: LazyLock<WordMap> = LazyLock::new(|| WordMap::new(CONTRACTIONS));

/// Grammar fix patterns, applied in order.
pub static GRAMMAR_FIXES: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    vec![
        // Lowercase pronoun. Case-sensitive so "I" is left alone and "i.e." survives.
        Substitution::new(r"\bi([\s'’,;:!?])", "I${1}"),
        Substitution::new(r"\bi$", "I"),
        Substitution::new(r"\bi\.(\s|$)", "I.${1}"),
        Substitution::new(r"(?i)\byour (welcome|going|not|being|sure)\b", "you're ${1}"),
        Substitution::new(r"(?i)\bits (a|an|the|been|not|going|time)\b", "it's ${1}"),
        Substitution::new(r"(?i)\bit['’]s own\b", "its own"),
        Substitution::new(r"(?i)\btheir (is|are|was|were)\b", "there ${1}"),
        Substitution::new(r"(?i)\bthere (going|coming|doing)\b", "they're ${1}"),
        Substitution::new(r"(?i)\bthey['’]re own\b", "their own"),
        Substitution::new(r"(?i)\b(should|could|would|must|might) of\b", "${1} have"),
        Substitution::new(r"(?i)\bloose (weight|track|control|interest)\b", "lose ${1}"),
        Substitution::new(
            r"(?i)\b(better|worse|more|less|rather|other|greater|smaller|larger|bigger|faster|slower|older|younger) then\b",
            "${1} than",
        ),
        Substitution::new(r"(?i)\b(everyone|everything|all) accept\b", "${1} except"),
        Substitution::new(r"(?i)\baccept for\b", "except for"),
        Substitution::new(r"(?i)\bto (much|many|soon)\b", "too ${1}"),
        Substitution::new(r" {2,}", " "),
    ]
});

/// Run the spelling stage.
pub fn fix_spelling(text: &str) -> String {
    let text = MISSPELLING_MAP.apply(text);
    let text = rules::apply_all(&text, &GRAMMAR_FIXES);
    CONTRACTION_MAP.apply(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert!(MISSPELLINGS.len() >= 60);
        assert!(GRAMMAR_FIXES.len() >= 15);
        assert!(CONTRACTIONS.len() >= 20);
    }

    #[test]
    fn keys_are_lowercase() {
        for (from, _) in MISSPELLINGS.iter().chain(CONTRACTIONS) {
            assert_eq!(*from, from.to_lowercase());
        }
    }

    #[test]
    fn misspellings_preserve_leading_capital() {
        assert_eq!(fix_spelling("Teh cat"), "The cat");
        assert_eq!(fix_spelling("we recieved it"), "we received it");
        assert_eq!(fix_spelling("Alot of it"), "A lot of it");
    }

    #[test]
    fn misspellings_are_whole_word() {
        assert_eq!(fix_spelling("tehran"), "tehran");
    }

    #[test]
    fn lowercase_pronoun() {
        assert_eq!(fix_spelling("i think i can"), "I think I can");
        assert_eq!(fix_spelling("so do i"), "so do I");
        assert_eq!(fix_spelling("so do i."), "so do I.");
        assert_eq!(fix_spelling("so do i. Then we left"), "so do I. Then we left");
        assert_eq!(fix_spelling("i'm here"), "I'm here");
        assert_eq!(fix_spelling("fruit, i.e. apples"), "fruit, i.e. apples");
    }

    #[test]
    fn confused_words() {
        assert_eq!(fix_spelling("your welcome"), "you're welcome");
        assert_eq!(fix_spelling("its a trap"), "it's a trap");
        assert_eq!(fix_spelling("on it's own"), "on its own");
        assert_eq!(fix_spelling("Their is hope"), "There is hope");
        assert_eq!(fix_spelling("there going home"), "they're going home");
        assert_eq!(fix_spelling("you should of asked"), "you should have asked");
        assert_eq!(fix_spelling("loose weight"), "lose weight");
        assert_eq!(fix_spelling("better then ever"), "better than ever");
        assert_eq!(fix_spelling("everyone accept Bob"), "everyone except Bob");
        assert_eq!(fix_spelling("to much noise"), "too much noise");
    }

    #[test]
    fn collapses_double_spaces() {
        assert_eq!(fix_spelling("a  b   c"), "a b c");
    }

    #[test]
    fn restores_apostrophes() {
        assert_eq!(fix_spelling("i dont know"), "I don't know");
        assert_eq!(fix_spelling("Thats fine, im done"), "That's fine, I'm done");
    }

    #[test]
    fn documented_homophone_limitation() {
        assert_eq!(fix_spelling("the weather effects"), "the whether affects");
    }
}
