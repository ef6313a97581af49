//! Register shifts: formal and casual vocabulary.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::rules::WordMap;

/// Contractions expanded by [`formalize`].
pub static EXPANSIONS: &[(&str, &str)] = &[
    ("can't", "cannot"),
    ("won't", "will not"),
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("haven't", "have not"),
    ("hasn't", "has not"),
    ("hadn't", "had not"),
    ("couldn't", "could not"),
    ("shouldn't", "should not"),
    ("wouldn't", "would not"),
    ("i'm", "I am"),
    ("you're", "you are"),
    ("they're", "they are"),
    ("we're", "we are"),
    ("it's", "it is"),
    ("that's", "that is"),
    ("i've", "I have"),
    ("i'll", "I will"),
    ("you'll", "you will"),
    ("we'll", "we will"),
    ("let's", "let us"),
];

/// Informal words replaced by [`formalize`].
pub static INFORMAL_WORDS: &[(&str, &str)] = &[
    ("gonna", "going to"),
    ("wanna", "want to"),
    ("gotta", "have to"),
    ("kinda", "somewhat"),
    ("sorta", "somewhat"),
    ("a lot of", "numerous"),
    ("a lot", "numerous"),
    ("very", "extremely"),
    ("really", "truly"),
    ("okay", "acceptable"),
    ("ok", "acceptable"),
    ("yeah", "yes"),
    ("yep", "yes"),
    ("nope", "no"),
    ("kids", "children"),
    ("guys", "everyone"),
    ("stuff", "materials"),
    ("big", "significant"),
    ("huge", "substantial"),
];

/// Formal phrases relaxed by [`casualize`].
pub static CASUAL_WORDS: &[(&str, &str)] = &[
    ("cannot", "can't"),
    ("will not", "won't"),
    ("do not", "don't"),
    ("does not", "doesn't"),
    ("did not", "didn't"),
    ("is not", "isn't"),
    ("are not", "aren't"),
    ("was not", "wasn't"),
    ("were not", "weren't"),
    ("have not", "haven't"),
    ("has not", "hasn't"),
    ("had not", "hadn't"),
    ("could not", "couldn't"),
    ("should not", "shouldn't"),
    ("would not", "wouldn't"),
    ("i am", "I'm"),
    ("you are", "you're"),
    ("they are", "they're"),
    ("we are", "we're"),
    ("it is", "it's"),
    ("that is", "that's"),
    ("let us", "let's"),
    ("therefore", "so"),
    ("however", "but"),
    ("utilize", "use"),
    ("furthermore", "also"),
    ("additionally", "also"),
    ("consequently", "so"),
    ("nevertheless", "still"),
    ("approximately", "about"),
    ("purchase", "buy"),
    ("commence", "start"),
    ("terminate", "end"),
    ("assist", "help"),
    ("sufficient", "enough"),
    ("inquire", "ask"),
    ("obtain", "get"),
    ("numerous", "lots of"),
];

static FORMAL_MAP: LazyLock<WordMap> = LazyLock::new(|| WordMap::new(EXPANSIONS));

static INFORMAL_MAP: LazyLock<WordMap> = LazyLock::new(|| WordMap::new(INFORMAL_WORDS));

static CASUAL_MAP: LazyLock<WordMap> = LazyLock::new(|| WordMap::new(CASUAL_WORDS));

/// A lowercase letter at the start of the text or after ". ".
static SENTENCE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\. )(\p{Ll})").expect("valid regex"));

/// Expand contractions, replace informal words, and capitalize sentence starts.
pub fn formalize(text: &str) -> String {
    let text = FORMAL_MAP.apply(text);
    let text = INFORMAL_MAP.apply(&text);
    capitalize_sentences(&text)
}

/// Contract verb phrases and swap stiff connectives for plain ones.
pub fn casualize(text: &str) -> String {
    CASUAL_MAP.apply(text)
}

fn capitalize_sentences(text: &str) -> String {
    SENTENCE_START
        .replace_all(text, |caps: &Captures<'_>| {
            format!("{}{}", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}
