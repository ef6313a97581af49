//! Length adjustments: concise and detailed rewrites.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{self, Substitution, WordMap};

/// Wordy phrases and their shorter forms.
pub static WORDY_PHRASES: &[(&str, &str)] = &[
    ("in order to", "to"),
    ("due to the fact that", "because"),
    ("at this point in time", "now"),
    ("in the event that", "if"),
    ("for the purpose of", "for"),
    ("in spite of the fact that", "although"),
    ("despite the fact that", "although"),
    ("as a matter of fact", "in fact"),
    ("at the present time", "now"),
    ("in the near future", "soon"),
    ("a large number of", "many"),
    ("the majority of", "most"),
    ("with regard to", "about"),
    ("in regard to", "about"),
    ("with respect to", "about"),
    ("has the ability to", "can"),
    ("is able to", "can"),
    ("make a decision", "decide"),
    ("come to a conclusion", "conclude"),
    ("take into consideration", "consider"),
    ("in close proximity to", "near"),
    ("each and every", "every"),
    ("first and foremost", "first"),
    ("until such time as", "until"),
];

static WORDY_MAP: LazyLock<WordMap> = LazyLock::new(|| WordMap::new(WORDY_PHRASES));

/// Throat-clearing phrases and filler words removed outright, along with a
/// trailing comma and the space after them.
pub static FILLER_REMOVALS: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    vec![
        Substitution::new(
            r"(?i)\b(?:it is important to note that|it should be noted that|needless to say)\b,?[ \t]*",
            "",
        ),
        Substitution::new(
            r"(?i)\b(?:basically|actually|really|very|just|quite|totally|literally)\b,?[ \t]*",
            "",
        ),
    ]
});

/// Elaborations applied by [`add_detail`], in order.
pub static DETAIL_EXPANSIONS: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    vec![
        Substitution::new(r"(?i)\b(such as|including|like)\s+", "${1}, for example, "),
        // "etc." ending a sentence keeps its full stop.
        Substitution::new(r"(?i:\betc)\.(\s+\p{Lu}|\s*$)", "and so on.${1}"),
        Substitution::new(r"(?i)\betc\.", "and so on"),
        Substitution::new(r"(?i)\be\.g\.", "for example"),
        Substitution::new(r"(?i)\bi\.e\.", "that is"),
        Substitution::new(r"(?i)\bvs\b\.?", "versus"),
        Substitution::new(r"(?i)\bapprox\b\.?", "approximately"),
    ]
});

/// Runs of spaces or tabs. Newlines are kept so paragraphs survive.
static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("valid regex"));

/// Shorten wordy phrases, drop filler words, and tidy the spacing left behind.
pub fn make_concise(text: &str) -> String {
    let text = WORDY_MAP.apply(text);
    let text = rules::apply_all(&text, &FILLER_REMOVALS);
    SPACE_RUN.replace_all(&text, " ").trim().to_string()
}

/// Flag examples and spell out common abbreviations.
pub fn add_detail(text: &str) -> String {
    rules::apply_all(text, &DETAIL_EXPANSIONS)
}
