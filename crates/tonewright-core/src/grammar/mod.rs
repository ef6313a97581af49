//! Grammar analysis: passive voice detection and grammar checking.
//!
//! This module provides two independent capabilities:
//!
//! - **Passive voice detection** ([`passive_voice`]): flags sentences built
//!   on an auxiliary + past participle pair
//! - **Grammar checking** ([`checker`]): reports commonly confused words,
//!   spacing and capitalization slips as plain advisory strings
//!
//! # Convenience Function
//!
//! [`check_grammar_full`] combines both into a single [`GrammarReport`]
//! suitable for CLI output or MCP tool responses.

pub mod checker;
pub mod passive_voice;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use checker::check_grammar;
pub use passive_voice::detect_passive_voice;

use crate::text;

/// Full grammar analysis report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GrammarReport {
    /// Grammar issues found, deduplicated.
    pub issues: Vec<String>,
    /// Sentences written in the passive voice (at most five).
    pub passive_sentences: Vec<String>,
    /// Number of sentences analyzed (at least one).
    pub sentence_count: usize,
}

impl GrammarReport {
    /// Whether the report has more issues than `max`.
    pub fn exceeds(&self, max: Option<usize>) -> bool {
        max.is_some_and(|max| self.issues.len() > max)
    }
}

/// Run both grammar passes over `input`.
#[tracing::instrument(skip(input), fields(text_len = input.len()))]
pub fn check_grammar_full(input: &str) -> GrammarReport {
    GrammarReport {
        issues: check_grammar(input),
        passive_sentences: detect_passive_voice(input),
        sentence_count: text::sentence_count(input),
    }
}
