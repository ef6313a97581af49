//! Core library for tonewright.
//!
//! Readability scoring, style diagnostics, and tone-aware rewriting for plain
//! English text. Three independent, total entry points:
//!
//! - [`analyze`] scores a text and suggests improvements
//! - [`enhance`] rewrites it in a requested tone
//! - [`check_grammar`] lists likely grammar slips without changing anything
//!
//! # Modules
//!
//! - [`analysis`] - Structured text analysis
//! - [`rewrite`] - The correction pipeline and its stages
//! - [`grammar`] - Grammar checking and passive voice detection
//! - [`readability`] - Flesch Reading Ease scoring
//! - [`markdown`] - Markdown to prose conversion
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use tonewright_core::{ToneFlag, ToneOptions, analyze, enhance};
//!
//! let report = analyze("The report was written yesterday.");
//! assert_eq!(report.passive_voices.len(), 1);
//!
//! let tone = ToneOptions::from_flags(&[ToneFlag::Formal]);
//! assert_eq!(enhance("i dont know", &tone), "I do not know.");
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod grammar;
pub mod lexical;
pub mod markdown;
pub mod readability;
pub mod rewrite;
pub mod suggestions;
pub mod syllables;
pub mod text;
pub mod word_lists;

pub use analysis::{TextAnalysis, analyze};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult, ToneError, ToneResult};
pub use grammar::{GrammarReport, check_grammar, check_grammar_full};
pub use readability::ReadabilityLevel;
pub use rewrite::{ToneFlag, ToneOptions, enhance};
