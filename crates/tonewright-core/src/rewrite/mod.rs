//! Tone-aware rewriting.
//!
//! [`enhance`] runs a fixed pipeline of pure string stages:
//!
//! 1. spelling and grammar fixes (always)
//! 2. register: formalize or casualize
//! 3. length: make concise or add detail
//! 4. tone: professional or friendly
//! 5. cleanup (always)
//!
//! The six [`ToneOptions`] switches are independent booleans. Conflicting
//! pairs are resolved up front by [`ToneOptions::profile`]: `formal` beats
//! `casual`, `concise` beats `detailed`, and `professional` beats `friendly`.

pub mod cleanup;
pub mod length;
pub mod register;
pub mod rules;
pub mod spelling;
pub mod tone;

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ToneError, ToneResult};

/// Rewrite switches requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ToneOptions {
    /// Expand contractions and replace informal words.
    pub formal: bool,
    /// Contract verb phrases and relax stiff connectives.
    pub casual: bool,
    /// Formalize, then prefer formal business verbs.
    pub professional: bool,
    /// Add a thank-you and soften directives.
    pub friendly: bool,
    /// Remove wordy phrases and filler words.
    pub concise: bool,
    /// Expand abbreviations and flag examples.
    pub detailed: bool,
}

impl ToneOptions {
    /// Build options with each named switch turned on.
    pub fn from_flags(flags: &[ToneFlag]) -> Self {
        flags.iter().fold(Self::default(), |mut options, flag| {
            match flag {
                ToneFlag::Formal => options.formal = true,
                ToneFlag::Casual => options.casual = true,
                ToneFlag::Professional => options.professional = true,
                ToneFlag::Friendly => options.friendly = true,
                ToneFlag::Concise => options.concise = true,
                ToneFlag::Detailed => options.detailed = true,
            }
            options
        })
    }

    /// Resolve the switches into one choice per axis.
    pub const fn profile(&self) -> ToneProfile {
        let register = if self.formal {
            Register::Formal
        } else if self.casual {
            Register::Casual
        } else {
            Register::Neutral
        };
        let length = if self.concise {
            Length::Concise
        } else if self.detailed {
            Length::Detailed
        } else {
            Length::Neutral
        };
        let tone = if self.professional {
            Tone::Professional
        } else if self.friendly {
            Tone::Friendly
        } else {
            Tone::Neutral
        };
        ToneProfile {
            register,
            length,
            tone,
        }
    }
}

/// Vocabulary and contraction style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Register {
    /// Keep the writer's register.
    #[default]
    Neutral,
    /// Expanded contractions, formal vocabulary.
    Formal,
    /// Contractions, plain connectives.
    Casual,
}

/// Verbosity adjustment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Length {
    /// Leave length alone.
    #[default]
    Neutral,
    /// Drop wordy phrases and filler.
    Concise,
    /// Mark examples and expand abbreviations.
    Detailed,
}

/// Audience-facing voice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    /// No voice adjustment.
    #[default]
    Neutral,
    /// Business-register verbs.
    Professional,
    /// Softer requests and a thank-you.
    Friendly,
}

/// Normalized rewrite plan, one choice per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToneProfile {
    /// Formality axis.
    pub register: Register,
    /// Verbosity axis.
    pub length: Length,
    /// Voice axis.
    pub tone: Tone,
}

/// A single rewrite switch, as named on the command line and in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ToneFlag {
    /// Expand contractions and replace casual words.
    Formal,
    /// Contract verb phrases and loosen connectives.
    Casual,
    /// Swap everyday verbs for business-register ones.
    Professional,
    /// Soften requests and add a thank-you.
    Friendly,
    /// Shorten wordy phrasing.
    Concise,
    /// Mark examples and spell out abbreviations.
    Detailed,
}

impl ToneFlag {
    /// Every flag, in precedence order within each pair.
    pub const ALL: [Self; 6] = [
        Self::Formal,
        Self::Casual,
        Self::Professional,
        Self::Friendly,
        Self::Concise,
        Self::Detailed,
    ];

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Casual => "casual",
            Self::Professional => "professional",
            Self::Friendly => "friendly",
            Self::Concise => "concise",
            Self::Detailed => "detailed",
        }
    }

    /// Comma-separated list of every flag name.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ToneFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToneFlag {
    type Err = ToneError;

    fn from_str(s: &str) -> ToneResult<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|flag| flag.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ToneError::UnknownTone {
                name: wanted.to_string(),
                available: Self::available(),
            })
    }
}

/// Rewrite `input` according to `options`.
///
/// Spelling fixes and cleanup always run, so an all-false [`ToneOptions`]
/// still corrects common slips and tidies punctuation.
#[tracing::instrument(skip(input), fields(text_len = input.len()))]
pub fn enhance(input: &str, options: &ToneOptions) -> String {
    let profile = options.profile();
    tracing::debug!(?profile, "resolved tone profile");

    let text = spelling::fix_spelling(input);

    let text = match profile.register {
        Register::Formal => register::formalize(&text),
        Register::Casual => register::casualize(&text),
        Register::Neutral => text,
    };

    let text = match profile.length {
        Length::Concise => length::make_concise(&text),
        Length::Detailed => length::add_detail(&text),
        Length::Neutral => text,
    };

    let text = match profile.tone {
        Tone::Professional => tone::professionalize(&text),
        Tone::Friendly => tone::befriend(&text),
        Tone::Neutral => text,
    };

    let out = cleanup::cleanup(&text);
    tracing::debug!(output_len = out.len(), "rewrite complete");
    out
}
