//! Error types for tonewright-core.
//!
//! The engine entry points ([`crate::analyze`], [`crate::enhance`],
//! [`crate::check_grammar`]) are total and never fail. Errors only arise at
//! the edges: loading configuration and parsing tone names.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when resolving rewrite options.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ToneError {
    /// An unknown tone name was provided.
    #[error("unknown tone: {name}. Use: {available}")]
    UnknownTone {
        /// The tone name that was requested.
        name: String,
        /// Comma-separated list of available tone names.
        available: String,
    },
}

/// Result type alias using [`ToneError`].
pub type ToneResult<T> = Result<T, ToneError>;
