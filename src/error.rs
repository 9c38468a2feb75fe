// WHY: One error type for every fallible library operation
// The binary wraps these in anyhow with extra context

use thiserror::Error;

/// Errors produced by the translation library
#[derive(Error, Debug)]
pub enum TranslateError {
    /// Direction string outside the two recognized values
    #[error("invalid direction {0:?}: expected \"american-to-british\" or \"british-to-american\"")]
    InvalidDirection(String),

    /// Blank or whitespace-only input reached the presentation layer
    #[error("No text to translate.")]
    EmptyInput,

    /// A dictionary key could not be compiled into a match rule
    #[error("failed to compile match rule for {key:?}: {message}")]
    Pattern { key: String, message: String },

    /// Malformed TOML configuration or dictionary document
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The shared built-in translator could not be constructed
    #[error("built-in dictionaries failed to load: {0}")]
    Builtin(String),
}

impl TranslateError {
    pub(crate) fn pattern(key: &str, source: impl std::fmt::Display) -> Self {
        Self::Pattern {
            key: key.to_string(),
            message: source.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;
