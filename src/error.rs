//! Error types for keyline.
//!
//! Defines the main error enum used throughout the crate.

use thiserror::Error;

/// Main error type for keyline operations.
#[derive(Error, Debug)]
pub enum KeylineError {
    /// The input ended while a single or double quote was still open.
    #[error("Invalid argument(s): unterminated quote")]
    UnterminatedQuote,

    /// The leading words of the input match no registry entry.
    #[error("`{0}` is not a valid command")]
    UnknownCommand(String),

    /// A stored value could not be coerced into display text.
    #[error("Value error: {0}")]
    Value(String),

    /// Configuration errors (invalid config file, bad registry entries, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl KeylineError {
    /// Creates an unknown command error for the given input.
    pub fn unknown_command(input: impl Into<String>) -> Self {
        Self::UnknownCommand(input.into())
    }

    /// Creates a value error with the given message.
    pub fn value(msg: impl Into<String>) -> Self {
        Self::Value(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnterminatedQuote | Self::UnknownCommand(_) => "Parse Error",
            Self::Value(_) => "Value Error",
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
        }
    }

    /// Returns true if this error only rejects the current line.
    ///
    /// The input loop reports these and keeps reading.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::UnterminatedQuote | Self::UnknownCommand(_))
    }
}

/// Result type alias using KeylineError.
pub type Result<T> = std::result::Result<T, KeylineError>;
