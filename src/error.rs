//! Error types for input widget configuration.
//!
//! Nothing in the editing path returns an error: rejected keystrokes are
//! reported through [`crate::events::EventStatus::Ignored`]. These errors
//! only come from setting a widget up with bad configuration.

use std::io;

use thiserror::Error;

/// Prefix every handler name must start with.
pub const HANDLER_PREFIX: &str = "handle_";

/// Configuration errors raised while constructing or configuring inputs.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("handler name {name:?} must start with 'handle_'")]
    MissingPrefix { name: String },

    #[error("handler name {name:?} must have at least one character after 'handle_'")]
    TooShort { name: String },

    #[error(
        "handler name {name:?} contains {ch:?}; only lowercase ASCII letters, digits and underscores are allowed"
    )]
    InvalidCharacter { name: String, ch: char },

    #[error("invalid style configuration: {0}")]
    StyleConfig(#[from] serde_json::Error),

    #[error("failed to read style configuration: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, InputError>;
