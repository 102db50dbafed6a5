//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Language code not in the supported set
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Audio locale code not in the supported set
    #[error("Unknown audio language: {0}")]
    UnknownAudioLanguage(String),

    /// Provider name not in the supported set
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// A voice option is unknown or outside the voice's schema
    #[error("Invalid voice option '{option}': {reason}")]
    InvalidVoiceOption { option: String, reason: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid voice option error
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVoiceOption {
            option: option.into(),
            reason: reason.into(),
        }
    }
}
