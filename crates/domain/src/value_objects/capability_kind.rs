//! Capability kind value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of capability a provider can advertise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    Translation,
    Transliteration,
    DictionaryLookup,
    Audio,
    /// Sentence tokenization, backing the breakdown operation
    Tokenization,
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Translation => "translation",
            Self::Transliteration => "transliteration",
            Self::DictionaryLookup => "dictionary lookup",
            Self::Audio => "audio",
            Self::Tokenization => "tokenization",
        };
        write!(f, "{label}")
    }
}
