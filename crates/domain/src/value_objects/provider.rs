//! Provider value object
//!
//! Identity of a third-party backend. Everything a provider can actually do
//! lives behind the provider catalog port in the application layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A backend vendor exposing language-processing APIs
///
/// Serialized by name (e.g. `"DeepL"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Provider {
    Azure,
    Google,
    Amazon,
    Watson,
    DeepL,
    Naver,
    CereProc,
    VocalWare,
    FptAi,
    MandarinCantonese,
    EasyPronunciation,
    PyThaiNLP,
    Wenlin,
    Spacy,
    OpenAI,
}

impl Provider {
    const ALL: [Self; 15] = [
        Self::Azure,
        Self::Google,
        Self::Amazon,
        Self::Watson,
        Self::DeepL,
        Self::Naver,
        Self::CereProc,
        Self::VocalWare,
        Self::FptAi,
        Self::MandarinCantonese,
        Self::EasyPronunciation,
        Self::PyThaiNLP,
        Self::Wenlin,
        Self::Spacy,
        Self::OpenAI,
    ];

    /// All known providers
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Azure => "Azure",
            Self::Google => "Google",
            Self::Amazon => "Amazon",
            Self::Watson => "Watson",
            Self::DeepL => "DeepL",
            Self::Naver => "Naver",
            Self::CereProc => "CereProc",
            Self::VocalWare => "VocalWare",
            Self::FptAi => "FptAi",
            Self::MandarinCantonese => "MandarinCantonese",
            Self::EasyPronunciation => "EasyPronunciation",
            Self::PyThaiNLP => "PyThaiNLP",
            Self::Wenlin => "Wenlin",
            Self::Spacy => "Spacy",
            Self::OpenAI => "OpenAI",
        }
    }

    /// URL path segment for this provider (lowercase name)
    #[must_use]
    pub fn slug(self) -> String {
        self.name().to_lowercase()
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Provider {
    type Err = DomainError;

    /// Case-insensitive lookup by name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|provider| provider.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownProvider(s.to_string()))
    }
}
