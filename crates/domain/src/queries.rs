//! Abstract requests a caller can issue
//!
//! Each query names what it wants (languages, gender) and optionally a
//! preferred provider. Which provider and which provider-specific option
//! actually serve it is decided by the selection engine.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Gender, Language, Provider};

/// Translate text between two languages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateQuery {
    pub input_text: String,
    pub source_language: Language,
    pub target_language: Language,
    #[serde(default)]
    pub service: Option<Provider>,
}

impl TranslateQuery {
    /// Create a query with no preferred provider
    pub fn new(input_text: impl Into<String>, source_language: Language, target_language: Language) -> Self {
        Self {
            input_text: input_text.into(),
            source_language,
            target_language,
            service: None,
        }
    }

    /// Prefer a specific provider
    #[must_use]
    pub const fn with_service(mut self, service: Provider) -> Self {
        self.service = Some(service);
        self
    }
}

/// Transliterate text written in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransliterateQuery {
    pub input_text: String,
    pub language: Language,
    #[serde(default)]
    pub service: Option<Provider>,
}

impl TransliterateQuery {
    /// Create a query with no preferred provider
    pub fn new(input_text: impl Into<String>, language: Language) -> Self {
        Self {
            input_text: input_text.into(),
            language,
            service: None,
        }
    }

    /// Prefer a specific provider
    #[must_use]
    pub const fn with_service(mut self, service: Provider) -> Self {
        self.service = Some(service);
        self
    }
}

/// Look a word up in a dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryQuery {
    pub input_text: String,
    pub language: Language,
    #[serde(default)]
    pub service: Option<Provider>,
}

impl DictionaryQuery {
    /// Create a query with no preferred provider
    pub fn new(input_text: impl Into<String>, language: Language) -> Self {
        Self {
            input_text: input_text.into(),
            language,
            service: None,
        }
    }

    /// Prefer a specific provider
    #[must_use]
    pub const fn with_service(mut self, service: Provider) -> Self {
        self.service = Some(service);
        self
    }
}

/// Pronounce text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioQuery {
    pub input_text: String,
    pub language: Language,
    #[serde(default)]
    pub service: Option<Provider>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl AudioQuery {
    /// Create a query with no preferred provider or gender
    pub fn new(input_text: impl Into<String>, language: Language) -> Self {
        Self {
            input_text: input_text.into(),
            language,
            service: None,
            gender: None,
        }
    }

    /// Prefer a specific provider
    #[must_use]
    pub const fn with_service(mut self, service: Provider) -> Self {
        self.service = Some(service);
        self
    }

    /// Prefer a voice gender
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }
}

/// Break a sentence down token by token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownQuery {
    pub input_text: String,
    pub language: Language,
    /// Language each token is translated into
    #[serde(default = "default_translation_language")]
    pub translation_language: Language,
    #[serde(default)]
    pub translation_service: Option<Provider>,
    #[serde(default)]
    pub transliteration_service: Option<Provider>,
}

const fn default_translation_language() -> Language {
    Language::English
}

impl BreakdownQuery {
    /// Create a query translating into English with no preferred providers
    pub fn new(input_text: impl Into<String>, language: Language) -> Self {
        Self {
            input_text: input_text.into(),
            language,
            translation_language: default_translation_language(),
            translation_service: None,
            transliteration_service: None,
        }
    }
}
