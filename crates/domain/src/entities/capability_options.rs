//! Capability entries advertised by providers
//!
//! Each entry belongs to exactly one provider and pairs a [`Language`] with
//! the provider-specific identifier needed to invoke that provider's API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::Voice;
use crate::value_objects::{Language, Provider};

/// Common view over every kind of capability entry
pub trait CapabilityEntry {
    /// Provider the entry belongs to
    fn provider(&self) -> Provider;
    /// Language the entry covers
    fn language(&self) -> Language;
}

macro_rules! impl_capability_entry {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl CapabilityEntry for $ty {
                fn provider(&self) -> Provider {
                    self.provider
                }

                fn language(&self) -> Language {
                    self.language
                }
            }
        )+
    };
}

impl_capability_entry!(
    TranslationLanguageEntry,
    TransliterationOption,
    DictionaryLookupOption,
    TokenizationOption,
);

impl CapabilityEntry for Voice {
    fn provider(&self) -> Provider {
        self.provider
    }

    fn language(&self) -> Language {
        self.audio_language.language()
    }
}

/// A language a provider can translate from or to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationLanguageEntry {
    pub provider: Provider,
    pub language: Language,
    /// Identifier the provider's translation API expects (e.g. `"zh-Hans"`)
    pub language_id: String,
}

impl TranslationLanguageEntry {
    /// Create a new entry
    pub fn new(provider: Provider, language: Language, language_id: impl Into<String>) -> Self {
        Self {
            provider,
            language,
            language_id: language_id.into(),
        }
    }
}

/// A transliteration scheme offered by a provider for one language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransliterationOption {
    pub provider: Provider,
    pub language: Language,
    /// Display name of the scheme (e.g. `"Pinyin (tone marks)"`)
    #[serde(default)]
    pub name: String,
    /// Opaque configuration bundle passed back to the provider
    pub transliteration_key: Value,
}

impl TransliterationOption {
    /// Create a new option
    pub fn new(
        provider: Provider,
        language: Language,
        name: impl Into<String>,
        transliteration_key: Value,
    ) -> Self {
        Self {
            provider,
            language,
            name: name.into(),
            transliteration_key,
        }
    }

    /// Read a boolean flag out of the transliteration key
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.transliteration_key.get(name).and_then(Value::as_bool)
    }
}

/// A dictionary a provider can look words up in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryLookupOption {
    pub provider: Provider,
    pub language: Language,
    /// Opaque key passed back to the provider
    pub lookup_key: Value,
}

impl DictionaryLookupOption {
    /// Create a new option
    pub const fn new(provider: Provider, language: Language, lookup_key: Value) -> Self {
        Self {
            provider,
            language,
            lookup_key,
        }
    }
}

/// A sentence tokenizer a provider offers for one language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizationOption {
    pub provider: Provider,
    pub language: Language,
    /// Opaque key passed back to the provider
    pub tokenization_key: Value,
}

impl TokenizationOption {
    /// Create a new option
    pub const fn new(provider: Provider, language: Language, tokenization_key: Value) -> Self {
        Self {
            provider,
            language,
            tokenization_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flag_reads_boolean_from_key() {
        let option = TransliterationOption::new(
            Provider::MandarinCantonese,
            Language::ChineseSimplified,
            "Pinyin",
            json!({"tone_numbers": false, "spaces": true}),
        );
        assert_eq!(option.flag("tone_numbers"), Some(false));
        assert_eq!(option.flag("spaces"), Some(true));
        assert_eq!(option.flag("missing"), None);
    }

    #[test]
    fn flag_ignores_non_boolean_values() {
        let option = TransliterationOption::new(
            Provider::Azure,
            Language::Japanese,
            "Latin",
            json!({"tone_numbers": "no"}),
        );
        assert_eq!(option.flag("tone_numbers"), None);
    }

    #[test]
    fn translation_entry_deserializes() {
        let entry: TranslationLanguageEntry = serde_json::from_value(json!({
            "provider": "Azure",
            "language": "zh_cn",
            "language_id": "zh-Hans"
        }))
        .expect("deserialize");
        assert_eq!(
            entry,
            TranslationLanguageEntry::new(Provider::Azure, Language::ChineseSimplified, "zh-Hans")
        );
    }
}
