//! Provider catalog port - the live collaborators behind every provider
//!
//! One implementation covers all registered providers: it lists what each
//! provider can do and executes operations against a named provider.

use async_trait::async_trait;
use domain::{
    AudioFormat, BreakdownEntry, DictionaryLookupOption, Language, Provider, TokenizationOption,
    TranslationLanguageEntry, TransliterationOption, Voice, VoiceOptions,
};
#[cfg(test)]
use mockall::automock;
use serde_json::Value;
use thiserror::Error;

use crate::services::TranslationSelection;

/// Transport-level failure of a single provider call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Provider answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// No answer within the allotted time
    #[error("timed out after {0}ms")]
    Timeout(u64),

    /// Connection or protocol failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Answer could not be decoded
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// HTTP status, if the provider answered
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw body, or a description of the failure when there is none
    #[must_use]
    pub fn body(&self) -> String {
        match self {
            Self::Status { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

/// Everything a provider needs to break a sentence down
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRequest {
    pub tokenization: TokenizationOption,
    pub translation: TranslationSelection,
    pub transliteration: TransliterationOption,
}

/// Port for listing provider capabilities and executing provider operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProviderCatalog: Send + Sync {
    /// Providers this catalog holds a live collaborator for
    fn providers(&self) -> Vec<Provider>;

    /// Languages `provider` can translate from or to
    async fn list_translation_languages(
        &self,
        provider: Provider,
    ) -> Result<Vec<TranslationLanguageEntry>, ProviderError>;

    /// Transliteration schemes offered by `provider`
    async fn list_transliteration_options(
        &self,
        provider: Provider,
    ) -> Result<Vec<TransliterationOption>, ProviderError>;

    /// Dictionaries offered by `provider`
    async fn list_dictionary_options(
        &self,
        provider: Provider,
    ) -> Result<Vec<DictionaryLookupOption>, ProviderError>;

    /// Tokenizers offered by `provider`
    async fn list_tokenization_options(
        &self,
        provider: Provider,
    ) -> Result<Vec<TokenizationOption>, ProviderError>;

    /// Voices offered by `provider`
    async fn list_voices(&self, provider: Provider) -> Result<Vec<Voice>, ProviderError>;

    /// Translate `text` using provider-specific language ids
    async fn translate(
        &self,
        provider: Provider,
        text: &str,
        from_id: &str,
        to_id: &str,
    ) -> Result<String, ProviderError>;

    /// Transliterate `text` with a provider-specific key
    async fn transliterate(
        &self,
        provider: Provider,
        text: &str,
        key: &Value,
    ) -> Result<String, ProviderError>;

    /// Look `text` up, returning one string per definition
    async fn lookup_dictionary(
        &self,
        provider: Provider,
        text: &str,
        key: &Value,
    ) -> Result<Vec<String>, ProviderError>;

    /// Synthesize `text` with a provider-specific voice key
    async fn synthesize_audio(
        &self,
        provider: Provider,
        text: &str,
        voice_key: &Value,
        options: &VoiceOptions,
    ) -> Result<Vec<u8>, ProviderError>;

    /// Tokenize `text` and translate/transliterate each token
    async fn breakdown(
        &self,
        text: &str,
        request: &BreakdownRequest,
    ) -> Result<Vec<BreakdownEntry>, ProviderError>;

    /// Identify the language `texts` are written in
    async fn detect_language(
        &self,
        provider: Provider,
        texts: &[String],
    ) -> Result<Language, ProviderError>;

    /// Transcribe recorded speech encoded as `format`
    async fn speech_to_text(
        &self,
        provider: Provider,
        audio: &[u8],
        format: AudioFormat,
    ) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_exposes_status_and_body() {
        let err = ProviderError::Status {
            status: 403,
            body: "{\"error\":\"forbidden\"}".to_string(),
        };
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.body(), "{\"error\":\"forbidden\"}");
    }

    #[test]
    fn transport_error_has_no_status() {
        let err = ProviderError::Transport("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), "transport error: connection refused");
    }

    #[tokio::test]
    async fn mock_catalog_lists_translation_languages() {
        let mut mock = MockProviderCatalog::new();
        mock.expect_list_translation_languages()
            .returning(|provider| {
                Ok(vec![TranslationLanguageEntry::new(
                    provider,
                    domain::Language::French,
                    "fr",
                )])
            });

        let entries = mock
            .list_translation_languages(Provider::DeepL)
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].provider, Provider::DeepL);
    }
}
