//! Request dispatcher - executes a committed selection against its provider
//!
//! Every call is bounded by a timeout. A failed call is reported once; the
//! dispatcher never retries and never tries another provider.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use domain::{
    AudioFormat, BreakdownEntry, DictionaryLookupOption, Language, Provider, TransliterationOption,
    Voice, VoiceOptions,
};
use tokio::time::timeout;
use tracing::{debug, warn};

use super::selection_engine::TranslationSelection;
use crate::error::ApplicationError;
use crate::ports::{BreakdownRequest, ProviderCatalog, ProviderError};

/// Default bound on a single provider call
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Invokes provider operations for finalized selections
#[derive(Clone)]
pub struct RequestDispatcher {
    catalog: Arc<dyn ProviderCatalog>,
    timeout: Duration,
}

impl fmt::Debug for RequestDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestDispatcher")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl RequestDispatcher {
    /// Create a dispatcher with the default timeout
    pub fn new(catalog: Arc<dyn ProviderCatalog>) -> Self {
        Self::with_timeout(catalog, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a dispatcher with a custom per-call timeout
    pub fn with_timeout(catalog: Arc<dyn ProviderCatalog>, timeout: Duration) -> Self {
        Self { catalog, timeout }
    }

    /// Per-call timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn translate(
        &self,
        text: &str,
        selection: &TranslationSelection,
    ) -> Result<String, ApplicationError> {
        self.call(
            selection.provider,
            "translate",
            self.catalog.translate(
                selection.provider,
                text,
                &selection.source_language_id,
                &selection.target_language_id,
            ),
        )
        .await
    }

    pub async fn transliterate(
        &self,
        text: &str,
        option: &TransliterationOption,
    ) -> Result<String, ApplicationError> {
        self.call(
            option.provider,
            "transliterate",
            self.catalog
                .transliterate(option.provider, text, &option.transliteration_key),
        )
        .await
    }

    pub async fn lookup_dictionary(
        &self,
        text: &str,
        option: &DictionaryLookupOption,
    ) -> Result<Vec<String>, ApplicationError> {
        self.call(
            option.provider,
            "lookup_dictionary",
            self.catalog
                .lookup_dictionary(option.provider, text, &option.lookup_key),
        )
        .await
    }

    pub async fn synthesize(
        &self,
        text: &str,
        voice: &Voice,
        options: &VoiceOptions,
    ) -> Result<Vec<u8>, ApplicationError> {
        self.call(
            voice.provider,
            "synthesize_audio",
            self.catalog
                .synthesize_audio(voice.provider, text, &voice.voice_key, options),
        )
        .await
    }

    /// Break `text` down with the tokenization option's provider
    pub async fn breakdown(
        &self,
        text: &str,
        request: &BreakdownRequest,
    ) -> Result<Vec<BreakdownEntry>, ApplicationError> {
        let provider = request.tokenization.provider;
        self.call(provider, "breakdown", self.catalog.breakdown(text, request))
            .await
    }

    pub async fn detect_language(
        &self,
        provider: Provider,
        texts: &[String],
    ) -> Result<Language, ApplicationError> {
        self.call(
            provider,
            "detect_language",
            self.catalog.detect_language(provider, texts),
        )
        .await
    }

    pub async fn speech_to_text(
        &self,
        provider: Provider,
        audio: &[u8],
        format: AudioFormat,
    ) -> Result<String, ApplicationError> {
        self.call(
            provider,
            "speech_to_text",
            self.catalog.speech_to_text(provider, audio, format),
        )
        .await
    }

    async fn call<T, F>(
        &self,
        provider: Provider,
        operation: &'static str,
        request: F,
    ) -> Result<T, ApplicationError>
    where
        F: Future<Output = Result<T, ProviderError>>,
    {
        debug!(%provider, operation, "Dispatching provider request");

        let limit_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
        let result = timeout(self.timeout, request)
            .await
            .unwrap_or(Err(ProviderError::Timeout(limit_ms)));

        result.map_err(|err| {
            warn!(%provider, operation, error = %err, "Provider request failed");
            ApplicationError::provider_request(provider, err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockProviderCatalog;
    use domain::{AudioLanguage, Gender, Language};
    use serde_json::json;

    fn deepl_selection() -> TranslationSelection {
        TranslationSelection {
            provider: Provider::DeepL,
            source_language_id: "FR".to_string(),
            target_language_id: "EN-US".to_string(),
        }
    }

    #[tokio::test]
    async fn translate_passes_provider_specific_ids() {
        let mut mock = MockProviderCatalog::new();
        mock.expect_translate()
            .withf(|provider, text, from, to| {
                *provider == Provider::DeepL && text == "Bonjour" && from == "FR" && to == "EN-US"
            })
            .times(1)
            .returning(|_, _, _, _| Ok("Hello".to_string()));

        let dispatcher = RequestDispatcher::new(Arc::new(mock));
        let result = dispatcher.translate("Bonjour", &deepl_selection()).await;

        assert_eq!(result.unwrap(), "Hello");
    }

    #[tokio::test]
    async fn provider_failure_is_reported_once() {
        let mut mock = MockProviderCatalog::new();
        mock.expect_translate().times(1).returning(|_, _, _, _| {
            Err(ProviderError::Status {
                status: 456,
                body: "Quota exceeded".to_string(),
            })
        });

        let dispatcher = RequestDispatcher::new(Arc::new(mock));
        let err = dispatcher
            .translate("Bonjour", &deepl_selection())
            .await
            .unwrap_err();

        match err {
            ApplicationError::ProviderRequest {
                provider,
                status,
                body,
            } => {
                assert_eq!(provider, Provider::DeepL);
                assert_eq!(status, Some(456));
                assert_eq!(body, "Quota exceeded");
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_provider_times_out() {
        let dispatcher = RequestDispatcher::with_timeout(
            Arc::new(MockProviderCatalog::new()),
            Duration::from_millis(10),
        );

        let err = dispatcher
            .call(
                Provider::Azure,
                "translate",
                std::future::pending::<Result<String, ProviderError>>(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::ProviderRequest {
                provider: Provider::Azure,
                status: None,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Azure request failed: timed out after 10ms");
    }

    #[tokio::test]
    async fn synthesize_uses_voice_key() {
        let mut mock = MockProviderCatalog::new();
        mock.expect_synthesize_audio()
            .withf(|provider, _, key, options| {
                *provider == Provider::Azure && key == &json!({"name": "fr-FR-DeniseNeural"}) && options.is_empty()
            })
            .returning(|_, _, _, _| Ok(vec![0xFF, 0xFB]));

        let voice = Voice::new(
            Provider::Azure,
            AudioLanguage::FrFr,
            "Denise",
            Gender::Female,
            json!({"name": "fr-FR-DeniseNeural"}),
        );
        let dispatcher = RequestDispatcher::new(Arc::new(mock));
        let audio = dispatcher
            .synthesize("Bonjour", &voice, &VoiceOptions::new())
            .await
            .unwrap();

        assert_eq!(audio, vec![0xFF, 0xFB]);
    }

    #[tokio::test]
    async fn dictionary_lookup_returns_definitions() {
        let mut mock = MockProviderCatalog::new();
        mock.expect_lookup_dictionary()
            .returning(|_, _, _| Ok(vec!["hello".to_string(), "good day".to_string()]));

        let option = DictionaryLookupOption::new(Provider::Azure, Language::French, json!({"from": "fr"}));
        let dispatcher = RequestDispatcher::new(Arc::new(mock));
        let definitions = dispatcher.lookup_dictionary("bonjour", &option).await.unwrap();

        assert_eq!(definitions, vec!["hello", "good day"]);
    }

    #[tokio::test]
    async fn detect_language_maps_provider_failure() {
        let mut mock = MockProviderCatalog::new();
        mock.expect_detect_language()
            .withf(|provider, texts| *provider == Provider::Azure && texts.len() == 2)
            .times(1)
            .returning(|_, _| {
                Err(ProviderError::Status {
                    status: 503,
                    body: "unavailable".to_string(),
                })
            });

        let dispatcher = RequestDispatcher::new(Arc::new(mock));
        let texts = vec!["Bonjour".to_string(), "Merci".to_string()];
        let err = dispatcher
            .detect_language(Provider::Azure, &texts)
            .await
            .unwrap_err();

        assert!(err.is_retryable());
        assert!(matches!(
            err,
            ApplicationError::ProviderRequest {
                provider: Provider::Azure,
                status: Some(503),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn speech_to_text_passes_audio_and_format() {
        let mut mock = MockProviderCatalog::new();
        mock.expect_speech_to_text()
            .withf(|provider, audio, format| {
                *provider == Provider::OpenAI && audio.starts_with(b"OggS") && *format == AudioFormat::OggOpus
            })
            .times(1)
            .returning(|_, _, _| Ok("bonjour".to_string()));

        let dispatcher = RequestDispatcher::new(Arc::new(mock));
        let text = dispatcher
            .speech_to_text(Provider::OpenAI, b"OggS\x00\x02", AudioFormat::OggOpus)
            .await
            .unwrap();

        assert_eq!(text, "bonjour");
    }
}
