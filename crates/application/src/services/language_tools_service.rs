//! Language tools service - entry point for abstract language requests
//!
//! Loads the current catalog snapshot once per request, lets the selection
//! engine commit to a provider option and hands that option to the
//! dispatcher. No-candidate failures are raised before any provider is
//! contacted.

use std::collections::BTreeMap;
use std::sync::Arc;

use domain::{
    AUDIO_FORMAT_PARAMETER, AudioFormat, AudioQuery, BreakdownQuery, CapabilityKind, DictionaryQuery,
    DomainError, Language, OptionValue, Provider, TranslateQuery, TransliterateQuery, VoiceOptions,
};
use tracing::{debug, info, instrument};

use super::candidate_filter::translation_candidates;
use super::capability_catalog::{CapabilityCatalog, RefreshReport};
use super::request_dispatcher::RequestDispatcher;
use super::selection_engine::{SelectionEngine, TranslationSelection};
use crate::error::ApplicationError;
use crate::ports::BreakdownRequest;

/// Separator between dictionary definitions
const DEFINITION_SEPARATOR: &str = " / ";

/// Provider answering language detection requests
pub const LANGUAGE_DETECTION_PROVIDER: Provider = Provider::Azure;

/// Provider transcribing recorded speech
pub const SPEECH_RECOGNITION_PROVIDER: Provider = Provider::OpenAI;

/// Audio produced for a pronunciation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    /// Encoded audio as returned by the provider
    pub data: Vec<u8>,
    /// Encoding of `data`
    pub format: AudioFormat,
    pub provider: Provider,
    /// Display name of the voice used
    pub voice_name: String,
    /// Whether `data` still has to be converted to the requested format
    pub needs_conversion: bool,
}

/// Application service answering translation, transliteration, dictionary,
/// audio and breakdown requests
#[derive(Debug, Clone)]
pub struct LanguageToolsService {
    catalog: Arc<CapabilityCatalog>,
    engine: SelectionEngine,
    dispatcher: RequestDispatcher,
}

impl LanguageToolsService {
    pub const fn new(
        catalog: Arc<CapabilityCatalog>,
        engine: SelectionEngine,
        dispatcher: RequestDispatcher,
    ) -> Self {
        Self {
            catalog,
            engine,
            dispatcher,
        }
    }

    /// Capability catalog backing this service
    #[must_use]
    pub fn catalog(&self) -> &Arc<CapabilityCatalog> {
        &self.catalog
    }

    /// Translate text with the preferred or first viable provider
    #[instrument(skip(self, query), fields(from = %query.source_language, to = %query.target_language))]
    pub async fn translate(&self, query: &TranslateQuery) -> Result<String, ApplicationError> {
        let snapshot = self.catalog.snapshot();
        let selection = self.engine.select_translation(
            &snapshot,
            query.service,
            query.source_language,
            query.target_language,
        )?;
        self.dispatcher.translate(&query.input_text, &selection).await
    }

    /// Translate text with every provider covering both languages
    ///
    /// Providers are visited in default translation order, then in
    /// declaration order for those without a default rank. The first
    /// failing provider aborts the whole request.
    #[instrument(skip(self, query), fields(from = %query.source_language, to = %query.target_language))]
    pub async fn translate_all(
        &self,
        query: &TranslateQuery,
    ) -> Result<Vec<(Provider, String)>, ApplicationError> {
        let snapshot = self.catalog.snapshot();
        let candidates = translation_candidates(
            &snapshot.translation_languages,
            query.source_language,
            query.target_language,
        );
        if candidates.is_empty() {
            return Err(ApplicationError::no_candidate(
                CapabilityKind::Translation,
                format!(
                    "translation from {} to {}",
                    query.source_language, query.target_language
                ),
            ));
        }

        let defaults = self
            .engine
            .preferences()
            .for_kind(CapabilityKind::Translation);
        let order = defaults.iter().copied().chain(
            Provider::all()
                .iter()
                .copied()
                .filter(|provider| !defaults.contains(provider)),
        );

        let mut results = Vec::with_capacity(candidates.providers.len());
        for provider in order {
            let Some((source, target)) = candidates.pair_for(provider) else {
                continue;
            };
            let selection = TranslationSelection {
                provider,
                source_language_id: source.language_id.clone(),
                target_language_id: target.language_id.clone(),
            };
            let text = self
                .dispatcher
                .translate(&query.input_text, &selection)
                .await?;
            results.push((provider, text));
        }

        debug!(count = results.len(), "Translated with every provider");
        Ok(results)
    }

    /// Transliterate text with the preferred or first viable provider
    #[instrument(skip(self, query), fields(language = %query.language))]
    pub async fn transliterate(
        &self,
        query: &TransliterateQuery,
    ) -> Result<String, ApplicationError> {
        let snapshot = self.catalog.snapshot();
        let option = self
            .engine
            .select_transliteration(&snapshot, query.service, query.language)?;
        self.dispatcher
            .transliterate(&query.input_text, &option)
            .await
    }

    /// Look a word up; definitions are joined with `" / "`
    #[instrument(skip(self, query), fields(language = %query.language))]
    pub async fn dictionary_lookup(
        &self,
        query: &DictionaryQuery,
    ) -> Result<String, ApplicationError> {
        let snapshot = self.catalog.snapshot();
        let option = self
            .engine
            .select_dictionary(&snapshot, query.service, query.language)?;
        let definitions = self
            .dispatcher
            .lookup_dictionary(&query.input_text, &option)
            .await?;
        Ok(definitions.join(DEFINITION_SEPARATOR))
    }

    /// Pronounce text in the requested format
    pub async fn audio(
        &self,
        query: &AudioQuery,
        format: AudioFormat,
    ) -> Result<SynthesizedAudio, ApplicationError> {
        self.audio_with_options(query, format, VoiceOptions::new())
            .await
    }

    /// Pronounce text, passing extra voice options to the provider
    ///
    /// Providers emit MP3 unless the voice lists the requested format in its
    /// `format` option. When it does not, the MP3 result is returned with
    /// `needs_conversion` set.
    #[instrument(
        skip(self, query, format, options),
        fields(language = %query.language, gender = ?query.gender, format = %format.as_str())
    )]
    pub async fn audio_with_options(
        &self,
        query: &AudioQuery,
        format: AudioFormat,
        mut options: VoiceOptions,
    ) -> Result<SynthesizedAudio, ApplicationError> {
        let snapshot = self.catalog.snapshot();
        let voice = self
            .engine
            .select_voice(&snapshot, query.service, query.language, query.gender)?;

        let native = format == AudioFormat::Mp3 || voice.supports_format(format);
        if format != AudioFormat::Mp3 && native {
            debug!(format = %format.as_str(), "Format natively supported by voice");
            options.insert(
                AUDIO_FORMAT_PARAMETER.to_string(),
                OptionValue::Text(format.as_str().to_string()),
            );
        }
        voice.validate_options(&options)?;

        let data = self
            .dispatcher
            .synthesize(&query.input_text, &voice, &options)
            .await?;

        if !native {
            debug!(voice = %voice.description(), "Audio needs conversion from mp3");
        }

        Ok(SynthesizedAudio {
            data,
            format: if native { format } else { AudioFormat::Mp3 },
            provider: voice.provider,
            voice_name: voice.name,
            needs_conversion: !native,
        })
    }

    /// Break a sentence down token by token, one line per token
    #[instrument(skip(self, query), fields(language = %query.language, translation_language = %query.translation_language))]
    pub async fn breakdown(&self, query: &BreakdownQuery) -> Result<String, ApplicationError> {
        let snapshot = self.catalog.snapshot();
        let tokenization = self
            .engine
            .select_tokenization(&snapshot, query.language)?;
        let translation = self.engine.select_translation(
            &snapshot,
            query.translation_service,
            query.language,
            query.translation_language,
        )?;
        let transliteration = self.engine.select_transliteration(
            &snapshot,
            query.transliteration_service,
            query.language,
        )?;

        let request = BreakdownRequest {
            tokenization,
            translation,
            transliteration,
        };
        let entries = self
            .dispatcher
            .breakdown(&query.input_text, &request)
            .await?;

        Ok(entries
            .iter()
            .map(domain::BreakdownEntry::to_line)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Detect the language of `texts` with the language detection provider
    ///
    /// Detection is not part of the capability catalog; the provider is fixed.
    #[instrument(skip(self, texts), fields(count = texts.len()))]
    pub async fn detect_language(&self, texts: &[String]) -> Result<Language, ApplicationError> {
        if texts.iter().all(|text| text.trim().is_empty()) {
            return Err(DomainError::ValidationError(
                "language detection needs at least one non-empty text".to_string(),
            )
            .into());
        }

        let language = self
            .dispatcher
            .detect_language(LANGUAGE_DETECTION_PROVIDER, texts)
            .await?;
        debug!(%language, "Detected language");
        Ok(language)
    }

    /// Transcribe recorded speech with the speech recognition provider
    #[instrument(skip(self, audio), fields(size = audio.len(), format = %format.as_str()))]
    pub async fn speech_to_text(
        &self,
        audio: &[u8],
        format: AudioFormat,
    ) -> Result<String, ApplicationError> {
        if audio.is_empty() {
            return Err(DomainError::ValidationError("no audio to recognize".to_string()).into());
        }

        self.dispatcher
            .speech_to_text(SPEECH_RECOGNITION_PROVIDER, audio, format)
            .await
    }

    /// Every supported language, code to display name
    pub fn language_list() -> BTreeMap<&'static str, &'static str> {
        Language::all()
            .iter()
            .map(|language| (language.code(), language.name()))
            .collect()
    }

    /// Refresh the capability snapshot now
    pub async fn refresh_catalog(&self) -> RefreshReport {
        let report = self.catalog.refresh().await;
        info!(partial = report.is_partial(), "Catalog refresh requested");
        report
    }
}
