//! Static provider catalog - capabilities read from a TOML manifest
//!
//! Used for development and integration tests. Listings come straight from
//! the manifest; operations answer with deterministic echo payloads built
//! from their inputs, so callers can assert exactly what was dispatched.
//!
//! ```toml
//! [[translation_languages]]
//! provider = "Azure"
//! language = "fr"
//! language_id = "fr"
//!
//! [[voices]]
//! provider = "Azure"
//! audio_language = "fr_FR"
//! name = "Denise"
//! gender = "Female"
//! voice_key = { name = "fr-FR-DeniseNeural" }
//! ```

use std::path::Path;

use application::error::ApplicationError;
use application::ports::{BreakdownRequest, ProviderCatalog, ProviderError};
use async_trait::async_trait;
use domain::{
    AudioFormat, BreakdownEntry, CapabilityEntry, DictionaryLookupOption, Language, Provider,
    TokenizationOption, TranslationLanguageEntry, TransliterationOption, Voice, VoiceOptions,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

/// Capability lists as laid out in the manifest file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub translation_languages: Vec<TranslationLanguageEntry>,
    #[serde(default)]
    pub transliteration_options: Vec<TransliterationOption>,
    #[serde(default)]
    pub dictionary_options: Vec<DictionaryLookupOption>,
    #[serde(default)]
    pub tokenization_options: Vec<TokenizationOption>,
    #[serde(default)]
    pub voices: Vec<Voice>,
}

impl Manifest {
    fn mentions(&self, provider: Provider) -> bool {
        fn any<T: CapabilityEntry>(entries: &[T], provider: Provider) -> bool {
            entries.iter().any(|entry| entry.provider() == provider)
        }

        any(&self.translation_languages, provider)
            || any(&self.transliteration_options, provider)
            || any(&self.dictionary_options, provider)
            || any(&self.tokenization_options, provider)
            || any(&self.voices, provider)
    }
}

/// Provider catalog backed by a fixed manifest
#[derive(Debug, Clone)]
pub struct StaticProviderCatalog {
    manifest: Manifest,
    providers: Vec<Provider>,
}

impl StaticProviderCatalog {
    /// Build from a parsed manifest, registering the enabled providers it mentions
    ///
    /// Providers are kept in declaration order.
    pub fn new(manifest: Manifest, enabled: &[Provider]) -> Self {
        let providers = Provider::all()
            .iter()
            .copied()
            .filter(|provider| enabled.contains(provider) && manifest.mentions(*provider))
            .collect();

        Self {
            manifest,
            providers,
        }
    }

    /// Parse a manifest from TOML text
    pub fn from_toml_str(contents: &str, enabled: &[Provider]) -> Result<Self, ApplicationError> {
        let manifest: Manifest = toml::from_str(contents)
            .map_err(|e| ApplicationError::Configuration(format!("Invalid manifest: {e}")))?;
        Ok(Self::new(manifest, enabled))
    }

    /// Read and parse a manifest file
    pub fn from_path(path: &Path, enabled: &[Provider]) -> Result<Self, ApplicationError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ApplicationError::Configuration(format!(
                "Cannot read manifest {}: {e}",
                path.display()
            ))
        })?;
        let catalog = Self::from_toml_str(&contents, enabled)?;
        info!(
            path = %path.display(),
            providers = catalog.providers.len(),
            "Loaded provider manifest"
        );
        Ok(catalog)
    }

    fn entries<T: CapabilityEntry + Clone>(
        &self,
        entries: &[T],
        provider: Provider,
    ) -> Result<Vec<T>, ProviderError> {
        self.ensure_registered(provider)?;
        Ok(entries
            .iter()
            .filter(|entry| entry.provider() == provider)
            .cloned()
            .collect())
    }

    fn ensure_registered(&self, provider: Provider) -> Result<(), ProviderError> {
        if self.providers.contains(&provider) {
            Ok(())
        } else {
            Err(ProviderError::Status {
                status: 404,
                body: format!("provider {provider} is not in the manifest"),
            })
        }
    }
}

#[async_trait]
impl ProviderCatalog for StaticProviderCatalog {
    fn providers(&self) -> Vec<Provider> {
        self.providers.clone()
    }

    async fn list_translation_languages(
        &self,
        provider: Provider,
    ) -> Result<Vec<TranslationLanguageEntry>, ProviderError> {
        self.entries(&self.manifest.translation_languages, provider)
    }

    async fn list_transliteration_options(
        &self,
        provider: Provider,
    ) -> Result<Vec<TransliterationOption>, ProviderError> {
        self.entries(&self.manifest.transliteration_options, provider)
    }

    async fn list_dictionary_options(
        &self,
        provider: Provider,
    ) -> Result<Vec<DictionaryLookupOption>, ProviderError> {
        self.entries(&self.manifest.dictionary_options, provider)
    }

    async fn list_tokenization_options(
        &self,
        provider: Provider,
    ) -> Result<Vec<TokenizationOption>, ProviderError> {
        self.entries(&self.manifest.tokenization_options, provider)
    }

    async fn list_voices(&self, provider: Provider) -> Result<Vec<Voice>, ProviderError> {
        self.entries(&self.manifest.voices, provider)
    }

    async fn translate(
        &self,
        provider: Provider,
        text: &str,
        from_id: &str,
        to_id: &str,
    ) -> Result<String, ProviderError> {
        self.ensure_registered(provider)?;
        debug!(%provider, "Echoing translation");
        Ok(json!({"provider": provider, "text": text, "from": from_id, "to": to_id}).to_string())
    }

    async fn transliterate(
        &self,
        provider: Provider,
        text: &str,
        key: &Value,
    ) -> Result<String, ProviderError> {
        self.ensure_registered(provider)?;
        Ok(json!({"provider": provider, "text": text, "key": key}).to_string())
    }

    async fn lookup_dictionary(
        &self,
        provider: Provider,
        text: &str,
        key: &Value,
    ) -> Result<Vec<String>, ProviderError> {
        self.ensure_registered(provider)?;
        Ok(vec![
            json!({"provider": provider, "text": text, "key": key}).to_string(),
        ])
    }

    async fn synthesize_audio(
        &self,
        provider: Provider,
        text: &str,
        voice_key: &Value,
        options: &VoiceOptions,
    ) -> Result<Vec<u8>, ProviderError> {
        self.ensure_registered(provider)?;
        serde_json::to_vec(&json!({
            "provider": provider,
            "text": text,
            "voice_key": voice_key,
            "options": options,
        }))
        .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }

    async fn breakdown(
        &self,
        text: &str,
        request: &BreakdownRequest,
    ) -> Result<Vec<BreakdownEntry>, ProviderError> {
        self.ensure_registered(request.tokenization.provider)?;
        let to = &request.translation.target_language_id;

        Ok(text
            .split_whitespace()
            .map(|token| BreakdownEntry {
                token: token.to_string(),
                lemma: None,
                transliteration: token.to_string(),
                translation: json!({"to": to, "text": token}).to_string(),
                pos_description: None,
            })
            .collect())
    }

    /// Answers with the first translation language listed for the provider
    async fn detect_language(
        &self,
        provider: Provider,
        texts: &[String],
    ) -> Result<Language, ProviderError> {
        self.ensure_registered(provider)?;
        debug!(%provider, count = texts.len(), "Detecting language from manifest");
        self.manifest
            .translation_languages
            .iter()
            .find(|entry| entry.provider == provider)
            .map(|entry| entry.language)
            .ok_or_else(|| ProviderError::Status {
                status: 422,
                body: format!("provider {provider} lists no languages"),
            })
    }

    async fn speech_to_text(
        &self,
        provider: Provider,
        audio: &[u8],
        format: AudioFormat,
    ) -> Result<String, ProviderError> {
        self.ensure_registered(provider)?;
        Ok(json!({"provider": provider, "format": format.as_str(), "bytes": audio.len()}).to_string())
    }
}
