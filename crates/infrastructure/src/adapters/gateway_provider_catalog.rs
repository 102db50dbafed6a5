//! Gateway provider catalog - implements ProviderCatalog over an HTTP gateway
//!
//! Every provider is reached through one gateway that exposes JSON endpoints
//! under `{base_url}/{provider}/{operation}`. Capability listings are `GET`
//! requests; operations are `POST` requests with a JSON body.

use application::error::ApplicationError;
use application::ports::{BreakdownRequest, ProviderCatalog, ProviderError};
use async_trait::async_trait;
use domain::{
    AudioFormat, BreakdownEntry, DictionaryLookupOption, Language, Provider, TokenizationOption,
    TranslationLanguageEntry, TransliterationOption, Voice, VoiceOptions,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::GatewayConfig;

#[derive(Serialize)]
struct TranslateBody<'a> {
    text: &'a str,
    from_language_key: &'a str,
    to_language_key: &'a str,
}

#[derive(Serialize)]
struct TransliterateBody<'a> {
    text: &'a str,
    transliteration_key: &'a Value,
}

#[derive(Serialize)]
struct DictionaryLookupBody<'a> {
    text: &'a str,
    lookup_key: &'a Value,
}

#[derive(Serialize)]
struct AudioBody<'a> {
    text: &'a str,
    voice_key: &'a Value,
    options: &'a VoiceOptions,
}

#[derive(Serialize)]
struct BreakdownBody<'a> {
    text: &'a str,
    tokenization_option: &'a TokenizationOption,
    translation_option: &'a application::TranslationSelection,
    transliteration_option: &'a TransliterationOption,
}

#[derive(Serialize)]
struct DetectLanguageBody<'a> {
    texts: &'a [String],
}

#[derive(serde::Deserialize)]
struct TextResponse {
    text: String,
}

#[derive(serde::Deserialize)]
struct DetectLanguageResponse {
    language: Language,
}

/// Adapter executing provider operations through the HTTP gateway
pub struct GatewayProviderCatalog {
    client: Client,
    config: GatewayConfig,
    providers: Vec<Provider>,
}

impl std::fmt::Debug for GatewayProviderCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayProviderCatalog")
            .field("base_url", &self.config.base_url)
            .field("providers", &self.providers)
            .finish_non_exhaustive()
    }
}

impl GatewayProviderCatalog {
    /// Create an adapter for the given providers
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: GatewayConfig, providers: Vec<Provider>) -> Result<Self, ApplicationError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApplicationError::Configuration(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            providers,
        })
    }

    fn url(&self, provider: Provider, operation: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            provider.slug(),
            operation
        )
    }

    fn map_reqwest_error(&self, error: &reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::Timeout(self.config.timeout_ms)
        } else if error.is_decode() {
            ProviderError::InvalidResponse(error.to_string())
        } else {
            ProviderError::Transport(error.to_string())
        }
    }

    /// Send a request; any non-2xx status becomes an error carrying the raw body
    async fn send(&self, request: RequestBuilder) -> Result<Response, ProviderError> {
        let request = match self.config.api_key_str() {
            Some(key) => request.bearer_auth(key),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ProviderError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_reqwest_error(&e))?;
        serde_json::from_slice(&bytes).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }

    async fn list<T: DeserializeOwned>(
        &self,
        provider: Provider,
        operation: &str,
    ) -> Result<Vec<T>, ProviderError> {
        let url = self.url(provider, operation);
        debug!(url = %url, "Listing provider capabilities");
        let response = self.send(self.client.get(&url)).await?;
        self.decode(response).await
    }

    async fn post<B: Serialize + Sync>(
        &self,
        provider: Provider,
        operation: &str,
        body: &B,
    ) -> Result<Response, ProviderError> {
        let url = self.url(provider, operation);
        debug!(url = %url, "Executing provider operation");
        self.send(self.client.post(&url).json(body)).await
    }
}

#[async_trait]
impl ProviderCatalog for GatewayProviderCatalog {
    fn providers(&self) -> Vec<Provider> {
        self.providers.clone()
    }

    async fn list_translation_languages(
        &self,
        provider: Provider,
    ) -> Result<Vec<TranslationLanguageEntry>, ProviderError> {
        self.list(provider, "translation_languages").await
    }

    async fn list_transliteration_options(
        &self,
        provider: Provider,
    ) -> Result<Vec<TransliterationOption>, ProviderError> {
        self.list(provider, "transliteration_options").await
    }

    async fn list_dictionary_options(
        &self,
        provider: Provider,
    ) -> Result<Vec<DictionaryLookupOption>, ProviderError> {
        self.list(provider, "dictionary_options").await
    }

    async fn list_tokenization_options(
        &self,
        provider: Provider,
    ) -> Result<Vec<TokenizationOption>, ProviderError> {
        self.list(provider, "tokenization_options").await
    }

    async fn list_voices(&self, provider: Provider) -> Result<Vec<Voice>, ProviderError> {
        self.list(provider, "voices").await
    }

    #[instrument(skip(self, text))]
    async fn translate(
        &self,
        provider: Provider,
        text: &str,
        from_id: &str,
        to_id: &str,
    ) -> Result<String, ProviderError> {
        let body = TranslateBody {
            text,
            from_language_key: from_id,
            to_language_key: to_id,
        };
        let response = self.post(provider, "translate", &body).await?;
        let decoded: TextResponse = self.decode(response).await?;
        Ok(decoded.text)
    }

    #[instrument(skip(self, text, key))]
    async fn transliterate(
        &self,
        provider: Provider,
        text: &str,
        key: &Value,
    ) -> Result<String, ProviderError> {
        let body = TransliterateBody {
            text,
            transliteration_key: key,
        };
        let response = self.post(provider, "transliterate", &body).await?;
        let decoded: TextResponse = self.decode(response).await?;
        Ok(decoded.text)
    }

    #[instrument(skip(self, text, key))]
    async fn lookup_dictionary(
        &self,
        provider: Provider,
        text: &str,
        key: &Value,
    ) -> Result<Vec<String>, ProviderError> {
        let body = DictionaryLookupBody {
            text,
            lookup_key: key,
        };
        let response = self.post(provider, "dictionary_lookup", &body).await?;
        self.decode(response).await
    }

    #[instrument(skip(self, text, voice_key, options))]
    async fn synthesize_audio(
        &self,
        provider: Provider,
        text: &str,
        voice_key: &Value,
        options: &VoiceOptions,
    ) -> Result<Vec<u8>, ProviderError> {
        let body = AudioBody {
            text,
            voice_key,
            options,
        };
        let response = self.post(provider, "audio", &body).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_reqwest_error(&e))?;
        debug!(size = bytes.len(), "Received audio");
        Ok(bytes.to_vec())
    }

    #[instrument(skip(self, text, request), fields(provider = %request.tokenization.provider))]
    async fn breakdown(
        &self,
        text: &str,
        request: &BreakdownRequest,
    ) -> Result<Vec<BreakdownEntry>, ProviderError> {
        let body = BreakdownBody {
            text,
            tokenization_option: &request.tokenization,
            translation_option: &request.translation,
            transliteration_option: &request.transliteration,
        };
        let response = self
            .post(request.tokenization.provider, "breakdown", &body)
            .await?;
        self.decode(response).await
    }

    #[instrument(skip(self, texts), fields(count = texts.len()))]
    async fn detect_language(
        &self,
        provider: Provider,
        texts: &[String],
    ) -> Result<Language, ProviderError> {
        let body = DetectLanguageBody { texts };
        let response = self.post(provider, "detect_language", &body).await?;
        let decoded: DetectLanguageResponse = self.decode(response).await?;
        Ok(decoded.language)
    }

    /// Audio goes out as the raw request body, tagged with its MIME type
    #[instrument(skip(self, audio), fields(size = audio.len()))]
    async fn speech_to_text(
        &self,
        provider: Provider,
        audio: &[u8],
        format: AudioFormat,
    ) -> Result<String, ProviderError> {
        let url = self.url(provider, "speech_to_text");
        debug!(url = %url, "Executing provider operation");
        let request = self
            .client
            .post(&url)
            .query(&[("format", format.as_str())])
            .header(CONTENT_TYPE, format.mime_type())
            .body(audio.to_vec());
        let response = self.send(request).await?;
        let decoded: TextResponse = self.decode(response).await?;
        Ok(decoded.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(base_url: &str) -> GatewayProviderCatalog {
        GatewayProviderCatalog::new(
            GatewayConfig {
                base_url: base_url.to_string(),
                ..GatewayConfig::default()
            },
            vec![Provider::Azure, Provider::DeepL],
        )
        .unwrap()
    }

    #[test]
    fn url_uses_provider_slug() {
        let adapter = adapter("http://gateway.local/");
        assert_eq!(
            adapter.url(Provider::DeepL, "translate"),
            "http://gateway.local/deepl/translate"
        );
        assert_eq!(
            adapter.url(Provider::MandarinCantonese, "transliteration_options"),
            "http://gateway.local/mandarincantonese/transliteration_options"
        );
    }

    #[test]
    fn providers_are_the_configured_ones() {
        assert_eq!(
            adapter("http://gateway.local").providers(),
            vec![Provider::Azure, Provider::DeepL]
        );
    }

    #[test]
    fn translate_body_field_names() {
        let body = TranslateBody {
            text: "Bonjour",
            from_language_key: "fr",
            to_language_key: "en",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"text": "Bonjour", "from_language_key": "fr", "to_language_key": "en"})
        );
    }

    #[test]
    fn detect_language_response_uses_language_codes() {
        let decoded: DetectLanguageResponse =
            serde_json::from_value(serde_json::json!({"language": "zh_cn"})).unwrap();
        assert_eq!(decoded.language, Language::ChineseSimplified);
    }
}
