//! End-to-end tests over the static manifest adapter
//!
//! The manifest adapter echoes its inputs, so these tests check which
//! provider and which provider-specific keys each request was routed to.

use std::io::Write;

use application::{ApplicationError, LanguageToolsService};
use domain::{
    AudioFormat, AudioQuery, BreakdownQuery, DictionaryQuery, Gender, Language, Provider,
    TranslateQuery, TransliterateQuery,
};
use serde_json::{Value, json};
use tempfile::NamedTempFile;

use infrastructure::{AppConfig, build_language_tools};

const MANIFEST: &str = r#"
[[translation_languages]]
provider = "Azure"
language = "fr"
language_id = "fr"

[[translation_languages]]
provider = "Azure"
language = "en"
language_id = "en"

[[translation_languages]]
provider = "DeepL"
language = "fr"
language_id = "FR"

[[translation_languages]]
provider = "DeepL"
language = "en"
language_id = "EN-US"

[[translation_languages]]
provider = "OpenAI"
language = "fr"
language_id = "fr"

[[transliteration_options]]
provider = "Azure"
language = "fr"
name = "IPA"
transliteration_key = { script = "ipa" }

[[dictionary_options]]
provider = "Wenlin"
language = "zh_cn"
lookup_key = { dictionary = "abc" }

[[tokenization_options]]
provider = "Spacy"
language = "fr"
tokenization_key = { model = "fr_core_news_sm" }

[[voices]]
provider = "Azure"
audio_language = "fr_FR"
name = "Denise"
gender = "Female"
voice_key = { name = "fr-FR-DeniseNeural" }

[voices.options.format]
type = "enumeration"
values = ["mp3", "ogg_opus"]
default = "mp3"

[[voices]]
provider = "Amazon"
audio_language = "fr_FR"
name = "Mathieu"
gender = "Male"
voice_key = { voice_id = "Mathieu" }
"#;

async fn service() -> (LanguageToolsService, NamedTempFile) {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(MANIFEST.as_bytes()).unwrap();

    let mut config = AppConfig::default();
    config.catalog.manifest_path = Some(file.path().to_path_buf());
    config.catalog.refresh_interval_secs = 0;

    let (service, refresh_task) = build_language_tools(&config).await.unwrap();
    assert!(refresh_task.is_none());
    (service, file)
}

fn echo(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

#[tokio::test]
async fn translation_uses_default_order() {
    let (service, _manifest) = service().await;

    let text = service
        .translate(&TranslateQuery::new("Bonjour", Language::French, Language::English))
        .await
        .unwrap();

    assert_eq!(
        echo(&text),
        json!({"provider": "DeepL", "text": "Bonjour", "from": "FR", "to": "EN-US"})
    );
}

#[tokio::test]
async fn preferred_provider_wins_when_viable() {
    let (service, _manifest) = service().await;
    let mut query = TranslateQuery::new("Bonjour", Language::French, Language::English);
    query.service = Some(Provider::Azure);

    let text = service.translate(&query).await.unwrap();

    assert_eq!(echo(&text)["provider"], "Azure");
    assert_eq!(echo(&text)["to"], "en");
}

#[tokio::test]
async fn translate_all_follows_preference_order() {
    let (service, _manifest) = service().await;

    let results = service
        .translate_all(&TranslateQuery::new("Bonjour", Language::French, Language::English))
        .await
        .unwrap();

    let providers: Vec<_> = results.iter().map(|(provider, _)| *provider).collect();
    assert_eq!(providers, vec![Provider::DeepL, Provider::Azure]);
}

#[tokio::test]
async fn transliteration_passes_the_option_key() {
    let (service, _manifest) = service().await;

    let text = service
        .transliterate(&TransliterateQuery::new("bonjour", Language::French))
        .await
        .unwrap();

    assert_eq!(
        echo(&text),
        json!({"provider": "Azure", "text": "bonjour", "key": {"script": "ipa"}})
    );
}

#[tokio::test]
async fn dictionary_without_candidates_fails_before_dispatch() {
    let (service, _manifest) = service().await;

    let err = service
        .dictionary_lookup(&DictionaryQuery::new("bonjour", Language::French))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NoCandidate { .. }));
    assert!(
        err.to_string()
            .starts_with("No service found for dictionary lookup")
    );
}

#[tokio::test]
async fn ogg_is_requested_natively_when_the_voice_supports_it() {
    let (service, _manifest) = service().await;

    let audio = service
        .audio(
            &AudioQuery::new("bonjour", Language::French),
            AudioFormat::OggOpus,
        )
        .await
        .unwrap();

    assert_eq!(audio.provider, Provider::Azure);
    assert_eq!(audio.voice_name, "Denise");
    assert_eq!(audio.format, AudioFormat::OggOpus);
    assert!(!audio.needs_conversion);

    let payload: Value = serde_json::from_slice(&audio.data).unwrap();
    assert_eq!(payload["options"], json!({"format": "ogg_opus"}));
}

#[tokio::test]
async fn voice_without_ogg_needs_conversion() {
    let (service, _manifest) = service().await;
    let mut query = AudioQuery::new("bonjour", Language::French);
    query.service = Some(Provider::Amazon);

    let audio = service.audio(&query, AudioFormat::OggOpus).await.unwrap();

    assert_eq!(audio.provider, Provider::Amazon);
    assert_eq!(audio.voice_name, "Mathieu");
    assert_eq!(audio.format, AudioFormat::Mp3);
    assert!(audio.needs_conversion);

    let payload: Value = serde_json::from_slice(&audio.data).unwrap();
    assert_eq!(payload["options"], json!({}));
}

#[tokio::test]
async fn gender_falls_back_within_the_selected_provider() {
    let (service, _manifest) = service().await;
    let mut query = AudioQuery::new("bonjour", Language::French);
    query.gender = Some(Gender::Male);

    // Azure is first in the audio order and only has a female voice
    let audio = service.audio(&query, AudioFormat::Mp3).await.unwrap();

    assert_eq!(audio.provider, Provider::Azure);
    assert_eq!(audio.voice_name, "Denise");
    assert!(!audio.needs_conversion);
}

#[tokio::test]
async fn breakdown_renders_one_line_per_token() {
    let (service, _manifest) = service().await;

    let text = service
        .breakdown(&BreakdownQuery::new("je suis", Language::French))
        .await
        .unwrap();

    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("je: je, "));
    assert!(lines[1].starts_with("suis: suis, "));
}

#[tokio::test]
async fn catalog_listings_reflect_the_manifest() {
    let (service, _manifest) = service().await;
    let catalog = service.catalog();

    assert_eq!(catalog.translation_languages().len(), 5);
    assert_eq!(catalog.voices().len(), 2);
    assert_eq!(catalog.tokenization_options().len(), 1);
    assert!(catalog.snapshot().refreshed_at.is_some());
}

#[tokio::test]
async fn language_detection_is_answered_by_azure() {
    let (service, _manifest) = service().await;

    let language = service
        .detect_language(&["Bonjour tout le monde".to_string()])
        .await
        .unwrap();

    // Azure lists French first in the manifest
    assert_eq!(language, Language::French);
}

#[tokio::test]
async fn speech_recognition_is_answered_by_openai() {
    let (service, _manifest) = service().await;

    let text = service
        .speech_to_text(b"ID3\x04", AudioFormat::Mp3)
        .await
        .unwrap();

    assert_eq!(
        echo(&text),
        json!({"provider": "OpenAI", "format": "mp3", "bytes": 4})
    );
}
