//! Voice entity
//!
//! A text-to-speech voice offered by exactly one provider, together with the
//! schema of the options (speed, pitch, output format, ...) it accepts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DomainError;
use crate::value_objects::{AUDIO_FORMAT_PARAMETER, AudioFormat, AudioLanguage, Gender, Language, Provider};

/// Schema of one configurable voice option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VoiceOption {
    /// Numeric option bounded by `min..=max`
    Number { min: f64, max: f64, default: f64 },
    /// One value out of a fixed list
    Enumeration { values: Vec<String>, default: String },
    /// Free-form text
    Text { default: String },
}

impl VoiceOption {
    /// Check a requested value against this schema
    fn check(&self, name: &str, value: &OptionValue) -> Result<(), DomainError> {
        match (self, value) {
            (Self::Number { min, max, .. }, OptionValue::Number(n)) => {
                if (*min..=*max).contains(n) {
                    Ok(())
                } else {
                    Err(DomainError::invalid_option(
                        name,
                        format!("{n} is outside {min}..={max}"),
                    ))
                }
            },
            (Self::Enumeration { values, .. }, OptionValue::Text(s)) => {
                if values.iter().any(|v| v == s) {
                    Ok(())
                } else {
                    Err(DomainError::invalid_option(
                        name,
                        format!("'{s}' is not one of [{}]", values.join(", ")),
                    ))
                }
            },
            (Self::Text { .. }, OptionValue::Text(_)) => Ok(()),
            (Self::Number { .. }, OptionValue::Text(_)) => {
                Err(DomainError::invalid_option(name, "expected a number"))
            },
            (Self::Enumeration { .. } | Self::Text { .. }, OptionValue::Number(_)) => {
                Err(DomainError::invalid_option(name, "expected text"))
            },
        }
    }
}

/// A concrete option value passed to a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(f64),
    Text(String),
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Option values keyed by option name
pub type VoiceOptions = BTreeMap<String, OptionValue>;

/// A text-to-speech voice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    /// Provider offering the voice
    pub provider: Provider,
    /// Locale the voice speaks
    pub audio_language: AudioLanguage,
    /// Display name
    pub name: String,
    /// Voice gender
    pub gender: Gender,
    /// Provider-specific opaque key used to invoke synthesis
    pub voice_key: Value,
    /// Configurable options and their schema
    #[serde(default)]
    pub options: BTreeMap<String, VoiceOption>,
}

impl Voice {
    /// Create a voice without configurable options
    pub fn new(
        provider: Provider,
        audio_language: AudioLanguage,
        name: impl Into<String>,
        gender: Gender,
        voice_key: Value,
    ) -> Self {
        Self {
            provider,
            audio_language,
            name: name.into(),
            gender,
            voice_key,
            options: BTreeMap::new(),
        }
    }

    /// Add an option to the voice's schema
    #[must_use]
    pub fn with_option(mut self, name: impl Into<String>, option: VoiceOption) -> Self {
        self.options.insert(name.into(), option);
        self
    }

    /// Language the voice speaks
    #[must_use]
    pub const fn language(&self) -> Language {
        self.audio_language.language()
    }

    /// Human-readable description, e.g. `Denise (fr_FR, Female)`
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} ({}, {})", self.name, self.audio_language, self.gender)
    }

    /// Whether the provider can emit `format` natively for this voice
    #[must_use]
    pub fn supports_format(&self, format: AudioFormat) -> bool {
        matches!(
            self.options.get(AUDIO_FORMAT_PARAMETER),
            Some(VoiceOption::Enumeration { values, .. }) if values.iter().any(|v| v == format.as_str())
        )
    }

    /// Validate requested option values against this voice's schema
    pub fn validate_options(&self, requested: &VoiceOptions) -> Result<(), DomainError> {
        for (name, value) in requested {
            let schema = self
                .options
                .get(name)
                .ok_or_else(|| DomainError::invalid_option(name, "not supported by this voice"))?;
            schema.check(name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn voice() -> Voice {
        Voice::new(
            Provider::Azure,
            AudioLanguage::FrFr,
            "Denise",
            Gender::Female,
            json!({"name": "fr-FR-DeniseNeural"}),
        )
        .with_option(
            "rate",
            VoiceOption::Number {
                min: 0.5,
                max: 3.0,
                default: 1.0,
            },
        )
        .with_option(
            AUDIO_FORMAT_PARAMETER,
            VoiceOption::Enumeration {
                values: vec!["mp3".to_string(), "ogg_opus".to_string()],
                default: "mp3".to_string(),
            },
        )
    }

    #[test]
    fn description_includes_locale_and_gender() {
        assert_eq!(voice().description(), "Denise (fr_FR, Female)");
    }

    #[test]
    fn language_follows_audio_language() {
        assert_eq!(voice().language(), Language::French);
    }

    #[test]
    fn supports_format_from_enumeration() {
        let voice = voice();
        assert!(voice.supports_format(AudioFormat::OggOpus));
        assert!(voice.supports_format(AudioFormat::Mp3));
    }

    #[test]
    fn voice_without_format_option_supports_nothing_natively() {
        let voice = Voice::new(
            Provider::Google,
            AudioLanguage::FrFr,
            "Wavenet-A",
            Gender::Female,
            json!("fr-FR-Wavenet-A"),
        );
        assert!(!voice.supports_format(AudioFormat::OggOpus));
    }

    #[test]
    fn validate_accepts_values_within_schema() {
        let mut requested = VoiceOptions::new();
        requested.insert("rate".to_string(), 1.5.into());
        requested.insert(AUDIO_FORMAT_PARAMETER.to_string(), "ogg_opus".into());
        assert!(voice().validate_options(&requested).is_ok());
    }

    #[test]
    fn validate_rejects_out_of_bounds_number() {
        let mut requested = VoiceOptions::new();
        requested.insert("rate".to_string(), 4.0.into());
        let err = voice().validate_options(&requested).unwrap_err();
        assert!(matches!(err, DomainError::InvalidVoiceOption { option, .. } if option == "rate"));
    }

    #[test]
    fn validate_rejects_value_outside_enumeration() {
        let mut requested = VoiceOptions::new();
        requested.insert(AUDIO_FORMAT_PARAMETER.to_string(), "wav".into());
        assert!(voice().validate_options(&requested).is_err());
    }

    #[test]
    fn validate_rejects_unknown_option() {
        let mut requested = VoiceOptions::new();
        requested.insert("pitch".to_string(), 1.0.into());
        assert!(voice().validate_options(&requested).is_err());
    }

    #[test]
    fn validate_rejects_kind_mismatch() {
        let mut requested = VoiceOptions::new();
        requested.insert("rate".to_string(), "fast".into());
        assert!(voice().validate_options(&requested).is_err());
    }

    #[test]
    fn option_schema_deserializes_tagged() {
        let option: VoiceOption =
            serde_json::from_str(r#"{"type":"number","min":-10.0,"max":10.0,"default":0.0}"#)
                .expect("deserialize");
        assert_eq!(
            option,
            VoiceOption::Number {
                min: -10.0,
                max: 10.0,
                default: 0.0
            }
        );
    }
}
