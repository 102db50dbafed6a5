//! Audio output format value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the voice option that selects a provider's output format
pub const AUDIO_FORMAT_PARAMETER: &str = "format";

/// Output format of synthesized audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
    /// What every provider produces when no format option is given
    #[default]
    Mp3,
    OggOpus,
}

impl AudioFormat {
    /// Value used for the format option on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::OggOpus => "ogg_opus",
        }
    }

    /// MIME type of the encoded audio
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::OggOpus => "audio/ogg; codecs=opus",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_mp3() {
        assert_eq!(AudioFormat::default(), AudioFormat::Mp3);
    }

    #[test]
    fn serialized_name_matches_option_value() {
        let json = serde_json::to_string(&AudioFormat::OggOpus).expect("serialize");
        assert_eq!(json, format!("\"{}\"", AudioFormat::OggOpus.as_str()));
    }

    #[test]
    fn mime_types() {
        assert_eq!(AudioFormat::Mp3.mime_type(), "audio/mpeg");
        assert_eq!(AudioFormat::OggOpus.mime_type(), "audio/ogg; codecs=opus");
    }
}
