//! Language value object
//!
//! The fixed set of human languages a request can name, independent of any
//! provider. Providers map their own language identifiers onto this set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;
use crate::value_objects::AudioLanguage;

/// A supported natural language
///
/// Serialized as its short code (e.g. `"fr"`, `"zh_cn"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    Arabic,
    Bulgarian,
    Cantonese,
    ChineseSimplified,
    ChineseTraditional,
    Czech,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    FrenchCanada,
    German,
    Greek,
    Hebrew,
    Hindi,
    Hungarian,
    Indonesian,
    Italian,
    Japanese,
    Korean,
    Latin,
    Norwegian,
    Polish,
    PortugueseBrazil,
    PortuguesePortugal,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Thai,
    Turkish,
    Ukrainian,
    Vietnamese,
}

impl Language {
    const ALL: [Self; 34] = [
        Self::Arabic,
        Self::Bulgarian,
        Self::Cantonese,
        Self::ChineseSimplified,
        Self::ChineseTraditional,
        Self::Czech,
        Self::Danish,
        Self::Dutch,
        Self::English,
        Self::Finnish,
        Self::French,
        Self::FrenchCanada,
        Self::German,
        Self::Greek,
        Self::Hebrew,
        Self::Hindi,
        Self::Hungarian,
        Self::Indonesian,
        Self::Italian,
        Self::Japanese,
        Self::Korean,
        Self::Latin,
        Self::Norwegian,
        Self::Polish,
        Self::PortugueseBrazil,
        Self::PortuguesePortugal,
        Self::Romanian,
        Self::Russian,
        Self::Spanish,
        Self::Swedish,
        Self::Thai,
        Self::Turkish,
        Self::Ukrainian,
        Self::Vietnamese,
    ];

    /// All supported languages, in declaration order
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// Short code used on the wire
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::Bulgarian => "bg",
            Self::Cantonese => "yue",
            Self::ChineseSimplified => "zh_cn",
            Self::ChineseTraditional => "zh_tw",
            Self::Czech => "cs",
            Self::Danish => "da",
            Self::Dutch => "nl",
            Self::English => "en",
            Self::Finnish => "fi",
            Self::French => "fr",
            Self::FrenchCanada => "fr_ca",
            Self::German => "de",
            Self::Greek => "el",
            Self::Hebrew => "he",
            Self::Hindi => "hi",
            Self::Hungarian => "hu",
            Self::Indonesian => "id",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Latin => "la",
            Self::Norwegian => "no",
            Self::Polish => "pl",
            Self::PortugueseBrazil => "pt_br",
            Self::PortuguesePortugal => "pt_pt",
            Self::Romanian => "ro",
            Self::Russian => "ru",
            Self::Spanish => "es",
            Self::Swedish => "sv",
            Self::Thai => "th",
            Self::Turkish => "tr",
            Self::Ukrainian => "uk",
            Self::Vietnamese => "vi",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Arabic => "Arabic",
            Self::Bulgarian => "Bulgarian",
            Self::Cantonese => "Chinese (Cantonese, Traditional)",
            Self::ChineseSimplified => "Chinese (Simplified)",
            Self::ChineseTraditional => "Chinese (Traditional)",
            Self::Czech => "Czech",
            Self::Danish => "Danish",
            Self::Dutch => "Dutch",
            Self::English => "English",
            Self::Finnish => "Finnish",
            Self::French => "French",
            Self::FrenchCanada => "French (Canada)",
            Self::German => "German",
            Self::Greek => "Greek",
            Self::Hebrew => "Hebrew",
            Self::Hindi => "Hindi",
            Self::Hungarian => "Hungarian",
            Self::Indonesian => "Indonesian",
            Self::Italian => "Italian",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Latin => "Latin",
            Self::Norwegian => "Norwegian",
            Self::Polish => "Polish",
            Self::PortugueseBrazil => "Portuguese (Brazil)",
            Self::PortuguesePortugal => "Portuguese (Portugal)",
            Self::Romanian => "Romanian",
            Self::Russian => "Russian",
            Self::Spanish => "Spanish",
            Self::Swedish => "Swedish",
            Self::Thai => "Thai",
            Self::Turkish => "Turkish",
            Self::Ukrainian => "Ukrainian",
            Self::Vietnamese => "Vietnamese",
        }
    }

    /// Look a language up by its short code
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        Self::ALL
            .iter()
            .copied()
            .find(|language| language.code() == code)
            .ok_or_else(|| DomainError::UnknownLanguage(code.to_string()))
    }

    /// Locale used to pick a voice when pronouncing this language
    ///
    /// Returns `None` for languages no text-to-speech locale is defined for.
    #[must_use]
    pub const fn default_audio_language(self) -> Option<AudioLanguage> {
        let audio = match self {
            Self::Arabic => AudioLanguage::ArXa,
            Self::Bulgarian => AudioLanguage::BgBg,
            Self::Cantonese => AudioLanguage::ZhHk,
            Self::ChineseSimplified => AudioLanguage::ZhCn,
            Self::ChineseTraditional => AudioLanguage::ZhTw,
            Self::Czech => AudioLanguage::CsCz,
            Self::Danish => AudioLanguage::DaDk,
            Self::Dutch => AudioLanguage::NlNl,
            Self::English => AudioLanguage::EnUs,
            Self::Finnish => AudioLanguage::FiFi,
            Self::French => AudioLanguage::FrFr,
            Self::FrenchCanada => AudioLanguage::FrCa,
            Self::German => AudioLanguage::DeDe,
            Self::Greek => AudioLanguage::ElGr,
            Self::Hebrew => AudioLanguage::HeIl,
            Self::Hindi => AudioLanguage::HiIn,
            Self::Hungarian => AudioLanguage::HuHu,
            Self::Indonesian => AudioLanguage::IdId,
            Self::Italian => AudioLanguage::ItIt,
            Self::Japanese => AudioLanguage::JaJp,
            Self::Korean => AudioLanguage::KoKr,
            Self::Latin => return None,
            Self::Norwegian => AudioLanguage::NbNo,
            Self::Polish => AudioLanguage::PlPl,
            Self::PortugueseBrazil => AudioLanguage::PtBr,
            Self::PortuguesePortugal => AudioLanguage::PtPt,
            Self::Romanian => AudioLanguage::RoRo,
            Self::Russian => AudioLanguage::RuRu,
            Self::Spanish => AudioLanguage::EsEs,
            Self::Swedish => AudioLanguage::SvSe,
            Self::Thai => AudioLanguage::ThTh,
            Self::Turkish => AudioLanguage::TrTr,
            Self::Ukrainian => AudioLanguage::UkUa,
            Self::Vietnamese => AudioLanguage::ViVn,
        };
        Some(audio)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for Language {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}
