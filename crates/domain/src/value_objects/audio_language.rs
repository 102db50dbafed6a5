//! Audio language value object
//!
//! A language combined with a locale. Voices are tagged with one of these,
//! since one language may be spoken with several regional voices.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;
use crate::value_objects::Language;

/// A locale used for voice selection
///
/// Serialized as its locale code (e.g. `"fr_FR"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AudioLanguage {
    ArXa,
    BgBg,
    CsCz,
    DaDk,
    DeAt,
    DeDe,
    ElGr,
    EnAu,
    EnGb,
    EnUs,
    EsEs,
    EsMx,
    FiFi,
    FrCa,
    FrFr,
    HeIl,
    HiIn,
    HuHu,
    IdId,
    ItIt,
    JaJp,
    KoKr,
    NbNo,
    NlNl,
    PlPl,
    PtBr,
    PtPt,
    RoRo,
    RuRu,
    SvSe,
    ThTh,
    TrTr,
    UkUa,
    ViVn,
    ZhCn,
    ZhHk,
    ZhTw,
}

impl AudioLanguage {
    const ALL: [Self; 37] = [
        Self::ArXa,
        Self::BgBg,
        Self::CsCz,
        Self::DaDk,
        Self::DeAt,
        Self::DeDe,
        Self::ElGr,
        Self::EnAu,
        Self::EnGb,
        Self::EnUs,
        Self::EsEs,
        Self::EsMx,
        Self::FiFi,
        Self::FrCa,
        Self::FrFr,
        Self::HeIl,
        Self::HiIn,
        Self::HuHu,
        Self::IdId,
        Self::ItIt,
        Self::JaJp,
        Self::KoKr,
        Self::NbNo,
        Self::NlNl,
        Self::PlPl,
        Self::PtBr,
        Self::PtPt,
        Self::RoRo,
        Self::RuRu,
        Self::SvSe,
        Self::ThTh,
        Self::TrTr,
        Self::UkUa,
        Self::ViVn,
        Self::ZhCn,
        Self::ZhHk,
        Self::ZhTw,
    ];

    /// All supported audio locales
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// Locale code, as advertised by most providers (with `_` instead of `-`)
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ArXa => "ar_XA",
            Self::BgBg => "bg_BG",
            Self::CsCz => "cs_CZ",
            Self::DaDk => "da_DK",
            Self::DeAt => "de_AT",
            Self::DeDe => "de_DE",
            Self::ElGr => "el_GR",
            Self::EnAu => "en_AU",
            Self::EnGb => "en_GB",
            Self::EnUs => "en_US",
            Self::EsEs => "es_ES",
            Self::EsMx => "es_MX",
            Self::FiFi => "fi_FI",
            Self::FrCa => "fr_CA",
            Self::FrFr => "fr_FR",
            Self::HeIl => "he_IL",
            Self::HiIn => "hi_IN",
            Self::HuHu => "hu_HU",
            Self::IdId => "id_ID",
            Self::ItIt => "it_IT",
            Self::JaJp => "ja_JP",
            Self::KoKr => "ko_KR",
            Self::NbNo => "nb_NO",
            Self::NlNl => "nl_NL",
            Self::PlPl => "pl_PL",
            Self::PtBr => "pt_BR",
            Self::PtPt => "pt_PT",
            Self::RoRo => "ro_RO",
            Self::RuRu => "ru_RU",
            Self::SvSe => "sv_SE",
            Self::ThTh => "th_TH",
            Self::TrTr => "tr_TR",
            Self::UkUa => "uk_UA",
            Self::ViVn => "vi_VN",
            Self::ZhCn => "zh_CN",
            Self::ZhHk => "zh_HK",
            Self::ZhTw => "zh_TW",
        }
    }

    /// The language this locale is a variant of
    #[must_use]
    pub const fn language(self) -> Language {
        match self {
            Self::ArXa => Language::Arabic,
            Self::BgBg => Language::Bulgarian,
            Self::CsCz => Language::Czech,
            Self::DaDk => Language::Danish,
            Self::DeAt | Self::DeDe => Language::German,
            Self::ElGr => Language::Greek,
            Self::EnAu | Self::EnGb | Self::EnUs => Language::English,
            Self::EsEs | Self::EsMx => Language::Spanish,
            Self::FiFi => Language::Finnish,
            Self::FrCa => Language::FrenchCanada,
            Self::FrFr => Language::French,
            Self::HeIl => Language::Hebrew,
            Self::HiIn => Language::Hindi,
            Self::HuHu => Language::Hungarian,
            Self::IdId => Language::Indonesian,
            Self::ItIt => Language::Italian,
            Self::JaJp => Language::Japanese,
            Self::KoKr => Language::Korean,
            Self::NbNo => Language::Norwegian,
            Self::NlNl => Language::Dutch,
            Self::PlPl => Language::Polish,
            Self::PtBr => Language::PortugueseBrazil,
            Self::PtPt => Language::PortuguesePortugal,
            Self::RoRo => Language::Romanian,
            Self::RuRu => Language::Russian,
            Self::SvSe => Language::Swedish,
            Self::ThTh => Language::Thai,
            Self::TrTr => Language::Turkish,
            Self::UkUa => Language::Ukrainian,
            Self::ViVn => Language::Vietnamese,
            Self::ZhCn => Language::ChineseSimplified,
            Self::ZhHk => Language::Cantonese,
            Self::ZhTw => Language::ChineseTraditional,
        }
    }

    /// Parse a locale code; both `fr_FR` and `fr-FR` are accepted
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        let normalized = code.replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|audio| audio.code() == normalized)
            .ok_or_else(|| DomainError::UnknownAudioLanguage(code.to_string()))
    }
}

impl fmt::Display for AudioLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<String> for AudioLanguage {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

impl From<AudioLanguage> for String {
    fn from(audio: AudioLanguage) -> Self {
        audio.code().to_string()
    }
}
