//! Provider preference ordering
//!
//! Each capability kind has a fixed default fallback order. A caller may
//! name a preferred provider, which is then tried first. Nothing here
//! mutates the defaults; every call builds a fresh list.

use std::collections::BTreeSet;

use domain::{CapabilityKind, Provider};
use serde::{Deserialize, Serialize};

/// Default fallback order per capability kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceTable {
    pub translation: Vec<Provider>,
    pub transliteration: Vec<Provider>,
    pub dictionary: Vec<Provider>,
    pub audio: Vec<Provider>,
}

impl Default for PreferenceTable {
    fn default() -> Self {
        Self {
            translation: vec![
                Provider::DeepL,
                Provider::Azure,
                Provider::Google,
                Provider::Amazon,
                Provider::Watson,
            ],
            transliteration: vec![
                // in case input text is chinese
                Provider::MandarinCantonese,
                Provider::EasyPronunciation,
                Provider::Azure,
                Provider::PyThaiNLP,
            ],
            dictionary: vec![Provider::Wenlin, Provider::Azure],
            audio: vec![
                Provider::Azure,
                Provider::Amazon,
                Provider::Google,
                Provider::Watson,
                Provider::Naver,
                Provider::CereProc,
                Provider::VocalWare,
                Provider::FptAi,
            ],
        }
    }
}

impl PreferenceTable {
    /// Default order for `kind`
    ///
    /// Tokenization has no preference order; the first option wins.
    #[must_use]
    pub fn for_kind(&self, kind: CapabilityKind) -> &[Provider] {
        match kind {
            CapabilityKind::Translation => &self.translation,
            CapabilityKind::Transliteration => &self.transliteration,
            CapabilityKind::DictionaryLookup => &self.dictionary,
            CapabilityKind::Audio => &self.audio,
            CapabilityKind::Tokenization => &[],
        }
    }

    /// Replace the default order for `kind`
    #[must_use]
    pub fn with_order(mut self, kind: CapabilityKind, order: Vec<Provider>) -> Self {
        match kind {
            CapabilityKind::Translation => self.translation = order,
            CapabilityKind::Transliteration => self.transliteration = order,
            CapabilityKind::DictionaryLookup => self.dictionary = order,
            CapabilityKind::Audio => self.audio = order,
            CapabilityKind::Tokenization => {},
        }
        self
    }
}

/// Ordered list to walk: the explicit preference first, then the defaults
pub fn resolve_preference<T: Copy>(explicit: Option<T>, defaults: &[T]) -> Vec<T> {
    explicit.into_iter().chain(defaults.iter().copied()).collect()
}

/// First entry of `order` present in `viable`
pub fn first_viable<T: Copy + Ord>(order: &[T], viable: &BTreeSet<T>) -> Option<T> {
    order.iter().copied().find(|item| viable.contains(item))
}
