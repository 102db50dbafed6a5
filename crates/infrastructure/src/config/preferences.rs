//! Provider preference overrides.

use application::PreferenceTable;
use domain::{CapabilityKind, Provider};
use serde::{Deserialize, Serialize};

/// Optional replacements for the default fallback order of each capability kind
///
/// A kind left unset keeps its built-in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesConfig {
    #[serde(default)]
    pub translation: Option<Vec<Provider>>,
    #[serde(default)]
    pub transliteration: Option<Vec<Provider>>,
    #[serde(default)]
    pub dictionary: Option<Vec<Provider>>,
    #[serde(default)]
    pub audio: Option<Vec<Provider>>,
}

impl PreferencesConfig {
    /// Overrides that are set, paired with their capability kind
    pub fn overrides(&self) -> impl Iterator<Item = (CapabilityKind, &[Provider])> {
        [
            (CapabilityKind::Translation, &self.translation),
            (CapabilityKind::Transliteration, &self.transliteration),
            (CapabilityKind::DictionaryLookup, &self.dictionary),
            (CapabilityKind::Audio, &self.audio),
        ]
        .into_iter()
        .filter_map(|(kind, order)| order.as_deref().map(|order| (kind, order)))
    }

    /// Default table with the configured overrides applied
    #[must_use]
    pub fn to_table(&self) -> PreferenceTable {
        self.overrides()
            .fold(PreferenceTable::default(), |table, (kind, order)| {
                table.with_order(kind, order.to_vec())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overrides_keep_defaults() {
        assert_eq!(
            PreferencesConfig::default().to_table(),
            PreferenceTable::default()
        );
    }

    #[test]
    fn override_replaces_one_kind_only() {
        let config = PreferencesConfig {
            audio: Some(vec![Provider::Google, Provider::Azure]),
            ..PreferencesConfig::default()
        };
        let table = config.to_table();

        assert_eq!(table.audio, vec![Provider::Google, Provider::Azure]);
        assert_eq!(table.translation, PreferenceTable::default().translation);
    }
}
