//! Candidate filters - which catalog entries can serve a request
//!
//! Pure functions over snapshot slices. Each returns the matching entries in
//! catalog order; an empty result is not an error here, the selection
//! engine decides what an empty candidate set means.

use std::collections::BTreeSet;

use domain::{CapabilityEntry, Language, Provider, TranslationLanguageEntry, Voice};

/// Translation candidates for one language pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationCandidates<'a> {
    /// Entries covering the source language
    pub source: Vec<&'a TranslationLanguageEntry>,
    /// Entries covering the target language
    pub target: Vec<&'a TranslationLanguageEntry>,
    /// Providers covering both sides
    pub providers: BTreeSet<Provider>,
}

impl<'a> TranslationCandidates<'a> {
    /// Whether no provider covers both languages
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// The first source and target entries of `provider`, each keeping its own id
    #[must_use]
    pub fn pair_for(
        &self,
        provider: Provider,
    ) -> Option<(&'a TranslationLanguageEntry, &'a TranslationLanguageEntry)> {
        let source = self.source.iter().find(|e| e.provider == provider)?;
        let target = self.target.iter().find(|e| e.provider == provider)?;
        Some((*source, *target))
    }
}

/// Providers offering both `source` and `target`
pub fn translation_candidates(
    entries: &[TranslationLanguageEntry],
    source: Language,
    target: Language,
) -> TranslationCandidates<'_> {
    let source_entries = for_language(entries, source);
    let target_entries = for_language(entries, target);

    let source_providers = providers_of(&source_entries);
    let target_providers = providers_of(&target_entries);
    let providers = source_providers
        .intersection(&target_providers)
        .copied()
        .collect();

    TranslationCandidates {
        source: source_entries,
        target: target_entries,
        providers,
    }
}

/// Entries covering `language`
///
/// Serves transliteration, dictionary and tokenization candidates alike.
pub fn for_language<T: CapabilityEntry>(entries: &[T], language: Language) -> Vec<&T> {
    entries
        .iter()
        .filter(|entry| entry.language() == language)
        .collect()
}

/// Voices speaking the default audio locale of `language`
///
/// Languages without a default locale have no audio candidates.
pub fn audio_candidates(voices: &[Voice], language: Language) -> Vec<&Voice> {
    let Some(audio_language) = language.default_audio_language() else {
        return Vec::new();
    };
    voices
        .iter()
        .filter(|voice| voice.audio_language == audio_language)
        .collect()
}

/// Distinct providers among `entries`
pub fn providers_of<T: CapabilityEntry>(entries: &[&T]) -> BTreeSet<Provider> {
    entries.iter().map(|entry| entry.provider()).collect()
}

/// Entries belonging to `provider`, order preserved
pub fn restrict_to<'a, T: CapabilityEntry>(entries: &[&'a T], provider: Provider) -> Vec<&'a T> {
    entries
        .iter()
        .copied()
        .filter(|entry| entry.provider() == provider)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{AudioLanguage, DictionaryLookupOption, Gender};
    use serde_json::json;

    fn entries() -> Vec<TranslationLanguageEntry> {
        vec![
            TranslationLanguageEntry::new(Provider::Azure, Language::French, "fr"),
            TranslationLanguageEntry::new(Provider::Azure, Language::English, "en"),
            TranslationLanguageEntry::new(Provider::DeepL, Language::French, "FR"),
            TranslationLanguageEntry::new(Provider::DeepL, Language::English, "EN-US"),
            TranslationLanguageEntry::new(Provider::Watson, Language::French, "fr"),
            TranslationLanguageEntry::new(Provider::Google, Language::English, "en"),
        ]
    }

    #[test]
    fn translation_requires_both_sides() {
        let entries = entries();
        let candidates = translation_candidates(&entries, Language::French, Language::English);

        assert_eq!(
            candidates.providers,
            BTreeSet::from([Provider::Azure, Provider::DeepL])
        );
        assert_eq!(candidates.source.len(), 3);
        assert_eq!(candidates.target.len(), 3);
    }

    #[test]
    fn pair_for_keeps_provider_specific_ids() {
        let entries = entries();
        let candidates = translation_candidates(&entries, Language::French, Language::English);

        let (source, target) = candidates.pair_for(Provider::DeepL).unwrap();
        assert_eq!(source.language_id, "FR");
        assert_eq!(target.language_id, "EN-US");
        assert!(candidates.pair_for(Provider::Watson).is_none());
    }

    #[test]
    fn translation_without_overlap_is_empty() {
        let entries = entries();
        let candidates = translation_candidates(&entries, Language::French, Language::Japanese);
        assert!(candidates.is_empty());
    }

    #[test]
    fn for_language_keeps_catalog_order() {
        let options = vec![
            DictionaryLookupOption::new(Provider::Azure, Language::ChineseSimplified, json!(1)),
            DictionaryLookupOption::new(Provider::Azure, Language::French, json!(2)),
            DictionaryLookupOption::new(Provider::Wenlin, Language::ChineseSimplified, json!(3)),
        ];

        let matches = for_language(&options, Language::ChineseSimplified);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].lookup_key, json!(1));
        assert_eq!(matches[1].lookup_key, json!(3));
    }

    #[test]
    fn audio_candidates_use_default_locale_only() {
        let voices = vec![
            Voice::new(Provider::Azure, AudioLanguage::EnUs, "Aria", Gender::Female, json!(1)),
            Voice::new(Provider::Azure, AudioLanguage::EnGb, "Libby", Gender::Female, json!(2)),
            Voice::new(Provider::Google, AudioLanguage::EnUs, "Wavenet-B", Gender::Male, json!(3)),
        ];

        let matches = audio_candidates(&voices, Language::English);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|v| v.audio_language == AudioLanguage::EnUs));
    }

    #[test]
    fn audio_candidates_empty_without_default_locale() {
        let voices = vec![Voice::new(
            Provider::Azure,
            AudioLanguage::ItIt,
            "Elsa",
            Gender::Female,
            json!(1),
        )];
        assert!(audio_candidates(&voices, Language::Latin).is_empty());
    }

    #[test]
    fn restrict_to_filters_by_provider() {
        let entries = entries();
        let french = for_language(&entries, Language::French);
        let azure = restrict_to(&french, Provider::Azure);
        assert_eq!(azure.len(), 1);
        assert_eq!(azure[0].language_id, "fr");
    }
}
