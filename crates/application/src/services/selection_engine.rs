//! Selection engine - picks exactly one provider option per request
//!
//! Every selection follows the same walk: compute candidates, fail early if
//! there are none, resolve the preference order, take the first provider in
//! that order that has candidates, then take the first of its entries in
//! catalog order. Audio adds a second walk over genders.
//!
//! Selection is synchronous and reads only the snapshot it is given.

use std::collections::BTreeSet;

use domain::{
    CapabilityEntry, CapabilityKind, DictionaryLookupOption, Gender, Language, Provider, TokenizationOption,
    TransliterationOption, Voice,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::candidate_filter::{self, audio_candidates, for_language, providers_of, restrict_to};
use super::capability_catalog::CatalogSnapshot;
use super::preference::{PreferenceTable, first_viable, resolve_preference};
use crate::error::ApplicationError;

/// Transliteration key flags a MandarinCantonese option must have unset
const MANDARIN_CANTONESE_FLAGS: [&str; 2] = ["tone_numbers", "spaces"];

/// A committed translation choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSelection {
    pub provider: Provider,
    /// Provider-specific id of the source language
    pub source_language_id: String,
    /// Provider-specific id of the target language
    pub target_language_id: String,
}

/// Deterministic first-match-wins selection over a catalog snapshot
#[derive(Debug, Clone, Default)]
pub struct SelectionEngine {
    preferences: PreferenceTable,
}

impl SelectionEngine {
    /// Create an engine walking the given default orders
    pub const fn new(preferences: PreferenceTable) -> Self {
        Self { preferences }
    }

    /// Default orders in use
    #[must_use]
    pub const fn preferences(&self) -> &PreferenceTable {
        &self.preferences
    }

    /// Pick a provider covering both `source` and `target`
    pub fn select_translation(
        &self,
        snapshot: &CatalogSnapshot,
        preferred: Option<Provider>,
        source: Language,
        target: Language,
    ) -> Result<TranslationSelection, ApplicationError> {
        let no_candidate = || {
            ApplicationError::no_candidate(
                CapabilityKind::Translation,
                format!("translation from {source} to {target}"),
            )
        };

        let candidates =
            candidate_filter::translation_candidates(&snapshot.translation_languages, source, target);
        if candidates.is_empty() {
            return Err(no_candidate());
        }

        let provider = self
            .walk(CapabilityKind::Translation, preferred, &candidates.providers)
            .ok_or_else(no_candidate)?;
        let (source_entry, target_entry) = candidates.pair_for(provider).ok_or_else(no_candidate)?;

        debug!(
            %provider,
            source_language_id = %source_entry.language_id,
            target_language_id = %target_entry.language_id,
            "Selected translation option"
        );

        Ok(TranslationSelection {
            provider,
            source_language_id: source_entry.language_id.clone(),
            target_language_id: target_entry.language_id.clone(),
        })
    }

    /// Pick a transliteration option for `language`
    ///
    /// MandarinCantonese offers several romanization variants; only the one
    /// without tone numbers and without spaces is eligible.
    pub fn select_transliteration(
        &self,
        snapshot: &CatalogSnapshot,
        preferred: Option<Provider>,
        language: Language,
    ) -> Result<TransliterationOption, ApplicationError> {
        let no_candidate = || {
            ApplicationError::no_candidate(
                CapabilityKind::Transliteration,
                format!("transliteration of {language}"),
            )
        };

        let candidates = for_language(&snapshot.transliteration_options, language);
        let provider = self
            .select_provider(CapabilityKind::Transliteration, preferred, &candidates)
            .ok_or_else(no_candidate)?;

        let option = restrict_to(&candidates, provider)
            .into_iter()
            .find(|option| {
                provider != Provider::MandarinCantonese
                    || MANDARIN_CANTONESE_FLAGS
                        .iter()
                        .all(|flag| option.flag(flag) == Some(false))
            })
            .ok_or_else(no_candidate)?;

        debug!(%provider, option = %option.name, "Selected transliteration option");
        Ok(option.clone())
    }

    /// Pick a dictionary for `language`
    pub fn select_dictionary(
        &self,
        snapshot: &CatalogSnapshot,
        preferred: Option<Provider>,
        language: Language,
    ) -> Result<DictionaryLookupOption, ApplicationError> {
        let no_candidate = || {
            ApplicationError::no_candidate(
                CapabilityKind::DictionaryLookup,
                format!("dictionary lookup of {language}"),
            )
        };

        let candidates = for_language(&snapshot.dictionary_options, language);
        let provider = self
            .select_provider(CapabilityKind::DictionaryLookup, preferred, &candidates)
            .ok_or_else(no_candidate)?;
        let option = restrict_to(&candidates, provider)
            .into_iter()
            .next()
            .ok_or_else(no_candidate)?;

        debug!(%provider, "Selected dictionary option");
        Ok(option.clone())
    }

    /// Pick a voice for `language`, narrowing by gender once the provider is fixed
    pub fn select_voice(
        &self,
        snapshot: &CatalogSnapshot,
        preferred: Option<Provider>,
        language: Language,
        gender: Option<Gender>,
    ) -> Result<Voice, ApplicationError> {
        let no_candidate = || {
            let detail = match gender {
                Some(gender) => format!("audio pronunciation of {language} ({gender})"),
                None => format!("audio pronunciation of {language}"),
            };
            ApplicationError::no_candidate(CapabilityKind::Audio, detail)
        };

        let candidates = audio_candidates(&snapshot.voices, language);
        let provider = self
            .select_provider(CapabilityKind::Audio, preferred, &candidates)
            .ok_or_else(no_candidate)?;
        let voices = restrict_to(&candidates, provider);

        let present: BTreeSet<Gender> = voices.iter().map(|voice| voice.gender).collect();
        let gender_order = resolve_preference(gender, &Gender::fallback_order());
        let selected_gender = first_viable(&gender_order, &present).ok_or_else(no_candidate)?;

        let voice = voices
            .into_iter()
            .find(|voice| voice.gender == selected_gender)
            .ok_or_else(no_candidate)?;

        debug!(
            %provider,
            gender = %selected_gender,
            voice = %voice.description(),
            "Selected voice"
        );
        Ok(voice.clone())
    }

    /// Pick the first tokenization option for `language`
    pub fn select_tokenization(
        &self,
        snapshot: &CatalogSnapshot,
        language: Language,
    ) -> Result<TokenizationOption, ApplicationError> {
        let option = for_language(&snapshot.tokenization_options, language)
            .into_iter()
            .next()
            .ok_or_else(|| {
                ApplicationError::no_candidate(
                    CapabilityKind::Tokenization,
                    format!("tokenization of {language}"),
                )
            })?;

        debug!(provider = %option.provider, "Selected tokenization option");
        Ok(option.clone())
    }

    /// First provider in preference order that offers any of `candidates`
    fn select_provider<T: CapabilityEntry>(
        &self,
        kind: CapabilityKind,
        preferred: Option<Provider>,
        candidates: &[&T],
    ) -> Option<Provider> {
        if candidates.is_empty() {
            return None;
        }
        self.walk(kind, preferred, &providers_of(candidates))
    }

    fn walk(
        &self,
        kind: CapabilityKind,
        preferred: Option<Provider>,
        viable: &BTreeSet<Provider>,
    ) -> Option<Provider> {
        let order = resolve_preference(preferred, self.preferences.for_kind(kind));
        let selected = first_viable(&order, viable);
        if selected.is_none() {
            debug!(%kind, ?preferred, ?viable, "Preference order exhausted");
        }
        selected
    }
}
