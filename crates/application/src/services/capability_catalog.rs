//! Capability catalog - snapshot of what every provider can do
//!
//! `refresh` queries every registered provider's listing operations and
//! swaps in a complete new snapshot. Readers always see a self-consistent
//! snapshot, never a half-populated one.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use domain::{
    CapabilityEntry, DictionaryLookupOption, Provider, TokenizationOption, TranslationLanguageEntry,
    TransliterationOption, Voice,
};
use futures::future::join_all;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::ports::{ProviderCatalog, ProviderError};

/// Immutable view of all provider capabilities at one point in time
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub translation_languages: Vec<TranslationLanguageEntry>,
    pub transliteration_options: Vec<TransliterationOption>,
    pub dictionary_options: Vec<DictionaryLookupOption>,
    pub tokenization_options: Vec<TokenizationOption>,
    pub voices: Vec<Voice>,
    /// When the snapshot was built; `None` until the first refresh
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl CatalogSnapshot {
    /// Whether the snapshot holds no entries at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translation_languages.is_empty()
            && self.transliteration_options.is_empty()
            && self.dictionary_options.is_empty()
            && self.tokenization_options.is_empty()
            && self.voices.is_empty()
    }

    /// Number of entries of any kind contributed by each provider
    #[must_use]
    pub fn entry_counts(&self) -> BTreeMap<Provider, usize> {
        let mut counts = BTreeMap::new();
        let providers = self
            .translation_languages
            .iter()
            .map(CapabilityEntry::provider)
            .chain(self.transliteration_options.iter().map(CapabilityEntry::provider))
            .chain(self.dictionary_options.iter().map(CapabilityEntry::provider))
            .chain(self.tokenization_options.iter().map(CapabilityEntry::provider))
            .chain(self.voices.iter().map(CapabilityEntry::provider));
        for provider in providers {
            *counts.entry(provider).or_insert(0) += 1;
        }
        counts
    }
}

/// A provider whose listing failed during a refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFailure {
    pub provider: Provider,
    pub error: ProviderError,
}

/// Outcome of a refresh cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Providers whose capabilities are in the new snapshot
    pub loaded: Vec<Provider>,
    /// Providers that contribute nothing until the next refresh
    pub failures: Vec<ProviderFailure>,
}

impl RefreshReport {
    /// Whether at least one provider failed to list its capabilities
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Everything one provider advertised during a refresh
#[derive(Default)]
struct ProviderCapabilities {
    translation_languages: Vec<TranslationLanguageEntry>,
    transliteration_options: Vec<TransliterationOption>,
    dictionary_options: Vec<DictionaryLookupOption>,
    tokenization_options: Vec<TokenizationOption>,
    voices: Vec<Voice>,
}

/// Holds the current capability snapshot and rebuilds it from the provider catalog
pub struct CapabilityCatalog {
    source: Arc<dyn ProviderCatalog>,
    snapshot: ArcSwap<CatalogSnapshot>,
    /// Held for a whole refresh so an older listing never replaces a newer one
    refresh_lock: Mutex<()>,
}

impl fmt::Debug for CapabilityCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot.load();
        f.debug_struct("CapabilityCatalog")
            .field("providers", &self.source.providers())
            .field("refreshed_at", &snapshot.refreshed_at)
            .finish_non_exhaustive()
    }
}

impl CapabilityCatalog {
    /// Create a catalog with an empty snapshot; call [`Self::refresh`] to populate it
    pub fn new(source: Arc<dyn ProviderCatalog>) -> Self {
        Self::with_snapshot(source, CatalogSnapshot::default())
    }

    /// Create a catalog seeded with an existing snapshot
    pub fn with_snapshot(source: Arc<dyn ProviderCatalog>, snapshot: CatalogSnapshot) -> Self {
        Self {
            source,
            snapshot: ArcSwap::from_pointee(snapshot),
            refresh_lock: Mutex::new(()),
        }
    }

    /// The provider catalog this snapshot is built from
    #[must_use]
    pub fn source(&self) -> Arc<dyn ProviderCatalog> {
        Arc::clone(&self.source)
    }

    /// Current snapshot
    #[must_use]
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.snapshot.load_full()
    }

    /// All translation languages, in provider registration order
    #[must_use]
    pub fn translation_languages(&self) -> Vec<TranslationLanguageEntry> {
        self.snapshot.load().translation_languages.clone()
    }

    /// All transliteration options, in provider registration order
    #[must_use]
    pub fn transliteration_options(&self) -> Vec<TransliterationOption> {
        self.snapshot.load().transliteration_options.clone()
    }

    /// All dictionary options, in provider registration order
    #[must_use]
    pub fn dictionary_options(&self) -> Vec<DictionaryLookupOption> {
        self.snapshot.load().dictionary_options.clone()
    }

    /// All tokenization options, in provider registration order
    #[must_use]
    pub fn tokenization_options(&self) -> Vec<TokenizationOption> {
        self.snapshot.load().tokenization_options.clone()
    }

    /// All voices, in provider registration order
    #[must_use]
    pub fn voices(&self) -> Vec<Voice> {
        self.snapshot.load().voices.clone()
    }

    /// Rebuild the snapshot from every registered provider
    ///
    /// A provider whose listing fails contributes no entries this cycle;
    /// the failure is logged and reported but never aborts the refresh.
    /// Concurrent refreshes run one after another.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> RefreshReport {
        let _guard = self.refresh_lock.lock().await;
        let providers = self.source.providers();
        let results = join_all(providers.iter().map(|&provider| self.fetch(provider))).await;

        let mut snapshot = CatalogSnapshot::default();
        let mut report = RefreshReport::default();

        for (provider, result) in providers.into_iter().zip(results) {
            match result {
                Ok(capabilities) => {
                    snapshot
                        .translation_languages
                        .extend(capabilities.translation_languages);
                    snapshot
                        .transliteration_options
                        .extend(capabilities.transliteration_options);
                    snapshot
                        .dictionary_options
                        .extend(capabilities.dictionary_options);
                    snapshot
                        .tokenization_options
                        .extend(capabilities.tokenization_options);
                    snapshot.voices.extend(capabilities.voices);
                    report.loaded.push(provider);
                },
                Err(error) => {
                    warn!(%provider, %error, "Provider capability listing failed, skipping for this cycle");
                    report.failures.push(ProviderFailure { provider, error });
                },
            }
        }

        snapshot.refreshed_at = Some(Utc::now());

        info!(
            loaded = report.loaded.len(),
            failed = report.failures.len(),
            translation_languages = snapshot.translation_languages.len(),
            transliteration_options = snapshot.transliteration_options.len(),
            dictionary_options = snapshot.dictionary_options.len(),
            tokenization_options = snapshot.tokenization_options.len(),
            voices = snapshot.voices.len(),
            "Capability catalog refreshed"
        );

        self.snapshot.store(Arc::new(snapshot));
        report
    }

    async fn fetch(&self, provider: Provider) -> Result<ProviderCapabilities, ProviderError> {
        let source = &self.source;
        let (translation_languages, transliteration_options, dictionary_options, tokenization_options, voices) =
            futures::try_join!(
                source.list_translation_languages(provider),
                source.list_transliteration_options(provider),
                source.list_dictionary_options(provider),
                source.list_tokenization_options(provider),
                source.list_voices(provider),
            )?;

        Ok(ProviderCapabilities {
            translation_languages: owned_by(provider, translation_languages),
            transliteration_options: owned_by(provider, transliteration_options),
            dictionary_options: owned_by(provider, dictionary_options),
            tokenization_options: owned_by(provider, tokenization_options),
            voices: owned_by(provider, voices),
        })
    }
}

/// Drop entries a provider listed on behalf of some other provider
fn owned_by<T: CapabilityEntry>(provider: Provider, entries: Vec<T>) -> Vec<T> {
    let total = entries.len();
    let owned: Vec<T> = entries
        .into_iter()
        .filter(|entry| entry.provider() == provider)
        .collect();
    if owned.len() != total {
        debug!(
            %provider,
            dropped = total - owned.len(),
            "Ignoring entries attributed to another provider"
        );
    }
    owned
}
