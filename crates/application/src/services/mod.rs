//! Application services - selection engine and its collaborators

pub mod candidate_filter;
mod capability_catalog;
mod language_tools_service;
mod preference;
mod request_dispatcher;
mod selection_engine;

pub use capability_catalog::{CapabilityCatalog, CatalogSnapshot, ProviderFailure, RefreshReport};
pub use language_tools_service::{
    LANGUAGE_DETECTION_PROVIDER, LanguageToolsService, SPEECH_RECOGNITION_PROVIDER, SynthesizedAudio,
};
pub use preference::{PreferenceTable, first_viable, resolve_preference};
pub use request_dispatcher::{DEFAULT_REQUEST_TIMEOUT, RequestDispatcher};
pub use selection_engine::{SelectionEngine, TranslationSelection};
