//! Domain entities

mod breakdown;
mod capability_options;
mod voice;

pub use breakdown::BreakdownEntry;
pub use capability_options::{
    CapabilityEntry, DictionaryLookupOption, TokenizationOption, TranslationLanguageEntry,
    TransliterationOption,
};
pub use voice::{OptionValue, Voice, VoiceOption, VoiceOptions};
