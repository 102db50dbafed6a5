//! Value objects - closed sets of identifiers shared by every provider

mod audio_format;
mod audio_language;
mod capability_kind;
mod gender;
mod language;
mod provider;

pub use audio_format::{AUDIO_FORMAT_PARAMETER, AudioFormat};
pub use audio_language::AudioLanguage;
pub use capability_kind::CapabilityKind;
pub use gender::Gender;
pub use language::Language;
pub use provider::Provider;
