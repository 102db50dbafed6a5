//! Domain layer for cloud language tools
//!
//! Contains the closed sets of languages, audio locales, providers and
//! genders, plus the capability entries every provider advertises.
//! This layer performs no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod queries;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use queries::{AudioQuery, BreakdownQuery, DictionaryQuery, TranslateQuery, TransliterateQuery};
pub use value_objects::*;
