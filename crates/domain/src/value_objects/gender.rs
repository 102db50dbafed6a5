//! Voice gender value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of a text-to-speech voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    /// Neutral voices, or voices the provider does not classify
    Any,
}

impl Gender {
    /// Fallback order applied after the caller's requested gender
    #[must_use]
    pub const fn fallback_order() -> [Self; 3] {
        [Self::Female, Self::Male, Self::Any]
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Any => "Any",
        };
        write!(f, "{label}")
    }
}
