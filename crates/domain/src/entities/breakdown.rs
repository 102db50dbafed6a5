//! Sentence breakdown entity

use serde::{Deserialize, Serialize};

/// One token of a sentence breakdown, as returned by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub token: String,
    #[serde(default)]
    pub lemma: Option<String>,
    pub transliteration: String,
    pub translation: String,
    #[serde(default)]
    pub pos_description: Option<String>,
}

impl BreakdownEntry {
    /// Render as `token: [/lemma ]transliteration, translation[ (pos)]`
    ///
    /// The lemma is only shown when it differs from the token.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut line = format!("{}: ", self.token);
        if let Some(lemma) = self.lemma.as_deref().filter(|lemma| *lemma != self.token) {
            line.push('/');
            line.push_str(lemma);
            line.push(' ');
        }
        line.push_str(&self.transliteration);
        line.push_str(", ");
        line.push_str(&self.translation);
        if let Some(pos) = &self.pos_description {
            line.push_str(" (");
            line.push_str(pos);
            line.push(')');
        }
        line
    }
}
