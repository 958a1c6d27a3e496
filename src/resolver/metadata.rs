use serde::Deserialize;

use crate::error::{Error, Result};

/// The slice of a statement's JSON-LD description the badge needs.
///
/// The service returns many more fields (`definition`, `scopeNote`,
/// `identifier`, ...); everything except the label list is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TermMetadata {
    #[serde(rename = "prefLabel")]
    pub pref_label: Vec<LabelEntry>,
}

/// One localized label from a statement's `prefLabel` list.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LabelEntry {
    #[serde(rename = "@language", default)]
    pub language: String,
    #[serde(rename = "@value", default)]
    pub value: String,
}

impl TermMetadata {
    /// Parses a JSON-LD response body. A body without a `prefLabel` list is
    /// rejected like any other malformed payload.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::MalformedMetadata(e.to_string()))
    }

    /// Returns the label value for a language, or an empty string when no
    /// entry carries that language tag.
    pub fn label_for(&self, language: &str) -> String {
        self.pref_label
            .iter()
            .find(|label| label.language == language)
            .map(|label| label.value.clone())
            .unwrap_or_default()
    }
}
