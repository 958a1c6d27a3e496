use url::Url;

use crate::render::strip_markup;

const VOCAB_MARKER: &str = "/vocab/";

/// Published statement URIs end in a version segment like "/1.0/".
const VERSION_SUFFIX_LEN: usize = 5;

/// A sanitized rights statement URI and the term code extracted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStatement {
    /// The input with markup removed and surrounding whitespace trimmed.
    pub raw_uri: String,
    /// The vocabulary term code, or `None` when the input is not a
    /// vocabulary URI.
    pub term_code: Option<String>,
}

impl ParsedStatement {
    /// Sanitizes the input and extracts its vocabulary term code.
    pub fn parse(input: &str) -> Self {
        let raw_uri = strip_markup(input).trim().to_string();
        let term_code = extract_term_code(&raw_uri);
        Self { raw_uri, term_code }
    }

    /// Whether the sanitized input identifies a vocabulary term.
    pub fn is_valid_vocabulary_uri(&self) -> bool {
        self.term_code.is_some()
    }
}

/// Extracts the term code from a vocabulary URI.
///
/// The code is everything between the `/vocab/` marker and the trailing
/// version segment, e.g. `"InC"` out of
/// `http://rightsstatements.org/vocab/InC/1.0/`.
fn extract_term_code(uri: &str) -> Option<String> {
    if Url::parse(uri).is_err() {
        return None;
    }
    let start = uri.find(VOCAB_MARKER)? + VOCAB_MARKER.len();
    Some(strip_version_suffix(&uri[start..]).to_string())
}

fn strip_version_suffix(terms: &str) -> &str {
    match terms.char_indices().rev().nth(VERSION_SUFFIX_LEN - 1) {
        Some((idx, _)) => &terms[..idx],
        None => "",
    }
}
