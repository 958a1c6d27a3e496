//! Label language selection from an Accept-Language header.

use crate::render::strip_markup;

/// Languages the vocabulary service publishes `prefLabel` entries for.
pub const SUPPORTED_LANGUAGES: [&str; 8] = ["de", "et", "fi", "fr", "pl", "en", "sv-fi", "es"];

/// Language used when the request preference matches nothing supported.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Picks the label language for a request's Accept-Language header value.
///
/// Only the first listed language is considered, truncated to its two-letter
/// primary subtag. Matching against the supported set is byte-exact, so
/// quality weights and regional variants like `sv-FI` fall through to the
/// fallback.
pub fn select_language(accept_language: &str) -> &'static str {
    let sanitized = strip_markup(accept_language);
    let first = sanitized.split(',').next().unwrap_or("");
    let prefix: String = first.chars().take(2).collect();
    SUPPORTED_LANGUAGES
        .iter()
        .copied()
        .find(|&lang| lang == prefix)
        .unwrap_or(FALLBACK_LANGUAGE)
}
