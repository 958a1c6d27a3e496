//! Metadata fetching over HTTP.

mod http;

pub use http::{HttpFetcher, DEFAULT_TIMEOUT};

use crate::Result;

/// Retrieves the JSON-LD description of a rights statement.
///
/// Implementations return the raw response body; interpreting it is the
/// resolver's job. Tests substitute canned bodies through this trait.
pub trait MetadataFetcher {
    fn fetch(&self, uri: &str) -> Result<String>;
}
