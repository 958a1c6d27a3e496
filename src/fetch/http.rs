use std::time::Duration;

use crate::error::{Error, Result};
use crate::fetch::MetadataFetcher;

/// The vocabulary service content-negotiates on this exact value, not the
/// registered "application/ld+json" type.
const ACCEPT_JSON_LD: &str = "application/json+ld";

/// Timeout applied to each metadata request, connection setup included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches statement metadata with a blocking HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Fetch(e.to_string()))?;
        Ok(Self { client })
    }
}

impl MetadataFetcher for HttpFetcher {
    fn fetch(&self, uri: &str) -> Result<String> {
        self.client
            .get(uri)
            .header(reqwest::header::ACCEPT, ACCEPT_JSON_LD)
            .send()
            .map_err(|e| Error::Fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::Fetch(e.to_string()))?
            .text()
            .map_err(|e| Error::Fetch(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_construction() {
        assert!(HttpFetcher::new().is_ok());
        assert!(HttpFetcher::with_timeout(Duration::from_secs(1)).is_ok());
    }
}
