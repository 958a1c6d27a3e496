//! Resolution pipeline from a raw URI to a badge or plain-text fallback.

mod artwork;
mod metadata;
mod statement;

pub use artwork::image_path;
pub use metadata::{LabelEntry, TermMetadata};
pub use statement::ParsedStatement;

use crate::error::{Error, Result};
use crate::fetch::MetadataFetcher;
use crate::language::select_language;
use crate::render::escape_html;
use crate::{BadgeOptions, BadgeResult};

/// Resolves rights statement URIs into displayable badges.
///
/// Resolution never fails: inputs that are not vocabulary URIs come back as
/// escaped plain text without any network traffic, and fetch or metadata
/// problems degrade to the sanitized URI itself.
pub struct BadgeResolver<F: MetadataFetcher> {
    fetcher: F,
    asset_base: String,
}

impl<F: MetadataFetcher> BadgeResolver<F> {
    /// Creates a resolver producing site-relative image paths.
    pub fn new(fetcher: F) -> Self {
        Self::with_asset_base(fetcher, "")
    }

    /// Creates a resolver prefixing image paths with `asset_base`.
    pub fn with_asset_base(fetcher: F, asset_base: impl Into<String>) -> Self {
        Self {
            fetcher,
            asset_base: asset_base.into(),
        }
    }

    /// Resolves one URI into a badge, falling back to plain text when the
    /// input is invalid or the statement metadata is unavailable.
    pub fn resolve(
        &self,
        uri: &str,
        options: &BadgeOptions,
        accept_language: &str,
    ) -> BadgeResult {
        let statement = ParsedStatement::parse(uri);
        match self.resolve_statement(&statement, options, accept_language) {
            Ok(result) => result,
            Err(Error::InvalidUri(_)) => BadgeResult::PlainText {
                text: escape_html(&statement.raw_uri),
            },
            Err(e) => {
                tracing::warn!("Failed to resolve badge for {}: {}", statement.raw_uri, e);
                BadgeResult::PlainText {
                    text: statement.raw_uri.clone(),
                }
            }
        }
    }

    /// Resolves each URI in order. Values sharing a URI are fetched once
    /// each; the service response is not cached across items.
    pub fn resolve_all<I, S>(
        &self,
        uris: I,
        options: &BadgeOptions,
        accept_language: &str,
    ) -> Vec<BadgeResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        uris.into_iter()
            .map(|uri| self.resolve(uri.as_ref(), options, accept_language))
            .collect()
    }

    fn resolve_statement(
        &self,
        statement: &ParsedStatement,
        options: &BadgeOptions,
        accept_language: &str,
    ) -> Result<BadgeResult> {
        let term_code = statement
            .term_code
            .as_deref()
            .ok_or_else(|| Error::InvalidUri(statement.raw_uri.clone()))?;

        let image_path = image_path(&self.asset_base, options.style, options.color, term_code);

        let body = self.fetcher.fetch(&statement.raw_uri)?;
        let metadata = TermMetadata::from_json(&body)?;
        let language = select_language(accept_language);
        let label = metadata.label_for(language);

        Ok(BadgeResult::Badge {
            image_path,
            alt_text: label.clone(),
            title_text: label,
            link_url: statement.raw_uri.clone(),
            open_in_new_tab: true,
        })
    }
}
