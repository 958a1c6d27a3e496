//! # rights-badge
//!
//! Resolves rights statement URIs (controlled-vocabulary reuse terms such as
//! the rightsstatements.org vocabulary) into display-ready badge payloads:
//! a linked badge image with localized alt/title text, or a plain-text
//! fallback when the value is not a statement URI or its metadata cannot be
//! fetched.
//!
//! ## Example
//!
//! ```no_run
//! use rights_badge::{BadgeOptions, BadgeResolver, HttpFetcher};
//!
//! let resolver = BadgeResolver::new(HttpFetcher::new().unwrap());
//! let result = resolver.resolve(
//!     "https://rightsstatements.org/vocab/InC/1.0/",
//!     &BadgeOptions::default(),
//!     "en",
//! );
//! println!("{:?}", result);
//! ```

pub mod error;
pub mod fetch;
pub mod language;
pub mod render;
pub mod resolver;

pub use error::{Error, Result};
pub use fetch::{HttpFetcher, MetadataFetcher};
pub use render::{HtmlRenderer, Renderer};
pub use resolver::{BadgeResolver, ParsedStatement};

use serde::Serialize;
use std::str::FromStr;

/// Options for badge presentation.
#[derive(Debug, Clone)]
pub struct BadgeOptions {
    /// Whether to render a small icon or a large button.
    pub style: BadgeStyle,
    /// Colour scheme of the badge artwork.
    pub color: BadgeColor,
    /// Height in pixels for the rendered badge image.
    pub image_height_px: u32,
}

impl Default for BadgeOptions {
    fn default() -> Self {
        Self {
            style: BadgeStyle::Button,
            color: BadgeColor::Dark,
            image_height_px: 31,
        }
    }
}

/// Specifies which artwork family a badge is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    /// Small icon without text.
    Icon,
    /// Large button with the statement name in the artwork.
    Button,
}

impl BadgeStyle {
    /// Directory segment under `images/` holding this style's artwork.
    pub fn dir_name(self) -> &'static str {
        match self {
            BadgeStyle::Icon => "icons",
            BadgeStyle::Button => "buttons",
        }
    }
}

impl FromStr for BadgeStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "icons" => Ok(BadgeStyle::Icon),
            "buttons" => Ok(BadgeStyle::Button),
            other => Err(Error::UnknownStyle(other.to_string())),
        }
    }
}

/// Colour scheme of the badge artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    /// Black with transparent icon interior.
    Dark,
    /// All white.
    White,
    /// Black with white icon interior.
    DarkWhiteInterior,
    /// Black with blue type (button artwork only).
    DarkWhiteInteriorBlueType,
}

impl BadgeColor {
    /// Filename segment for this colour scheme.
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeColor::Dark => "dark",
            BadgeColor::White => "white",
            BadgeColor::DarkWhiteInterior => "dark-white-interior",
            BadgeColor::DarkWhiteInteriorBlueType => "dark-white-interior-blue-type",
        }
    }
}

impl FromStr for BadgeColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dark" => Ok(BadgeColor::Dark),
            "white" => Ok(BadgeColor::White),
            "dark-white-interior" => Ok(BadgeColor::DarkWhiteInterior),
            "dark-white-interior-blue-type" => Ok(BadgeColor::DarkWhiteInteriorBlueType),
            other => Err(Error::UnknownColor(other.to_string())),
        }
    }
}

/// Outcome of resolving one field value. Exactly one variant per resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BadgeResult {
    /// The value rendered as text: the escaped sanitized input when it is not
    /// a vocabulary URI, or the raw sanitized URI when metadata could not be
    /// fetched.
    PlainText {
        text: String,
    },
    /// A resolved badge: linked image with localized labels.
    Badge {
        /// Path to the badge artwork (`<base>/images/<style>/<term>...png`).
        image_path: String,
        /// Localized label for the image alt text; empty if no label matched.
        alt_text: String,
        /// Localized label for the tooltip; always equals `alt_text`.
        title_text: String,
        /// The sanitized statement URI the badge links to.
        link_url: String,
        /// Whether the link opens in a new browsing context.
        open_in_new_tab: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = BadgeOptions::default();
        assert_eq!(options.style, BadgeStyle::Button);
        assert_eq!(options.color, BadgeColor::Dark);
        assert_eq!(options.image_height_px, 31);
    }

    #[test]
    fn test_style_from_setting_string() {
        assert_eq!("icons".parse::<BadgeStyle>().unwrap(), BadgeStyle::Icon);
        assert_eq!("buttons".parse::<BadgeStyle>().unwrap(), BadgeStyle::Button);
        assert!("icon".parse::<BadgeStyle>().is_err());
    }

    #[test]
    fn test_color_from_setting_string() {
        assert_eq!("dark".parse::<BadgeColor>().unwrap(), BadgeColor::Dark);
        assert_eq!(
            "dark-white-interior-blue-type".parse::<BadgeColor>().unwrap(),
            BadgeColor::DarkWhiteInteriorBlueType
        );
        assert!("blue".parse::<BadgeColor>().is_err());
    }

    #[test]
    fn test_badge_result_json_tags() {
        let plain = BadgeResult::PlainText {
            text: "no statement".to_string(),
        };
        let json = serde_json::to_string(&plain).unwrap();
        assert!(json.contains("\"kind\":\"plain_text\""));
    }
}
