use crate::render::escape::escape_html;
use crate::render::Renderer;
use crate::BadgeResult;

/// Renders a resolved badge as an HTML fragment.
///
/// A badge becomes a link wrapping the badge image; a plain-text fallback is
/// emitted as-is, since the resolver has already escaped any text that needs
/// escaping.
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer {
    image_height_px: u32,
}

impl HtmlRenderer {
    pub fn new(image_height_px: u32) -> Self {
        Self { image_height_px }
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, result: &BadgeResult) -> String {
        match result {
            BadgeResult::PlainText { text } => text.clone(),
            BadgeResult::Badge {
                image_path,
                alt_text,
                title_text,
                link_url,
                open_in_new_tab,
            } => {
                let target = if *open_in_new_tab {
                    " target=\"_blank\""
                } else {
                    ""
                };
                format!(
                    "<a href=\"{}\"{}><img src=\"{}\" alt=\"{}\" height=\"{}\" title=\"{}\"/></a>",
                    escape_html(link_url),
                    target,
                    escape_html(image_path),
                    escape_html(alt_text),
                    self.image_height_px,
                    escape_html(title_text),
                )
            }
        }
    }
}
