mod escape;
mod html;

use crate::BadgeResult;

pub use escape::{escape_html, strip_markup};
pub use html::HtmlRenderer;

pub trait Renderer {
    fn render(&self, result: &BadgeResult) -> String;
}
