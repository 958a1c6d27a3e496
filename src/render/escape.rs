pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Removes `<...>` tag spans from the input, keeping the text between them.
///
/// An unterminated `<` discards the rest of the string. A `>` outside a tag
/// is kept as ordinary text.
pub fn strip_markup(value: &str) -> String {
    let mut stripped = String::with_capacity(value.len());
    let mut in_tag = false;
    for ch in value.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => stripped.push(ch),
            _ => {}
        }
    }
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a\"b<c>d&e'"), "a&quot;b&lt;c&gt;d&amp;e&#39;");
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("In Copyright"), "In Copyright");
    }

    #[test]
    fn test_strip_markup_removes_tags() {
        assert_eq!(
            strip_markup("<a href=\"x\">http://example.org</a>"),
            "http://example.org"
        );
    }

    #[test]
    fn test_strip_markup_nested_text_kept() {
        assert_eq!(strip_markup("a<b>c</b>d"), "acd");
    }

    #[test]
    fn test_strip_markup_unterminated_tag_discards_rest() {
        assert_eq!(strip_markup("abc<def"), "abc");
    }

    #[test]
    fn test_strip_markup_bare_gt_kept() {
        assert_eq!(strip_markup("a>b"), "a>b");
    }

    #[test]
    fn test_strip_markup_plain_text_unchanged() {
        assert_eq!(
            strip_markup("http://rightsstatements.org/vocab/InC/1.0/"),
            "http://rightsstatements.org/vocab/InC/1.0/"
        );
    }
}
