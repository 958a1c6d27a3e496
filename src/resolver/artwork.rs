use crate::{BadgeColor, BadgeStyle};

/// Builds the site-relative path of the badge image for a term.
///
/// Buttons exist per term and color. Icons only exist per statement family,
/// so the term is collapsed to its family first, and the blue-type color has
/// no icon artwork at all and falls back to the plain interior variant.
pub fn image_path(
    asset_base: &str,
    style: BadgeStyle,
    color: BadgeColor,
    term_code: &str,
) -> String {
    let (term, infix, color) = match style {
        BadgeStyle::Icon => {
            let color = match color {
                BadgeColor::DarkWhiteInteriorBlueType => BadgeColor::DarkWhiteInterior,
                other => other,
            };
            (icon_category(term_code), "Icon-Only.", color)
        }
        BadgeStyle::Button => (term_code, "", color),
    };
    format!(
        "{}/images/{}/{}.{}{}.png",
        asset_base.trim_end_matches('/'),
        style.dir_name(),
        term,
        infix,
        color.as_str(),
    )
}

/// Collapses a term code to the statement family its icon artwork is named
/// after. The "other" statements share one icon; in-copyright and
/// no-copyright terms share their family icon; anything else maps to itself.
fn icon_category(term_code: &str) -> &str {
    match term_code {
        "CNE" | "UND" | "NKC" => "Other",
        t if t.contains("InC") => "InC",
        t if t.contains("NoC") => "NoC",
        t => t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_path() {
        assert_eq!(
            image_path("", BadgeStyle::Button, BadgeColor::Dark, "InC"),
            "/images/buttons/InC.dark.png"
        );
    }

    #[test]
    fn test_button_keeps_full_term_code() {
        assert_eq!(
            image_path("", BadgeStyle::Button, BadgeColor::White, "InC-OW-EU"),
            "/images/buttons/InC-OW-EU.white.png"
        );
    }

    #[test]
    fn test_icon_path_has_icon_only_infix() {
        assert_eq!(
            image_path("", BadgeStyle::Icon, BadgeColor::Dark, "CNE"),
            "/images/icons/Other.Icon-Only.dark.png"
        );
    }

    #[test]
    fn test_icon_other_category() {
        for term in ["CNE", "UND", "NKC"] {
            assert_eq!(
                image_path("", BadgeStyle::Icon, BadgeColor::White, term),
                "/images/icons/Other.Icon-Only.white.png"
            );
        }
    }

    #[test]
    fn test_icon_family_collapse() {
        for term in ["InC-OC", "InC-EDU", "InC-RUU"] {
            assert_eq!(
                image_path("", BadgeStyle::Icon, BadgeColor::Dark, term),
                "/images/icons/InC.Icon-Only.dark.png"
            );
        }
        for term in ["NoC-CR", "NoC-NC", "NoC-OKLR"] {
            assert_eq!(
                image_path("", BadgeStyle::Icon, BadgeColor::Dark, term),
                "/images/icons/NoC.Icon-Only.dark.png"
            );
        }
    }

    #[test]
    fn test_icon_blue_type_downgraded() {
        assert_eq!(
            image_path(
                "",
                BadgeStyle::Icon,
                BadgeColor::DarkWhiteInteriorBlueType,
                "InC"
            ),
            "/images/icons/InC.Icon-Only.dark-white-interior.png"
        );
    }

    #[test]
    fn test_button_blue_type_not_downgraded() {
        assert_eq!(
            image_path(
                "",
                BadgeStyle::Button,
                BadgeColor::DarkWhiteInteriorBlueType,
                "InC"
            ),
            "/images/buttons/InC.dark-white-interior-blue-type.png"
        );
    }

    #[test]
    fn test_unknown_term_passes_through() {
        assert_eq!(
            image_path("", BadgeStyle::Icon, BadgeColor::Dark, "XYZ"),
            "/images/icons/XYZ.Icon-Only.dark.png"
        );
    }

    #[test]
    fn test_asset_base_prefix() {
        assert_eq!(
            image_path("https://cdn.example.org", BadgeStyle::Button, BadgeColor::Dark, "InC"),
            "https://cdn.example.org/images/buttons/InC.dark.png"
        );
    }

    #[test]
    fn test_asset_base_trailing_slash_normalized() {
        assert_eq!(
            image_path("/assets/", BadgeStyle::Button, BadgeColor::Dark, "InC"),
            "/assets/images/buttons/InC.dark.png"
        );
    }
}
