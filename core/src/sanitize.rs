//! Markup Sanitization
//!
//! Feed fields arrive as free-form text that may embed HTML markup.
//! Image tags are always removed - the terminal cannot show them.
//! Whether the remaining markup is passed through verbatim or also
//! stripped is a config decision: pass-through is opt-in via
//! `raw_markup`.

use std::sync::LazyLock;

use regex::Regex;

static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<img .*?>").expect("image tag pattern"));

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^>]*>").expect("markup tag pattern"));

/// Remove `<img ...>` spans, leaving everything else untouched.
#[must_use]
pub fn strip_image_tags(text: &str) -> String {
    IMG_TAG.replace_all(text, "").into_owned()
}

/// Remove all HTML-style tags, image tags included.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    ANY_TAG.replace_all(&strip_image_tags(text), "").into_owned()
}

/// Sanitize one feed field for display. Image tags always go; other
/// markup survives only when `raw_markup` is set.
#[must_use]
pub fn sanitize_field(text: &str, raw_markup: bool) -> String {
    if raw_markup {
        strip_image_tags(text)
    } else {
        strip_tags(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn image_tag_is_stripped() {
        assert_eq!(strip_image_tags(r#"<img src="x.png">Hello"#), "Hello");
    }

    #[test]
    fn multiple_image_tags_are_stripped() {
        assert_eq!(
            strip_image_tags(r#"a<img src="1.png">b<img alt="y" src="2.png">c"#),
            "abc"
        );
    }

    #[test]
    fn image_stripping_is_lazy_per_tag() {
        // Non-greedy: only up to the first '>' goes, the rest stays.
        assert_eq!(strip_image_tags("<img a=1>kept<b>"), "kept<b>");
    }

    #[test]
    fn raw_markup_passes_non_image_tags_through() {
        let field = r#"<img src="x.png"><b>Hello</b>"#;
        assert_eq!(sanitize_field(field, true), "<b>Hello</b>");
    }

    #[test]
    fn default_strips_all_tags() {
        let field = r#"<img src="x.png"><b>Hello</b> <br/>world"#;
        assert_eq!(sanitize_field(field, false), "Hello world");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(sanitize_field("2 < 3 and 4 > 1", false), "2 < 3 and 4 > 1");
    }
}
