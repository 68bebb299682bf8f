//! Inline markdown: images, links, bold and italic.

use std::sync::LazyLock;

use regex::Regex;

use crate::common::string_utils::escape_html;

#[allow(clippy::unwrap_used)]
static IMAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
#[allow(clippy::unwrap_used)]
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
#[allow(clippy::unwrap_used)]
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
#[allow(clippy::unwrap_used)]
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

/// Image-only pattern anchored at the start of a line.
#[allow(clippy::unwrap_used)]
pub(super) static LEADING_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[([^\]]*)\]\(([^)]+)\)").unwrap());

/// `<img>` tag for already-escaped `src` and `alt`.
pub(super) fn img_tag(src: &str, alt: &str) -> String {
    format!(r#"<img src="{src}" alt="{alt}" style="max-width:100%"/>"#)
}

/// Render one text fragment.
///
/// The fragment is escaped first and the substitutions run on the escaped
/// text, so captured URLs and labels are emitted exactly once-escaped.
pub fn render(text: &str) -> String {
    let text = escape_html(text);
    let text = IMAGE.replace_all(&text, |caps: &regex::Captures<'_>| img_tag(&caps[2], &caps[1]));
    let text = LINK.replace_all(&text, |caps: &regex::Captures<'_>| {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            &caps[2], &caps[1]
        )
    });
    let text = BOLD.replace_all(&text, "<strong>${1}</strong>");
    let text = ITALIC.replace_all(&text, "<em>${1}</em>");
    text.into_owned()
}
