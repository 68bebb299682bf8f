//! String utility functions for common text manipulation operations.
//!
//! Provides HTML escaping and slug generation used by the renderer, the
//! page assembler and the article scaffolder.

/// Maximum length of a generated slug, in characters
pub const MAX_SLUG_LEN: usize = 80;

/// Escape the five HTML-reserved characters.
///
/// Safe for both element text and quoted attribute values.
///
/// # Examples
/// ```ignore
/// assert_eq!(escape_html(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Derive a filename-safe slug from a title.
///
/// Lowercases, drops everything except ASCII letters, digits, whitespace and
/// `-`, turns whitespace runs into `-`, collapses repeated `-`, strips one
/// leading and one trailing `-` and truncates to [`MAX_SLUG_LEN`].
///
/// # Examples
/// ```ignore
/// assert_eq!(slugify("  Hello, World!  "), "hello-world");
/// ```
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
            continue;
        }
        if pending_space {
            push_hyphen(&mut slug);
            pending_space = false;
        }
        if c == '-' {
            push_hyphen(&mut slug);
        } else {
            slug.push(c);
        }
    }
    if pending_space {
        push_hyphen(&mut slug);
    }

    let slug = slug.strip_prefix('-').unwrap_or(&slug);
    let slug = slug.strip_suffix('-').unwrap_or(slug);
    slug.chars().take(MAX_SLUG_LEN).collect()
}

fn push_hyphen(slug: &mut String) {
    if !slug.ends_with('-') {
        slug.push('-');
    }
}
