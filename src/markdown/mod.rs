//! Line-oriented markdown to HTML renderer.
//!
//! Supports a fixed subset: `#`..`###` headings, `-`/`*` unordered lists,
//! standalone image lines and paragraphs, with inline images, links, bold
//! and italic. Anything else (nested lists, quotes, code, tables, ordered
//! lists) renders as paragraph text.

mod inline;

use std::sync::LazyLock;

use regex::Regex;

use crate::common::string_utils::escape_html;

#[allow(clippy::unwrap_used)]
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,3})\s+(.*)$").unwrap());
#[allow(clippy::unwrap_used)]
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-*]\s+(.*)$").unwrap());

/// What a single source line starts.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Heading { level: usize, text: &'a str },
    ListItem(&'a str),
    Image { alt: &'a str, src: &'a str },
    Text(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if line.trim().is_empty() {
            return Line::Blank;
        }
        if let Some(caps) = HEADING.captures(line) {
            let (Some(marks), Some(text)) = (caps.get(1), caps.get(2)) else {
                return Line::Text(line);
            };
            return Line::Heading {
                level: marks.as_str().len(),
                text: text.as_str(),
            };
        }
        if let Some(text) = LIST_ITEM.captures(line).and_then(|caps| caps.get(1)) {
            return Line::ListItem(text.as_str());
        }
        if let Some(caps) = inline::LEADING_IMAGE.captures(line) {
            if let (Some(whole), Some(alt), Some(src)) = (caps.get(0), caps.get(1), caps.get(2)) {
                if line.trim() == whole.as_str() {
                    return Line::Image {
                        alt: alt.as_str(),
                        src: src.as_str(),
                    };
                }
            }
        }
        Line::Text(line)
    }

    /// Whether this line may continue a paragraph started above it.
    fn continues_paragraph(&self) -> bool {
        matches!(self, Line::Text(_) | Line::Image { .. })
    }
}

/// Output buffer plus the one piece of block state: an open `<ul>`.
#[derive(Default)]
struct HtmlOut {
    html: String,
    in_list: bool,
}

impl HtmlOut {
    fn open_list(&mut self) {
        if !self.in_list {
            self.html.push_str("<ul>");
            self.in_list = true;
        }
    }

    fn close_list(&mut self) {
        if self.in_list {
            self.html.push_str("</ul>");
            self.in_list = false;
        }
    }

    fn finish(mut self) -> String {
        self.close_list();
        self.html
    }
}

/// Render a markdown body to an HTML fragment.
pub fn render(markdown: &str) -> String {
    let source = markdown.replace('\r', "");
    let lines: Vec<Line<'_>> = source.split('\n').map(Line::classify).collect();
    let raw: Vec<&str> = source.split('\n').collect();

    let mut out = HtmlOut::default();
    let mut i = 0;
    while i < lines.len() {
        match &lines[i] {
            Line::Blank => out.close_list(),
            Line::Heading { level, text } => {
                out.close_list();
                let inner = inline::render(text);
                out.html.push_str(&format!("<h{level}>{inner}</h{level}>"));
            }
            Line::ListItem(text) => {
                out.open_list();
                out.html.push_str(&format!("<li>{}</li>", inline::render(text)));
            }
            Line::Image { alt, src } => {
                out.close_list();
                let tag = inline::img_tag(&escape_html(src), &escape_html(alt));
                out.html.push_str(&format!("<p>{tag}</p>"));
            }
            Line::Text(first) => {
                let mut paragraph = (*first).to_string();
                while i + 1 < lines.len() && lines[i + 1].continues_paragraph() {
                    i += 1;
                    paragraph.push(' ');
                    paragraph.push_str(raw[i].trim());
                }
                out.close_list();
                out.html
                    .push_str(&format!("<p>{}</p>", inline::render(&paragraph)));
            }
        }
        i += 1;
    }
    out.finish()
}
