//! Article frontmatter: a `---` delimited block of `key: value` lines at the
//! top of a markdown file.
//!
//! The block is not YAML. Lines that do not look like `key: value` are
//! skipped and surrounding double quotes are stripped from values, so parsing
//! never fails.

use std::sync::LazyLock;

use regex::Regex;

const DELIMITER: &str = "---";

#[allow(clippy::unwrap_used)]
static KEY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_\-]+):\s*(.*)$").unwrap());

/// Ordered `key: value` metadata of one article.
///
/// Keys keep the position of their first occurrence; a repeated key
/// overwrites the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    entries: Vec<(String, String)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`Frontmatter::insert`]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`Frontmatter::get`] but treats an empty value as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as a complete delimited block, including the trailing newline
    /// after the closing delimiter.
    ///
    /// Values are wrapped in double quotes verbatim; callers that need quotes
    /// inside a value escape them beforehand.
    pub fn to_block(&self) -> String {
        let mut out = String::from(DELIMITER);
        out.push('\n');
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push_str(": \"");
            out.push_str(value);
            out.push_str("\"\n");
        }
        out.push_str(DELIMITER);
        out.push('\n');
        out
    }
}

/// A document split into metadata and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub meta: Frontmatter,
    pub body: String,
}

/// Split `content` into frontmatter and body.
///
/// Without an opening `---` line, or without a closing `---` line, the whole
/// text is the body and the metadata is empty.
pub fn parse(content: &str) -> Document {
    match split_block(content) {
        Some((block, body)) => Document {
            meta: parse_block(block),
            body: body.to_string(),
        },
        None => Document {
            meta: Frontmatter::new(),
            body: content.to_string(),
        },
    }
}

/// Returns `(block, body)` slices when `content` starts with a delimited block.
fn split_block(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix(DELIMITER)?;
    let rest = rest
        .strip_prefix('\n')
        .or_else(|| rest.strip_prefix("\r\n"))?;
    let block_start = content.len() - rest.len();

    let mut offset = block_start;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\n', '\r']);
        if trimmed == DELIMITER {
            let block = &content[block_start..offset];
            let block = block
                .strip_suffix('\n')
                .map_or(block, |b| b.strip_suffix('\r').unwrap_or(b));
            let body = &content[offset + line.len()..];
            return Some((block, body));
        }
        offset += line.len();
    }
    None
}

fn parse_block(block: &str) -> Frontmatter {
    let mut meta = Frontmatter::new();
    for line in block.lines() {
        let Some(caps) = KEY_VALUE.captures(line) else {
            continue;
        };
        let key = caps[1].trim();
        meta.insert(key, unquote(caps[2].trim()));
    }
    meta
}

/// Strip one leading and one trailing double quote, independently.
fn unquote(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}
