//! Article discovery and loading
//!
//! Articles are `*.md` files anywhere under the content root. Each one is
//! parsed, rendered and attributed to a source exactly once per build.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::SourceRegistry;
use crate::error::{self, Result};
use crate::frontmatter::{self, Frontmatter};
use crate::markdown;

/// A parsed and rendered article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// File stem, e.g. `2026-02-16-pixel-10-review`
    pub id: String,
    pub path: PathBuf,
    pub meta: Frontmatter,
    /// Rendered body
    pub html: String,
    /// Markdown body without the frontmatter block
    pub body: String,
    pub source_id: String,
}

impl Article {
    /// Parse `content` read from `path` and resolve its source.
    pub fn from_markdown(path: &Path, content: &str, sources: &SourceRegistry) -> Self {
        let doc = frontmatter::parse(content);
        let html = markdown::render(&doc.body);
        let source_id = sources
            .detect_source_id(doc.meta.get("source"), doc.meta.get("sourceUrl"))
            .to_string();
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            id,
            path: path.to_path_buf(),
            meta: doc.meta,
            html,
            body: doc.body,
            source_id,
        }
    }

    /// `title`, or the id when the article has none
    pub fn title(&self) -> &str {
        self.meta.get_non_empty("title").unwrap_or(&self.id)
    }

    pub fn category(&self) -> Option<&str> {
        self.meta.get_non_empty("category")
    }

    pub fn published_at(&self) -> &str {
        self.meta.get("publishedAt").unwrap_or_default()
    }

    pub fn source_name(&self) -> Option<&str> {
        self.meta.get_non_empty("sourceName")
    }
}

/// All `*.md` files under `root`, sorted by path string.
///
/// A missing root yields an empty list.
pub fn list_markdown(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        tracing::warn!(path = %root.display(), "content directory not found, no articles to build");
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable content entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.to_string_lossy().ends_with(".md"))
        .collect();

    files.sort_by_cached_key(|path| path.to_string_lossy().into_owned());
    files
}

/// Read and render one article file
pub fn load_article(path: &Path, sources: &SourceRegistry) -> Result<Article> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| error::fs::read_failed(path.display().to_string(), e.to_string()))?;
    let article = Article::from_markdown(path, &content, sources);
    if article.meta.is_empty() {
        tracing::debug!(path = %article.path.display(), "article has no frontmatter");
    }
    tracing::debug!(
        id = %article.id,
        source = %article.source_id,
        body_bytes = article.body.len(),
        "loaded article"
    );
    Ok(article)
}
