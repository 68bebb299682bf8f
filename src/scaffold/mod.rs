//! Article scaffolding for `news-fusion new`
//!
//! Collects the article fields from named flags and/or positional words,
//! validates them against the configured categories and sources, and writes
//! `<content>/<category>/<YYYY-MM-DD>-<slug>.md` without ever overwriting.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::common::fs::{ensure_dir, write_new};
use crate::common::string_utils::slugify;
use crate::config::{CategoryRegistry, OTHER_SOURCE_ID, SourceRegistry};
use crate::error::{self, Result};
use crate::frontmatter::Frontmatter;

const DEFAULT_SOURCE_NAME: &str = "Unknown Source";
const BODY_PLACEHOLDER: &str = "Write your markdown content here.";

/// Raw, possibly incomplete article fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: Option<String>,
    pub category: Option<String>,
    pub source_url: Option<String>,
    pub source: Option<String>,
    pub source_name: Option<String>,
    pub summary: Option<String>,
    pub thumbnail: Option<String>,
    pub published_at: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ArticleFields {
    /// Trim every field and drop empty ones
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            title: non_empty(self.title),
            category: non_empty(self.category),
            source_url: non_empty(self.source_url),
            source: non_empty(self.source),
            source_name: non_empty(self.source_name),
            summary: non_empty(self.summary),
            thumbnail: non_empty(self.thumbnail),
            published_at: non_empty(self.published_at),
        }
    }

    /// Fill fields missing here from `fallback`
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            title: self.title.or(fallback.title),
            category: self.category.or(fallback.category),
            source_url: self.source_url.or(fallback.source_url),
            source: self.source.or(fallback.source),
            source_name: self.source_name.or(fallback.source_name),
            summary: self.summary.or(fallback.summary),
            thumbnail: self.thumbnail.or(fallback.thumbnail),
            published_at: self.published_at.or(fallback.published_at),
        }
    }
}

/// Parse `TITLE WORDS... CATEGORY SOURCE_URL [SOURCE_NAME] [SUMMARY WORDS...]`.
///
/// The category is the first word equal to a configured category id. Returns
/// `None` unless at least one title word precedes it and a URL follows it.
pub fn parse_positional(words: &[String], categories: &CategoryRegistry) -> Option<ArticleFields> {
    let category_index = words.iter().position(|w| categories.is_valid(w))?;
    if category_index == 0 || category_index + 1 >= words.len() {
        return None;
    }

    let fields = ArticleFields {
        title: Some(words[..category_index].join(" ")),
        category: Some(words[category_index].clone()),
        source_url: words.get(category_index + 1).cloned(),
        source_name: words.get(category_index + 2).cloned(),
        summary: words.get(category_index + 3..).map(|rest| rest.join(" ")),
        ..ArticleFields::default()
    }
    .normalized();

    if fields.title.is_none() || fields.category.is_none() || fields.source_url.is_none() {
        return None;
    }
    Some(fields)
}

/// A validated article ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub category: String,
    pub source: String,
    pub published_at: String,
    pub source_name: String,
    pub source_url: String,
    pub thumbnail: String,
    pub summary: String,
    /// `<YYYY-MM-DD>-<slug>.md`
    pub file_name: String,
}

impl NewArticle {
    /// Validate `fields`, filling defaults. `now` stamps articles without
    /// `published_at`.
    pub fn from_fields(
        fields: ArticleFields,
        sources: &SourceRegistry,
        categories: &CategoryRegistry,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let fields = fields.normalized();
        let (Some(title), Some(category), Some(source_url)) = (
            fields.title.clone(),
            fields.category.clone(),
            fields.source_url.clone(),
        ) else {
            return Err(missing_required(&fields));
        };

        if !categories.is_valid(&category) {
            return Err(error::scaffold::invalid_category(category, &categories.ids()));
        }

        // Explicit `--source` (trimmed only), else the URL's domain
        let source = fields.source.unwrap_or_else(|| {
            sources
                .source_by_domain(Some(&source_url))
                .map_or(OTHER_SOURCE_ID, |s| s.id.as_str())
                .to_string()
        });
        if !sources.is_valid(&source) {
            suggest_source_by_name(sources, &source_url, fields.source_name.as_deref());
            return Err(error::scaffold::invalid_source(source, &sources.ids()));
        }

        let published_at = fields
            .published_at
            .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true));
        let file_name = build_file_name(&title, &published_at)?;

        Ok(Self {
            title,
            category,
            source,
            published_at,
            source_name: fields
                .source_name
                .unwrap_or_else(|| DEFAULT_SOURCE_NAME.to_string()),
            source_url,
            thumbnail: fields.thumbnail.unwrap_or_default(),
            summary: fields.summary.unwrap_or_default(),
            file_name,
        })
    }

    /// Frontmatter block, blank line and placeholder body
    pub fn to_markdown(&self) -> String {
        let meta = Frontmatter::new()
            .with("title", escape_quotes(&self.title))
            .with("category", &self.category)
            .with("source", &self.source)
            .with("publishedAt", &self.published_at)
            .with("sourceName", escape_quotes(&self.source_name))
            .with("sourceUrl", &self.source_url)
            .with("thumbnail", &self.thumbnail)
            .with("summary", escape_quotes(&self.summary));
        format!("{}\n{BODY_PLACEHOLDER}\n", meta.to_block())
    }

    /// Target path under `content_dir`
    pub fn path_in(&self, content_dir: &Path) -> PathBuf {
        content_dir.join(&self.category).join(&self.file_name)
    }
}

/// Error listing which required fields are absent from `fields`
pub fn missing_required(fields: &ArticleFields) -> error::NewsError {
    let missing: Vec<&str> = [
        ("title", fields.title.is_none()),
        ("category", fields.category.is_none()),
        ("sourceUrl", fields.source_url.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, absent)| absent.then_some(name))
    .collect();
    error::scaffold::missing_arguments(&missing)
}

/// Point at `--source` when only the display name identifies a configured
/// source. The name never selects the source by itself.
fn suggest_source_by_name(sources: &SourceRegistry, source_url: &str, source_name: Option<&str>) {
    let by_name = sources.detect_source_id_with_name(None, Some(source_url), source_name);
    if by_name != OTHER_SOURCE_ID {
        tracing::warn!(
            source = by_name,
            "sourceName matches a configured source; pass --source {by_name} to use it"
        );
    }
}

fn escape_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// `<YYYY-MM-DD>-<slug>.md` from the first ten characters of `published_at`
fn build_file_name(title: &str, published_at: &str) -> Result<String> {
    let date: String = published_at.chars().take(10).collect();
    let well_formed = date.len() == 10
        && date.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    if !well_formed || NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
        return Err(error::scaffold::invalid_date(published_at));
    }

    let slug = slugify(title);
    if slug.is_empty() {
        return Err(error::scaffold::empty_slug(title));
    }
    Ok(format!("{date}-{slug}.md"))
}

/// Write `article` under `content_dir`, creating the category directory.
///
/// Fails with a file-exists error instead of overwriting.
pub fn create_article(content_dir: &Path, article: &NewArticle) -> Result<PathBuf> {
    let path = article.path_in(content_dir);
    if let Some(dir) = path.parent() {
        ensure_dir(dir)?;
    }
    write_new(&path, &article.to_markdown())?;
    tracing::info!(path = %path.display(), "created article");
    Ok(path)
}
