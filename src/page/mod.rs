//! Single-page assembly
//!
//! Turns rendered articles into one self-contained `index.html` with embedded
//! styles and a client-side filter over free text, source and category.

mod template;

use std::collections::HashSet;
use std::fmt::Write;

use crate::common::string_utils::escape_html;
use crate::config::{CategoryRegistry, SiteLayout, SourceRegistry};
use crate::content::Article;

pub use template::NOT_FOUND_PAGE;

/// One `<option>` of a filter select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Distinct values in first-use order
fn used_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

/// Options for the source select.
///
/// Configured sources used by at least one article come first, in
/// configuration order; used ids missing from the configuration follow in
/// first-use order, labelled with the id itself.
pub fn source_options(articles: &[Article], sources: &SourceRegistry) -> Vec<SelectOption> {
    let used = used_in_order(articles.iter().map(|a| a.source_id.as_str()));

    let configured = sources
        .iter()
        .filter(|source| used.contains(&source.id.as_str()))
        .map(|source| SelectOption::new(&source.id, &source.name));
    let fallback = used
        .iter()
        .filter(|id| !sources.is_valid(id))
        .map(|id| SelectOption::new(*id, *id));

    configured.chain(fallback).collect()
}

/// Options for the category select, ordered like [`source_options`].
pub fn category_options(articles: &[Article], categories: &CategoryRegistry) -> Vec<SelectOption> {
    let used = used_in_order(articles.iter().filter_map(Article::category));

    let configured = categories
        .iter()
        .filter(|category| used.contains(&category.id.as_str()))
        .map(|category| SelectOption::new(&category.id, &category.name));
    let fallback = used
        .iter()
        .filter(|id| !categories.is_valid(id))
        .map(|id| SelectOption::new(*id, *id));

    configured.chain(fallback).collect()
}

fn render_options(all_label: &str, options: &[SelectOption]) -> String {
    let mut html = format!(r#"<option value="all">{}</option>"#, escape_html(all_label));
    for option in options {
        let _ = write!(
            html,
            r#"<option value="{}">{}</option>"#,
            escape_html(&option.value),
            escape_html(&option.label)
        );
    }
    html
}

/// HTML block for one article
pub fn article_fragment(article: &Article, sources: &SourceRegistry) -> String {
    let label = sources.source_label(&article.source_id, article.source_name());
    format!(
        r#"<div class="item" data-source="{source}" data-category="{category}">
      <h2>{title}</h2>
      <p style="color:#64748b">{label} · {published}</p>
      <div class="content">{html}</div>
      </div>"#,
        source = escape_html(&article.source_id),
        category = escape_html(article.category().unwrap_or_default()),
        title = escape_html(article.title()),
        label = escape_html(label),
        published = escape_html(article.published_at()),
        html = article.html,
    )
}

/// The complete `index.html`
pub fn render_page(
    layout: &SiteLayout,
    articles: &[Article],
    sources: &SourceRegistry,
    categories: &CategoryRegistry,
) -> String {
    let source_select = render_options("All sources", &source_options(articles, sources));
    let category_select =
        render_options("All categories", &category_options(articles, categories));
    let items = articles
        .iter()
        .map(|article| article_fragment(article, sources))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!doctype html>
<html lang="{lang}">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>{title}</title>
  <style>{style}</style>
</head>
<body>
  <h1>{heading}</h1>
  <div class="controls">
    <select id="sourceSelect">{source_select}</select>
    <select id="categorySelect">{category_select}</select>
    <input id="q" class="search" placeholder="Search..." />
    <button id="refresh" onclick="location.reload()">Refresh</button>
  </div>
  <div id="count"></div>
  <div id="list">
    {items}
  </div>
  <script>{script}</script>
</body>
</html>"#,
        lang = escape_html(&layout.lang),
        title = escape_html(&layout.title),
        heading = escape_html(&layout.heading),
        style = template::STYLE,
        script = template::FILTER_SCRIPT,
    )
}
