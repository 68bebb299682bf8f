//! Build command implementation
//!
//! Renders every markdown article under the content directory into a single
//! `index.html` plus a static `404.html`.

use std::path::{Path, PathBuf};

use crate::cli::BuildArgs;
use crate::common::fs::{ensure_dir, write_atomic};
use crate::config::{SiteLayout, SourceRegistry};
use crate::content::{self, Article};
use crate::error::Result;
use crate::page::{self, NOT_FOUND_PAGE};
use crate::ui;

/// Run the build command
pub fn run(root: Option<PathBuf>, args: BuildArgs) -> Result<()> {
    let root = super::project_root(root)?;
    let layout = apply_overrides(SiteLayout::load(&root)?, args);

    let count = build(&layout)?;

    println!(
        "{}",
        ui::success_style().apply_to(format!(
            "Built {count} articles -> {}",
            layout.out_dir.display()
        ))
    );
    Ok(())
}

/// Command-line directories win over `news-fusion.yaml`
fn apply_overrides(mut layout: SiteLayout, args: BuildArgs) -> SiteLayout {
    if let Some(dir) = args.content_dir {
        layout.content_dir = layout.root.join(dir);
    }
    if let Some(dir) = args.out_dir {
        layout.out_dir = layout.root.join(dir);
    }
    layout
}

/// Build the site described by `layout`, returning the article count
pub fn build(layout: &SiteLayout) -> Result<usize> {
    let sources = layout.load_sources();
    let categories = layout.load_categories();

    let files = content::list_markdown(&layout.content_dir);
    tracing::debug!(count = files.len(), dir = %layout.content_dir.display(), "found articles");

    let articles = load_all(&files, &sources)?;
    let html = page::render_page(layout, &articles, &sources, &categories);

    ensure_dir(&layout.out_dir)?;
    let index = layout.out_dir.join("index.html");
    write_atomic(&index, &html)?;
    write_atomic(&layout.out_dir.join("404.html"), NOT_FOUND_PAGE)?;
    tracing::info!(path = %index.display(), articles = articles.len(), "wrote page");

    Ok(articles.len())
}

fn load_all(files: &[PathBuf], sources: &SourceRegistry) -> Result<Vec<Article>> {
    let mut reporter = ui::progress_reporter(files.len());
    let mut articles = Vec::with_capacity(files.len());

    for path in files {
        reporter.update_article(&display_name(path));
        match content::load_article(path, sources) {
            Ok(article) => articles.push(article),
            Err(e) => {
                reporter.abandon();
                return Err(e);
            }
        }
        reporter.inc_article();
    }

    reporter.finish();
    Ok(articles)
}

fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
