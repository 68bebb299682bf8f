//! New command implementation

use std::path::PathBuf;

use chrono::Utc;

use crate::cli::NewArgs;
use crate::config::SiteLayout;
use crate::error::Result;
use crate::scaffold::{self, ArticleFields, NewArticle};
use crate::ui;

/// Run the new command
pub fn run(root: Option<PathBuf>, args: NewArgs) -> Result<()> {
    let root = super::project_root(root)?;
    let layout = SiteLayout::load(&root)?;
    let sources = layout.load_sources();
    let categories = layout.load_categories();

    let positional = scaffold::parse_positional(&args.words, &categories).unwrap_or_default();
    let fields = named_fields(args).or(positional);
    let article = NewArticle::from_fields(fields, &sources, &categories, Utc::now())?;
    let path = scaffold::create_article(&layout.content_dir, &article)?;

    println!(
        "{}",
        ui::success_style().apply_to(format!("Created: {}", path.display()))
    );
    Ok(())
}

fn named_fields(args: NewArgs) -> ArticleFields {
    ArticleFields {
        title: args.title,
        category: args.category,
        source_url: args.source_url,
        source: args.source,
        source_name: args.source_name,
        summary: args.summary,
        thumbnail: args.thumbnail,
        published_at: args.published_at,
    }
    .normalized()
}
