//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - build: Build command arguments
//! - new: New article command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod build;
pub mod completions;
pub mod new;

pub use build::BuildArgs;
pub use completions::CompletionsArgs;
pub use new::NewArgs;

/// news-fusion - static news page builder
///
/// Builds a single self-contained news page from markdown articles.
#[derive(Parser, Debug)]
#[command(
    name = "news-fusion",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Static single-page news aggregator built from markdown articles",
    long_about = "news-fusion renders markdown articles with frontmatter into one self-contained \
                  HTML page with client-side search and source/category filters, and scaffolds \
                  new article files.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  news-fusion build                                   \x1b[90m# Write web/dist/index.html\x1b[0m\n   \
                  news-fusion new --title \"...\" --category technology \\\n     \
                  --source-url https://9to5google.com/...             \x1b[90m# Scaffold an article\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project root (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "NEWS_FUSION_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the static page from all articles
    Build(BuildArgs),

    /// Scaffold a new article file
    New(NewArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
