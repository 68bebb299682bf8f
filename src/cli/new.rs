use clap::Parser;

/// Arguments for the new command
///
/// Named flags take precedence over positional words.
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Named flags:\n    news-fusion new --title \"Pixel 10 review\" --category technology \\\n      \
                  --source-url https://9to5google.com/2026/02/16/pixel-10 --summary \"Hands on\"\n\n\
                  Positional words (TITLE... CATEGORY URL [SOURCE_NAME] [SUMMARY...]):\n    \
                  news-fusion new Pixel 10 review technology https://9to5google.com/x 9to5Google Hands on")]
pub struct NewArgs {
    /// Article title
    #[arg(long)]
    pub title: Option<String>,

    /// Category id (must be configured)
    #[arg(long)]
    pub category: Option<String>,

    /// Original article URL; its domain picks the source
    #[arg(long, alias = "sourceUrl", value_name = "URL")]
    pub source_url: Option<String>,

    /// Explicit source id (must be configured)
    #[arg(long)]
    pub source: Option<String>,

    /// Publisher display name
    #[arg(long, alias = "sourceName", value_name = "NAME")]
    pub source_name: Option<String>,

    #[arg(long)]
    pub summary: Option<String>,

    /// Thumbnail image URL
    #[arg(long, value_name = "URL")]
    pub thumbnail: Option<String>,

    /// Publish timestamp, ISO-8601 (defaults to now)
    #[arg(long, alias = "publishedAt", value_name = "TIMESTAMP")]
    pub published_at: Option<String>,

    /// Positional form: TITLE... CATEGORY URL [SOURCE_NAME] [SUMMARY...]
    ///
    /// Named flags may appear before, between or after the words.
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,
}
