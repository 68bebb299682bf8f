use clap::Parser;
use std::path::PathBuf;

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build with the default layout:\n    news-fusion build\n\n\
                  Build another project:\n    news-fusion -w ../my-site build\n\n\
                  Write the page somewhere else:\n    news-fusion build --out-dir public")]
pub struct BuildArgs {
    /// Directory searched recursively for *.md articles
    #[arg(long, value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Directory receiving index.html and 404.html
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}
