//! Error types and handling for news-fusion
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`scaffold`]: Article scaffolding (user input) errors

pub mod config;
pub mod fs;
pub mod scaffold;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for news-fusion operations
#[derive(Error, Diagnostic, Debug)]
pub enum NewsError {
    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(news_fusion::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(news_fusion::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(news_fusion::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(news_fusion::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("File already exists: {path}")]
    #[diagnostic(
        code(news_fusion::fs::already_exists),
        help("Pick a different title or publish date, or edit the existing article")
    )]
    FileExists { path: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(news_fusion::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(news_fusion::fs::io_error))]
    IoError { message: String },

    // Scaffolding errors
    #[error("Missing required arguments: {missing}\n{usage}")]
    #[diagnostic(code(news_fusion::scaffold::missing_arguments))]
    MissingArguments { missing: String, usage: String },

    #[error("Invalid category: {category}\nAllowed categories: {allowed}")]
    #[diagnostic(code(news_fusion::scaffold::invalid_category))]
    InvalidCategory { category: String, allowed: String },

    #[error("Invalid source: {source_id}\nAllowed sources: {allowed}")]
    #[diagnostic(code(news_fusion::scaffold::invalid_source))]
    InvalidSource { source_id: String, allowed: String },

    #[error("Invalid publishedAt: {value}")]
    #[diagnostic(
        code(news_fusion::scaffold::invalid_date),
        help("publishedAt must start with a YYYY-MM-DD date, e.g. 2026-02-16T08:10:00Z")
    )]
    InvalidDate { value: String },

    #[error("Title produces an empty filename slug: {title}")]
    #[diagnostic(
        code(news_fusion::scaffold::empty_slug),
        help("The title needs at least one ASCII letter or digit")
    )]
    EmptySlug { title: String },
}

impl From<std::io::Error> for NewsError {
    fn from(err: std::io::Error) -> Self {
        NewsError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, NewsError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_code() {
        let err = scaffold::file_exists("web/content/articles/tech/x.md");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("news_fusion::fs::already_exists".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NewsError = io_err.into();
        assert!(matches!(err, NewsError::IoError { .. }));
    }

    test_error_contains!(
        test_invalid_category_lists_allowed,
        scaffold::invalid_category("sports", &["technology", "science"]),
        "Invalid category: sports",
        "Allowed categories: technology, science"
    );

    test_error_contains!(
        test_invalid_source_lists_allowed,
        scaffold::invalid_source("other", &["9to5google", "verge"]),
        "Invalid source: other",
        "Allowed sources: 9to5google, verge"
    );

    test_error_contains!(
        test_missing_arguments_includes_usage,
        scaffold::missing_arguments(&["title", "sourceUrl"]),
        "title, sourceUrl",
        "Usage:"
    );

    test_error_contains!(
        test_file_exists,
        scaffold::file_exists("a/b.md"),
        "File already exists: a/b.md"
    );

    test_error_contains!(
        test_config_parse_failed,
        config::parse_failed("news-fusion.yaml", "bad indent"),
        "news-fusion.yaml",
        "bad indent"
    );

    test_error_contains!(
        test_file_read_failed,
        fs::read_failed("/x/y.md", "permission denied"),
        "Failed to read file"
    );
}
