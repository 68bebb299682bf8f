//! Article scaffolding errors
//!
//! These are user-input validation failures reported by `news-fusion new`.

use super::NewsError;

/// Usage text printed when required arguments are missing
pub const USAGE: &str = "Usage: news-fusion new --title \"...\" --category technology --source-url \"https://...\" \
[--source 9to5google] [--source-name \"...\"] [--summary \"...\"] [--thumbnail \"...\"] \
[--published-at \"2026-02-16T08:10:00Z\"]\n\
Or positional: news-fusion new Title words technology https://example.com SourceName Summary words";

/// Creates a missing arguments error carrying the usage text
pub fn missing_arguments(missing: &[&str]) -> NewsError {
    NewsError::MissingArguments {
        missing: missing.join(", "),
        usage: USAGE.to_string(),
    }
}

pub fn invalid_category<S: AsRef<str>>(category: impl Into<String>, allowed: &[S]) -> NewsError {
    NewsError::InvalidCategory {
        category: category.into(),
        allowed: join(allowed),
    }
}

pub fn invalid_source<S: AsRef<str>>(source_id: impl Into<String>, allowed: &[S]) -> NewsError {
    NewsError::InvalidSource {
        source_id: source_id.into(),
        allowed: join(allowed),
    }
}

pub fn invalid_date(value: impl Into<String>) -> NewsError {
    NewsError::InvalidDate {
        value: value.into(),
    }
}

pub fn empty_slug(title: impl Into<String>) -> NewsError {
    NewsError::EmptySlug {
        title: title.into(),
    }
}

pub fn file_exists(path: impl Into<String>) -> NewsError {
    NewsError::FileExists { path: path.into() }
}

fn join<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}
