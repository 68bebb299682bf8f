//! Configuration file handling for news-fusion
//!
//! This module contains data structures for:
//! - `news-fusion.yaml` - Optional site settings and path overrides
//! - `sources.json` - Known publishers and their domains
//! - `categories.json` - Article categories

pub mod categories;
pub mod site;
pub mod sources;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{self, Result};

pub use categories::CategoryRegistry;
pub use site::SiteLayout;
pub use sources::{OTHER_SOURCE_ID, Source, SourceRegistry};

/// Parse a list-of-records file, picking YAML or JSON by extension.
pub fn parse_list<T: DeserializeOwned>(path: &Path, content: &str) -> Result<Vec<T>> {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let parsed = if is_yaml {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(content).map_err(|e| e.to_string())
    };
    parsed.map_err(|reason| error::config::parse_failed(path.display().to_string(), reason))
}

/// Load a list-of-records file, degrading to an empty list.
///
/// A missing, unreadable or malformed file is logged as a warning and
/// treated as empty.
pub fn load_list_or_empty<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "configuration list unavailable, using empty list");
            return Vec::new();
        }
    };
    match parse_list(path, &content) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, "configuration list malformed, using empty list");
            Vec::new()
        }
    }
}
