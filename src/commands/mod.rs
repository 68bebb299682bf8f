//! Command implementations for news-fusion CLI

pub mod build;
pub mod completions;
pub mod new;
pub mod version;

use std::path::PathBuf;

use crate::error::{NewsError, Result};

/// Project root from the CLI argument or the current directory
fn project_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| NewsError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}
