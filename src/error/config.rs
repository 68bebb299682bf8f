//! Configuration errors

use super::NewsError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> NewsError {
    NewsError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> NewsError {
    NewsError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
