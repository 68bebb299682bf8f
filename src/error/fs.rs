//! File system errors

use super::NewsError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> NewsError {
    NewsError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> NewsError {
    NewsError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
