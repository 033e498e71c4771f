//! Error types for the ExerciseDB client.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is the closed [`ExerciseDbError`] enum. Each variant carries just enough
//! context (status code, file path, offending value) to diagnose a failure
//! without looking at client internals.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExerciseDbError>;

#[derive(Error, Debug)]
pub enum ExerciseDbError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API request failed: {status_code} {message}")]
    RemoteApi { status_code: u16, message: String },

    #[error("No cached data found for {list_type}")]
    CacheMiss { list_type: String },

    #[error("Failed to save cache file {}: {source}", .path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: CacheWriteSource,
    },

    #[error("Failed to load cache file {}: {reason}", .path.display())]
    CacheRead { path: PathBuf, reason: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Underlying cause of a failed cache write.
#[derive(Error, Debug)]
pub enum CacheWriteSource {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ExerciseDbError {
    /// Truncate a response body to avoid carrying excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        ExerciseDbError::RemoteApi {
            status_code: status.as_u16(),
            message: Self::truncate_body(body),
        }
    }

    pub(crate) fn cache_write(path: impl Into<PathBuf>, source: impl Into<CacheWriteSource>) -> Self {
        ExerciseDbError::CacheWrite {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn cache_read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ExerciseDbError::CacheRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// HTTP status code of a remote failure, if this is one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ExerciseDbError::RemoteApi { status_code, .. } => Some(*status_code),
            ExerciseDbError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_keeps_code_and_body() {
        let err = ExerciseDbError::from_status(StatusCode::TOO_MANY_REQUESTS, "slow down");
        match &err {
            ExerciseDbError::RemoteApi {
                status_code,
                message,
            } => {
                assert_eq!(*status_code, 429);
                assert_eq!(message, "slow down");
            }
            other => panic!("expected RemoteApi, got {:?}", other),
        }
        assert_eq!(err.status_code(), Some(429));
        assert_eq!(err.to_string(), "API request failed: 429 slow down");
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let body = "x".repeat(MAX_ERROR_BODY_LENGTH + 20);
        let err = ExerciseDbError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body);
        let msg = err.to_string();
        assert!(msg.contains("truncated, 520 total bytes"));
        assert!(msg.len() < body.len() + 40);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // 'é' is two bytes, so byte 500 falls mid-character
        let body = format!("a{}", "é".repeat(300));
        let truncated = ExerciseDbError::truncate_body(&body);
        assert!(truncated.starts_with('a'));
        assert!(truncated.contains("truncated"));
    }

    #[test]
    fn test_cache_errors_name_the_path() {
        let err = ExerciseDbError::cache_read("/tmp/missing.json", "No such file");
        assert!(err.to_string().contains("/tmp/missing.json"));
        assert_eq!(err.status_code(), None);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ExerciseDbError::cache_write("/ro/targetList.json", io);
        assert!(err.to_string().contains("/ro/targetList.json"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_cache_miss_names_list_type() {
        let err = ExerciseDbError::CacheMiss {
            list_type: "targetList".to_string(),
        };
        assert_eq!(err.to_string(), "No cached data found for targetList");
    }
}
