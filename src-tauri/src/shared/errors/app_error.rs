use serde::Serialize;
use thiserror::Error;

/// Client-side error taxonomy.
///
/// `Validation` is raised before any request is issued; `Rejected` carries
/// the server's own message verbatim; `Transport` covers offline/timeout
/// failures that the next poll reconciles; `Realtime` stays confined to the
/// notifier channel and never surfaces beyond the connectivity indicator.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{0}")]
    Rejected(String),

    #[error("Connection error: {0}")]
    Transport(String),

    #[error("Realtime channel error: {0}")]
    Realtime(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Transport("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::Transport("Failed to reach the server".to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                404 => AppError::NotFound("Resource not found".to_string()),
                401 | 403 => AppError::Unauthorized("Not authorized".to_string()),
                _ => AppError::Rejected(format!("HTTP {}: {}", status, err)),
            }
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::Validation(format!("Invalid UUID: {}", err))
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::Validation(format!("Invalid date/time: {}", err))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::Validation(format!("Invalid number: {}", err))
    }
}

impl From<std::num::ParseFloatError> for AppError {
    fn from(err: std::num::ParseFloatError) -> Self {
        AppError::Validation(format!("Invalid decimal number: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Session(format!("Session storage failed: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = AppError::Validation("reason cannot be empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: reason cannot be empty");
    }

    #[test]
    fn test_rejected_error_is_verbatim() {
        // Server-rejected transitions surface the backend message untouched
        let err = AppError::Rejected("Makine bakımda".to_string());
        assert_eq!(err.to_string(), "Makine bakımda");
    }

    #[test]
    fn test_serde_json_error_maps_to_serialization() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
