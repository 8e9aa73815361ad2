// Error handling module
// Maps backend HTTP failures onto a client-side taxonomy

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Structured field-error payload returned by the backend on validation
/// failures (400) and conflicts (409).
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FieldErrors {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: HashMap<String, String>,
}

impl FieldErrors {
    pub fn summary(&self) -> String {
        if let Some(ref msg) = self.message {
            return msg.clone();
        }
        let mut parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        parts.sort();
        parts.join(", ")
    }
}

/// Errors surfaced by the API client
#[derive(Error, Debug)]
pub enum ApiError {
    /// 401 on a token-bearing request; recoverable via a refresh exchange.
    /// Resolved inside the request pipeline and only escapes if the retry
    /// itself comes back 401.
    #[error("Access token expired")]
    AuthExpired,

    /// The refresh exchange itself was rejected or no refresh token is
    /// available; the session is over.
    #[error("Authentication invalid: {0}")]
    AuthInvalid(String),

    /// 400 with a structured field-error payload
    #[error("Validation failed: {}", .0.summary())]
    Validation(FieldErrors),

    /// 409, e.g. duplicate national id or username
    #[error("Conflict: {}", .0.summary())]
    Conflict(FieldErrors),

    /// 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// 5xx
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    /// Any other non-success status
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (DNS, connect, timeout, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Build an error from a non-success status and its body text.
    /// 401 is resolved by the pipeline before this is reached.
    pub fn from_status(status: u16, body: &str) -> Self {
        let fields = || {
            serde_json::from_str::<FieldErrors>(body).unwrap_or_else(|_| FieldErrors {
                message: Some(body.to_string()),
                errors: HashMap::new(),
            })
        };

        match status {
            400 => ApiError::Validation(fields()),
            404 => ApiError::NotFound(if body.is_empty() {
                "resource not found".to_string()
            } else {
                body.to_string()
            }),
            409 => ApiError::Conflict(fields()),
            500..=599 => ApiError::Server {
                status,
                message: body.to_string(),
            },
            _ => ApiError::Api {
                status,
                message: body.to_string(),
            },
        }
    }

    /// True when the error ends the session and the user must log in again
    pub fn is_fatal_auth(&self) -> bool {
        matches!(self, ApiError::AuthInvalid(_))
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_from_status() {
        let body = r#"{"message":"Validation failed","errors":{"username":"must not be blank"}}"#;
        let err = ApiError::from_status(400, body);
        match err {
            ApiError::Validation(fields) => {
                assert_eq!(fields.errors.get("username").unwrap(), "must not be blank");
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_conflict_from_status() {
        let body = r#"{"errors":{"nationalId":"already registered"}}"#;
        let err = ApiError::from_status(409, body);
        assert_eq!(err.to_string(), "Conflict: nationalId: already registered");
    }

    #[test]
    fn test_unstructured_body_falls_back_to_message() {
        let err = ApiError::from_status(400, "bad request");
        match err {
            ApiError::Validation(fields) => assert_eq!(fields.summary(), "bad request"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_server_error_range() {
        let err = ApiError::from_status(503, "maintenance");
        assert_eq!(err.to_string(), "Server error: 503 - maintenance");
    }

    #[test]
    fn test_fatal_auth_classification() {
        assert!(ApiError::AuthInvalid("refresh rejected".into()).is_fatal_auth());
        assert!(!ApiError::NotFound("x".into()).is_fatal_auth());
    }
}
