//! API error types for nexus-web.
//!
//! Every call to the REST API resolves to `Result<T, ApiError>`. Failed
//! responses are classified by HTTP status, and the server's human-readable
//! `message` field is kept so it can be shown to the user verbatim.

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while talking to the REST API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400/422 - the API rejected the submitted data
    #[error("validation failed: {}", display_message(.message))]
    Validation { message: Option<String> },

    /// 401 - missing or expired token
    #[error("unauthorized: {}", display_message(.message))]
    Unauthorized { message: Option<String> },

    /// 403 - authenticated but not allowed
    #[error("forbidden: {}", display_message(.message))]
    Forbidden { message: Option<String> },

    /// 404
    #[error("not found: {}", display_message(.message))]
    NotFound { message: Option<String> },

    /// 409 - e.g. already joined or already registered
    #[error("conflict: {}", display_message(.message))]
    Conflict { message: Option<String> },

    /// Any other non-success status
    #[error("server error {status}: {}", display_message(.message))]
    Server { status: u16, message: Option<String> },

    /// The request never produced a response
    #[error("network error: {message}")]
    Network { message: String },

    /// The response body did not have the expected shape
    #[error("unexpected response: {message}")]
    Decode { message: String },
}

fn display_message(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("no details")
}

/// Error body returned by the API.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Classify a failed response by status code and extract its message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());

        match status {
            400 | 422 => Self::Validation { message },
            401 => Self::Unauthorized { message },
            403 => Self::Forbidden { message },
            404 => Self::NotFound { message },
            409 => Self::Conflict { message },
            status => Self::Server { status, message },
        }
    }

    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Validation { message }
            | Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::Server { message, .. } => message.as_deref(),
            Self::Network { .. } | Self::Decode { .. } => None,
        }
    }

    /// Text shown to the user: the server's message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode { message: err.to_string() }
        } else {
            Self::Network { message: err.to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_codes() {
        assert!(matches!(ApiError::from_status(400, ""), ApiError::Validation { .. }));
        assert!(matches!(ApiError::from_status(401, ""), ApiError::Unauthorized { .. }));
        assert!(matches!(ApiError::from_status(403, ""), ApiError::Forbidden { .. }));
        assert!(matches!(ApiError::from_status(404, ""), ApiError::NotFound { .. }));
        assert!(matches!(ApiError::from_status(409, ""), ApiError::Conflict { .. }));
        assert_eq!(
            ApiError::from_status(502, "<html>bad gateway</html>"),
            ApiError::Server { status: 502, message: None }
        );
    }

    #[test]
    fn extracts_server_message() {
        let err = ApiError::from_status(400, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn falls_back_without_message() {
        let err = ApiError::from_status(500, r#"{"error":"boom"}"#);
        assert_eq!(err.user_message("Failed to create community"), "Failed to create community");

        let err = ApiError::from_status(409, r#"{"message":"   "}"#);
        assert_eq!(err.server_message(), None);

        let err = ApiError::Network { message: "offline".into() };
        assert_eq!(err.user_message("Failed to send message"), "Failed to send message");
    }

    #[test]
    fn display_includes_details() {
        let err = ApiError::from_status(403, r#"{"message":"Admins only"}"#);
        assert_eq!(err.to_string(), "forbidden: Admins only");
        assert_eq!(ApiError::from_status(404, "").to_string(), "not found: no details");
    }
}
