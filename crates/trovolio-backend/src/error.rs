//! Internal error types for REST and storage calls.
//!
//! These errors stay inside `trovolio-backend` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered with a non-success status.
    #[error("Request to {url} failed with status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Message extracted from the response body
        message: String,
    },

    /// The client could not be built from its configuration.
    #[error("Invalid client configuration: {message}")]
    Configuration { message: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status, when the backend answered at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull a readable message out of an error response body.
///
/// The REST and storage surfaces answer with JSON objects carrying
/// `message` (or `error`); anything else is passed through trimmed.
pub fn error_message_from_body(body: &str) -> String {
    const MAX_LEN: usize = 200;

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed.as_ref().and_then(|json| {
        ["message", "error", "msg"]
            .iter()
            .find_map(|key| json.get(key).and_then(serde_json::Value::as_str))
    });

    let text = message.unwrap_or(body).trim();
    if text.is_empty() {
        return "no details".to_string();
    }
    if text.chars().count() > MAX_LEN {
        let truncated: String = text.chars().take(MAX_LEN).collect();
        return format!("{truncated}...");
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let error = ClientError::Status {
            status: 409,
            url: "https://project.example.co/rest/v1/integrations".to_string(),
            message: "duplicate key".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("409"));
        assert!(msg.contains("duplicate key"));
        assert_eq!(error.status(), Some(409));
    }

    #[test]
    fn test_message_from_json_body() {
        assert_eq!(
            error_message_from_body(r#"{"code":"42P01","message":"relation does not exist"}"#),
            "relation does not exist"
        );
        assert_eq!(
            error_message_from_body(r#"{"statusCode":"404","error":"Object not found"}"#),
            "Object not found"
        );
    }

    #[test]
    fn test_message_from_plain_body() {
        assert_eq!(error_message_from_body("  Bad Gateway \n"), "Bad Gateway");
        assert_eq!(error_message_from_body(""), "no details");
    }

    #[test]
    fn test_long_body_is_truncated() {
        let body = "x".repeat(500);
        let msg = error_message_from_body(&body);
        assert!(msg.ends_with("..."));
        assert_eq!(msg.len(), 203);
    }
}
