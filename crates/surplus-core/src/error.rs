//! Error types shared by every Surplus crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown when nothing more specific can be extracted from an error.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// A shared error type for the whole client.
///
/// Variants follow the failure taxonomy of the remote API contract:
/// transport failures, unparseable bodies, client-side validation and
/// authentication failures are kept apart so callers can branch on them.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurplusError {
    /// The request could not be delivered, or the server answered with a
    /// non-success status.
    #[error("{message}")]
    Transport { status: Option<u16>, message: String },

    /// The server answered but the body was not the JSON we expected.
    #[error("{message}")]
    BadResponse { message: String },

    /// Client-side validation failed before any network call was made.
    #[error("{message}")]
    Validation { field: String, message: String },

    /// The server rejected the bearer token, or no session is present.
    #[error("{message}")]
    Unauthorized { message: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound { entity_type: String, id: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SurplusError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Transport error
    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Transport {
            status,
            message: message.into(),
        }
    }

    /// Creates a BadResponse error
    pub fn bad_response(message: impl Into<String>) -> Self {
        Self::BadResponse {
            message: message.into(),
        }
    }

    /// Creates a Validation error for the given field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if this is a BadResponse error
    pub fn is_bad_response(&self) -> bool {
        matches!(self, Self::BadResponse { .. })
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is an Unauthorized error
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// HTTP status attached to the error, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            Self::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }
}

// ============================================================================
// Display message extraction
// ============================================================================

/// Maps any error to a string suitable for a notification.
///
/// Total: never panics and never returns an empty string.
pub fn error_message(error: &(dyn std::error::Error + 'static)) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

/// Maps an arbitrary caught JSON value to a display string.
///
/// Objects contribute their `message` (or `error`) field when it is a
/// non-empty string, bare strings are used as-is, and everything else
/// (`null`, numbers, arrays, objects without a message) falls back to
/// [`UNKNOWN_ERROR_MESSAGE`].
pub fn error_message_from_value(value: &serde_json::Value) -> String {
    let candidate = match value {
        serde_json::Value::String(text) => Some(text.as_str()),
        serde_json::Value::Object(map) => map
            .get("message")
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .or_else(|| map.get("error").and_then(|v| v.as_str())),
        _ => None,
    };

    match candidate {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => UNKNOWN_ERROR_MESSAGE.to_string(),
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SurplusError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SurplusError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SurplusError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for SurplusError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error, used at the binary boundary
impl From<anyhow::Error> for SurplusError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, SurplusError>`.
pub type Result<T> = std::result::Result<T, SurplusError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn transport_error_displays_server_message() {
        let err = SurplusError::transport(Some(500), "Failed to fetch donations");
        assert_eq!(err.to_string(), "Failed to fetch donations");
        assert_eq!(err.status(), Some(500));
        assert!(err.is_transport());
    }

    #[test]
    fn error_message_uses_display() {
        let err = SurplusError::unauthorized("Invalid credentials");
        assert_eq!(error_message(&err), "Invalid credentials");
    }

    #[test]
    fn error_message_falls_back_for_empty_display() {
        let err = SurplusError::bad_response("   ");
        assert_eq!(error_message(&err), UNKNOWN_ERROR_MESSAGE);

        let io = std::io::Error::new(std::io::ErrorKind::Other, "");
        assert_eq!(error_message(&io), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn error_message_from_value_is_total() {
        let inputs = vec![
            json!(null),
            json!({}),
            json!({"message": ""}),
            json!({"message": 42}),
            json!([1, 2, 3]),
            json!(17),
            json!(true),
            json!(""),
        ];

        for input in inputs {
            let message = error_message_from_value(&input);
            assert_eq!(message, UNKNOWN_ERROR_MESSAGE, "input: {input}");
        }
    }

    #[test]
    fn error_message_from_value_extracts_message() {
        assert_eq!(
            error_message_from_value(&json!({"message": "Email already exists"})),
            "Email already exists"
        );
        assert_eq!(
            error_message_from_value(&json!({"error": "Validation error"})),
            "Validation error"
        );
        assert_eq!(error_message_from_value(&json!("boom")), "boom");
    }

    #[test]
    fn io_conversion_keeps_kind() {
        let err: SurplusError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, SurplusError::Io { .. }));
        assert!(err.to_string().contains("NotFound"));
    }
}
