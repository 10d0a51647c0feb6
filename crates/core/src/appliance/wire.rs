//! Wire formats shared between the client and the gateway.

use serde::{Deserialize, Serialize};

/// Error envelope carried by every non-200 gateway response:
/// `{"error":{"message":"..."}}`.
///
/// The client decodes this best-effort; a body that does not match the
/// envelope is treated as an empty message, never as a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorMessage,
}

/// Inner payload of [`ErrorEnvelope`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorEnvelope {
    /// Creates an envelope wrapping the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorMessage {
                message: message.into(),
            },
        }
    }
}

/// Body of every state-changing POST: `{"passphrase":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOperationBody {
    pub passphrase: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_decodes_message() {
        let body = r#"{"error":{"message":"unknown appliance"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.message, "unknown appliance");
    }

    #[test]
    fn test_error_envelope_rejects_missing_message() {
        let result: Result<ErrorEnvelope, _> = serde_json::from_str(r#"{"error":{}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_envelope_rejects_flat_shape() {
        let result: Result<ErrorEnvelope, _> = serde_json::from_str(r#"{"message":"flat"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_post_operation_body_wire_shape() {
        let body = PostOperationBody {
            passphrase: "secret".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"passphrase":"secret"}"#);
    }
}
