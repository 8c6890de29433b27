//! Uniform response envelope.
//!
//! Every JSON endpoint replies with `{ success, message?, data }`: `data`
//! present and `message` absent on success, `message` present and `data`
//! null on failure.

use serde::{Deserialize, Serialize};

/// The response envelope shared by all JSON endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Successful envelope carrying a payload.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Failure envelope carrying a message and null data.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}
