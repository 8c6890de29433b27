//! Error types for provider calls.
//!
//! Display messages are deliberately generic: raw provider error bodies are
//! logged at the call site and must never reach an external caller.

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors that can occur when calling the provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Transport-level failure before a response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The token or metadata endpoint returned a non-success status.
    #[error("Provider rejected the authorization exchange (status {status})")]
    Auth { status: u16 },

    /// A data-API call returned a non-success status.
    #[error("Provider API call failed (status {status})")]
    Api { status: u16 },

    /// A response body could not be decoded.
    #[error("Failed to decode provider response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        ProviderError::Network(e.to_string())
    }
}
