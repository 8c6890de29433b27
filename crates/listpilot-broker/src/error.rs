//! Broker error taxonomy.

use listpilot_provider::ProviderError;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, BrokerError>;

/// Errors produced by the OAuth broker and campaign orchestrator.
///
/// Validation failures (`MissingAuthorizationCode`, `InvalidDraft`) are
/// raised before any outbound call. Upstream failures wrap the sanitized
/// provider error; raw provider bodies were already logged at the client
/// boundary and never appear here.
#[derive(Debug, thiserror::Error)]
pub enum BrokerError {
    /// No authorization code was supplied.
    #[error("Authorization code is required")]
    MissingAuthorizationCode,

    /// The provider redirected back with its own error instead of a code
    /// (user rejected consent, or a provider-side OAuth failure).
    #[error("Authorization was denied: {error}")]
    ProviderDenied {
        error: String,
        description: Option<String>,
    },

    /// Token exchange or metadata fetch failed.
    #[error("Failed to complete authorization with the provider")]
    UpstreamAuth(#[source] ProviderError),

    /// A list or campaign call failed.
    #[error("Provider API request failed")]
    UpstreamApi(#[source] ProviderError),

    /// The campaign draft failed validation; nothing was attempted upstream.
    #[error("Invalid campaign draft: {0}")]
    InvalidDraft(String),

    /// No established session for the supplied identifier. The response is
    /// identical whether the session never existed or was disconnected.
    #[error("Not connected")]
    SessionNotFound,
}

impl BrokerError {
    /// Stable machine-readable code, used for callback redirect parameters.
    pub fn code(&self) -> &'static str {
        match self {
            BrokerError::MissingAuthorizationCode => "missing_authorization_code",
            BrokerError::ProviderDenied { .. } => "provider_denied",
            BrokerError::UpstreamAuth(_) => "upstream_auth_error",
            BrokerError::UpstreamApi(_) => "upstream_api_error",
            BrokerError::InvalidDraft(_) => "invalid_campaign_draft",
            BrokerError::SessionNotFound => "session_not_found",
        }
    }
}
