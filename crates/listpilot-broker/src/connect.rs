//! The OAuth connect state machine.
//!
//! Transitions: code received → token exchanged → metadata fetched →
//! session established, failing terminally at any step. Authorization codes
//! are single-use by provider contract; a failed run is never retried with
//! the same code.

use std::sync::Arc;

use tracing::{info, warn};

use listpilot_provider::ProviderApi;
use listpilot_session::{ConnectedAccount, SessionStore, generate_session_id};

use crate::error::{BrokerError, Result};

/// Classified outcome of the provider's authorization redirect.
///
/// Both HTTP entry points build one of these and hand it to
/// [`OAuthBroker::connect`], so the state machine has a single source of
/// truth regardless of transport.
#[derive(Debug, Clone)]
pub enum AuthorizationCallback {
    /// The provider issued an authorization code.
    Granted { code: String },
    /// The provider redirected with its own `error` parameter.
    Denied {
        error: String,
        description: Option<String>,
    },
    /// Neither a code nor a provider error was supplied.
    Missing,
}

impl AuthorizationCallback {
    /// Classify raw callback parameters.
    ///
    /// A provider-reported error takes precedence over a code; an empty or
    /// whitespace-only code counts as missing.
    pub fn from_parts(
        code: Option<String>,
        error: Option<String>,
        description: Option<String>,
    ) -> Self {
        if let Some(error) = error.filter(|e| !e.trim().is_empty()) {
            return AuthorizationCallback::Denied { error, description };
        }
        match code {
            Some(code) if !code.trim().is_empty() => AuthorizationCallback::Granted { code },
            _ => AuthorizationCallback::Missing,
        }
    }
}

/// Successful connect outcome handed back to the transport adapters.
#[derive(Debug, Clone)]
pub struct EstablishedSession {
    pub session_id: String,
    pub account_name: String,
    pub login_email: String,
}

/// Orchestrates the authorization-code → session-creation pipeline.
pub struct OAuthBroker {
    provider: Arc<dyn ProviderApi>,
    sessions: Arc<SessionStore>,
}

impl OAuthBroker {
    /// Create a broker over an injected provider client and session store.
    pub fn new(provider: Arc<dyn ProviderApi>, sessions: Arc<SessionStore>) -> Self {
        Self { provider, sessions }
    }

    /// Run the connect state machine for one callback.
    ///
    /// Session creation is the only externally observable side effect and
    /// happens only after both the token exchange and the metadata fetch
    /// succeed; a token without metadata is dropped, never stored.
    pub async fn connect(&self, callback: AuthorizationCallback) -> Result<EstablishedSession> {
        let code = match callback {
            AuthorizationCallback::Granted { code } => code,
            AuthorizationCallback::Denied { error, description } => {
                warn!(error = %error, "provider denied authorization");
                return Err(BrokerError::ProviderDenied { error, description });
            }
            AuthorizationCallback::Missing => {
                return Err(BrokerError::MissingAuthorizationCode);
            }
        };

        let token = self
            .provider
            .exchange_code(&code)
            .await
            .map_err(BrokerError::UpstreamAuth)?;

        let metadata = self
            .provider
            .fetch_account_metadata(&token.access_token)
            .await
            .map_err(BrokerError::UpstreamAuth)?;

        let session_id = generate_session_id();
        let account = ConnectedAccount {
            dc: metadata.dc,
            account_name: metadata.accountname,
            login_email: metadata.login.email,
        };
        self.sessions
            .put(&session_id, token.access_token, account.clone())
            .await;

        info!(account = %account.account_name, dc = %account.dc, "session established");

        Ok(EstablishedSession {
            session_id,
            account_name: account.account_name,
            login_email: account.login_email,
        })
    }
}
