//! API routes.

pub mod campaign;
pub mod health;
pub mod lists;
pub mod oauth;
pub mod openapi;
pub mod session;

pub use campaign::{CampaignData, SendCampaignRequest, send_campaign_handler};
pub use health::{connect_ack, service_info};
pub use lists::{ListInfo, ListsData, lists_handler};
pub use oauth::{
    ConnectionData, OAuthCallbackQuery, TokenExchangeRequest, exchange_token_handler,
    oauth_callback_handler,
};
pub use session::{StatusData, disconnect_handler, status_handler};

use axum::http::HeaderMap;

use listpilot_broker::BrokerError;
use listpilot_session::SessionRecord;

use crate::error::ServerError;
use crate::state::AppState;

/// Request/response header carrying the opaque session identifier.
pub const SESSION_HEADER: &str = "x-session-id";

/// Extract the session identifier from the request headers, if present.
pub(crate) fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Resolve the request's session record or fail with the uniform
/// unauthorized error. Missing header, unknown identifier, and disconnected
/// session are indistinguishable to the caller.
pub(crate) async fn require_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<SessionRecord, ServerError> {
    let session_id =
        session_id_from_headers(headers).ok_or(ServerError::Broker(BrokerError::SessionNotFound))?;
    state
        .sessions
        .get(&session_id)
        .await
        .ok_or(ServerError::Broker(BrokerError::SessionNotFound))
}
