//! Session status and disconnect endpoints.

use axum::{Json, extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::envelope::ApiEnvelope;
use crate::routes::session_id_from_headers;
use crate::state::AppState;

/// Connection status payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusData {
    pub is_connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

/// GET /status - report connection state for the caller's session.
///
/// An absent session is the normal unconnected state, never an error.
#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = 200, description = "Connection status for the session header"),
    ),
    tag = "session"
)]
pub async fn status_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<ApiEnvelope<StatusData>> {
    let record = match session_id_from_headers(&headers) {
        Some(session_id) => state.sessions.get(&session_id).await,
        None => None,
    };

    let data = match record {
        Some(record) => StatusData {
            is_connected: true,
            account_name: Some(record.account.account_name),
            user_email: Some(record.account.login_email),
        },
        None => StatusData {
            is_connected: false,
            account_name: None,
            user_email: None,
        },
    };

    Json(ApiEnvelope::ok(data))
}

/// POST /disconnect - remove the session record unconditionally.
///
/// Idempotent: disconnecting an unknown or already-removed session still
/// reports success.
#[utoipa::path(
    post,
    path = "/disconnect",
    responses(
        (status = 200, description = "Session removed (or was already absent)"),
    ),
    tag = "session"
)]
pub async fn disconnect_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<ApiEnvelope<StatusData>> {
    if let Some(session_id) = session_id_from_headers(&headers) {
        let existed = state.sessions.remove(&session_id).await;
        debug!(existed, "disconnect requested");
    }

    Json(ApiEnvelope::ok(StatusData {
        is_connected: false,
        account_name: None,
        user_email: None,
    }))
}
