//! OAuth entry points.
//!
//! Two thin adapters over the one broker state machine: the provider's
//! redirect callback (browser navigation, result carried in redirect query
//! parameters) and the direct token endpoint (programmatic caller, result
//! carried as JSON plus a session-identifier response header).

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::{IntoParams, ToSchema};

use listpilot_broker::{AuthorizationCallback, BrokerError, EstablishedSession};

use crate::envelope::ApiEnvelope;
use crate::error::ServerError;
use crate::routes::SESSION_HEADER;
use crate::state::AppState;

/// Query parameters delivered by the provider's authorization redirect.
#[derive(Debug, Deserialize, IntoParams)]
pub struct OAuthCallbackQuery {
    /// Single-use authorization code.
    pub code: Option<String>,
    /// Opaque state round-tripped through the provider.
    pub state: Option<String>,
    /// Provider-reported OAuth error.
    pub error: Option<String>,
    /// Human-readable detail for a provider-reported error.
    pub error_description: Option<String>,
}

/// Body of the direct token-exchange endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenExchangeRequest {
    /// Single-use authorization code.
    pub code: Option<String>,
    /// Opaque state round-tripped through the provider; carried, not verified.
    pub state: Option<String>,
}

/// Connection data returned on a successful token exchange.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionData {
    pub is_connected: bool,
    pub account_name: String,
    pub user_email: String,
}

/// GET /oauth-callback - provider-invoked redirect target.
///
/// Redirect-only: every outcome, success or failure, becomes query
/// parameters on a redirect to the frontend. The caller is a browser
/// navigation, so HTTP status codes would be meaningless here.
#[utoipa::path(
    get,
    path = "/oauth-callback",
    params(OAuthCallbackQuery),
    responses(
        (status = 303, description = "Redirects to the frontend with session or error parameters"),
    ),
    tag = "oauth"
)]
pub async fn oauth_callback_handler(
    State(state): State<AppState>,
    Query(query): Query<OAuthCallbackQuery>,
) -> Redirect {
    let callback =
        AuthorizationCallback::from_parts(query.code, query.error, query.error_description);

    let url = match state.broker.connect(callback).await {
        Ok(established) => success_redirect_url(&state.config.frontend_url, &established),
        Err(e) => {
            warn!(code = e.code(), "oauth callback failed");
            error_redirect_url(&state.config.frontend_url, &e)
        }
    };

    Redirect::to(&url)
}

/// POST /oauth/token - direct token exchange for the frontend.
///
/// Runs the same broker state machine as the callback; on success the
/// session identifier travels in the `X-Session-Id` response header.
#[utoipa::path(
    post,
    path = "/oauth/token",
    request_body = TokenExchangeRequest,
    responses(
        (status = 200, description = "Session established; identifier in the X-Session-Id header"),
        (status = 400, description = "Missing authorization code"),
        (status = 502, description = "Provider exchange failed"),
    ),
    tag = "oauth"
)]
pub async fn exchange_token_handler(
    State(state): State<AppState>,
    Json(request): Json<TokenExchangeRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let callback = AuthorizationCallback::from_parts(request.code, None, None);
    let established = state.broker.connect(callback).await?;

    let envelope = ApiEnvelope::ok(ConnectionData {
        is_connected: true,
        account_name: established.account_name.clone(),
        user_email: established.login_email.clone(),
    });

    Ok((
        [(SESSION_HEADER, established.session_id)],
        Json(envelope),
    ))
}

fn frontend_callback_base(frontend_url: &str) -> String {
    format!("{}/oauth-callback", frontend_url.trim_end_matches('/'))
}

/// Build the success redirect carrying the session identifier.
pub(crate) fn success_redirect_url(frontend_url: &str, session: &EstablishedSession) -> String {
    format!(
        "{}?success=true&session_id={}&account_name={}&user_email={}",
        frontend_callback_base(frontend_url),
        urlencoding::encode(&session.session_id),
        urlencoding::encode(&session.account_name),
        urlencoding::encode(&session.login_email),
    )
}

/// Build the failure redirect carrying the error kind and detail.
pub(crate) fn error_redirect_url(frontend_url: &str, error: &BrokerError) -> String {
    format!(
        "{}?error={}&error_description={}",
        frontend_callback_base(frontend_url),
        error.code(),
        urlencoding::encode(&error.to_string()),
    )
}
