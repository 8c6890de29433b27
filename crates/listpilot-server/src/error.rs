//! Error types for the server.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use listpilot_broker::BrokerError;

use crate::envelope::ApiEnvelope;

/// Server error type.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Broker or orchestrator failure.
    #[error(transparent)]
    Broker(#[from] BrokerError),

    /// Malformed request.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServerError::Broker(e) => {
                let status = match e {
                    BrokerError::MissingAuthorizationCode
                    | BrokerError::ProviderDenied { .. }
                    | BrokerError::InvalidDraft(_) => StatusCode::BAD_REQUEST,
                    BrokerError::SessionNotFound => StatusCode::UNAUTHORIZED,
                    BrokerError::UpstreamAuth(_) | BrokerError::UpstreamApi(_) => {
                        StatusCode::BAD_GATEWAY
                    }
                };
                (status, e.code())
            }
            ServerError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ServerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, code, error = %message, "Server error");
        } else {
            tracing::warn!(status = %status, code, error = %message, "Client error");
        }

        let body = ApiEnvelope::<serde_json::Value>::error(message);
        (status, Json(body)).into_response()
    }
}
