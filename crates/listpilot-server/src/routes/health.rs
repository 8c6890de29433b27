//! Service info and connect acknowledgment endpoints.

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::envelope::ApiEnvelope;

/// Static service info payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
    /// Service status.
    pub status: String,
}

/// Connect acknowledgment payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConnectAck {
    /// Readiness indicator for starting the OAuth flow.
    pub status: String,
}

/// GET / - static health/info payload.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up"),
    ),
    tag = "health"
)]
pub async fn service_info() -> Json<ApiEnvelope<ServiceInfo>> {
    Json(ApiEnvelope::ok(ServiceInfo {
        service: "listpilot".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "ok".to_string(),
    }))
}

/// GET /connect - static acknowledgment, no state change.
#[utoipa::path(
    get,
    path = "/connect",
    responses(
        (status = 200, description = "Broker is ready to start the OAuth flow"),
    ),
    tag = "oauth"
)]
pub async fn connect_ack() -> Json<ApiEnvelope<ConnectAck>> {
    Json(ApiEnvelope::ok(ConnectAck {
        status: "ready".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_service_info_payload() {
        let Json(envelope) = service_info().await;
        assert!(envelope.success);
        let info = envelope.data.unwrap();
        assert_eq!(info.service, "listpilot");
        assert!(!info.version.is_empty());
    }

    #[tokio::test]
    async fn test_connect_ack_is_static() {
        let Json(envelope) = connect_ack().await;
        assert!(envelope.success);
        assert_eq!(envelope.data.unwrap().status, "ready");
    }
}
