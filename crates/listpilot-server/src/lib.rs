//! HTTP API surface for the listpilot OAuth broker.
//!
//! A thin request/response mapping over the broker and orchestrator: every
//! handler classifies its input, invokes one core operation, and adapts the
//! result into the uniform `{ success, message?, data }` envelope (or, for
//! the OAuth callback, into a frontend redirect).
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use listpilot_provider::{HttpProvider, ProviderConfig};
//! use listpilot_server::{Server, ServerConfig};
//!
//! let provider = Arc::new(HttpProvider::new(ProviderConfig::mailchimp()));
//! let config = ServerConfig::default().with_frontend_url("http://localhost:3000");
//! let server = Server::new(provider, config);
//! server.run().await?;
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use envelope::ApiEnvelope;
pub use error::{Result, ServerError};
pub use routes::SESSION_HEADER;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, HeaderValue},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use listpilot_provider::ProviderApi;

/// The listpilot HTTP server.
pub struct Server {
    state: AppState,
}

impl Server {
    /// Create a new server over the given provider client and configuration.
    pub fn new(provider: Arc<dyn ProviderApi>, config: ServerConfig) -> Self {
        Self {
            state: AppState::new(provider, config),
        }
    }

    /// Create a server from a pre-built application state.
    pub fn from_state(state: AppState) -> Self {
        Self { state }
    }

    /// Build the router with all routes and middleware.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(routes::health::service_info))
            .route("/connect", get(routes::health::connect_ack))
            .route("/oauth-callback", get(routes::oauth::oauth_callback_handler))
            .route("/oauth/token", post(routes::oauth::exchange_token_handler))
            .route("/status", get(routes::session::status_handler))
            .route("/lists", get(routes::lists::lists_handler))
            .route("/campaign/send", post(routes::campaign::send_campaign_handler))
            .route("/disconnect", post(routes::session::disconnect_handler))
            .merge(routes::openapi::swagger_ui())
            .layer(self.cors_layer())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// CORS for the browser frontend. The session-identifier header must be
    /// exposed so the SPA can read it off the token-exchange response.
    fn cors_layer(&self) -> CorsLayer {
        let origin = if self.state.config.cors_origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(
                self.state
                    .config
                    .cors_origins
                    .iter()
                    .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
            )
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
            .expose_headers([HeaderName::from_static(SESSION_HEADER)])
    }

    /// Run the server.
    pub async fn run(self) -> Result<()> {
        let addr = self.state.config.bind_address;
        self.run_on(addr).await
    }

    /// Run the server on a specific address (useful for testing).
    pub async fn run_on(self, addr: SocketAddr) -> Result<()> {
        let router = self.router();

        info!("Starting server on {}", addr);

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Internal(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get the configured bind address.
    pub fn bind_address(&self) -> SocketAddr {
        self.state.config.bind_address
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use listpilot_provider::MockProvider;
    use tower::ServiceExt;

    fn create_test_server() -> Server {
        Server::new(Arc::new(MockProvider::new()), ServerConfig::default())
    }

    #[tokio::test]
    async fn test_root_endpoint() {
        let app = create_test_server().router();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_connect_endpoint() {
        let app = create_test_server().router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/connect")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_openapi_json_served() {
        let app = create_test_server().router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
