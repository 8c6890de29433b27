//! Application state shared across handlers.

use std::sync::Arc;

use listpilot_broker::{CampaignOrchestrator, OAuthBroker};
use listpilot_provider::ProviderApi;
use listpilot_session::SessionStore;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// The session store is owned here and injected into the broker; nothing
/// else mutates session records.
#[derive(Clone)]
pub struct AppState {
    /// Outbound provider client.
    pub provider: Arc<dyn ProviderApi>,

    /// Session store, sole owner of connectivity state.
    pub sessions: Arc<SessionStore>,

    /// OAuth connect state machine.
    pub broker: Arc<OAuthBroker>,

    /// Campaign-send orchestrator.
    pub campaigns: Arc<CampaignOrchestrator>,

    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire up the state graph from a provider client and configuration.
    pub fn new(provider: Arc<dyn ProviderApi>, config: ServerConfig) -> Self {
        let sessions = Arc::new(SessionStore::with_ttl(config.session_ttl));
        let broker = Arc::new(OAuthBroker::new(provider.clone(), sessions.clone()));
        let campaigns = Arc::new(CampaignOrchestrator::new(provider.clone()));

        Self {
            provider,
            sessions,
            broker,
            campaigns,
            config: Arc::new(config),
        }
    }
}
