//! Campaign-send orchestration.

use std::sync::Arc;

use tracing::{info, warn};

use listpilot_provider::{CampaignDraft, CampaignResult, ProviderApi};
use listpilot_session::SessionRecord;

use crate::error::{BrokerError, Result};

/// Runs the three-step remote send sequence as one logical unit.
pub struct CampaignOrchestrator {
    provider: Arc<dyn ProviderApi>,
}

impl CampaignOrchestrator {
    /// Create an orchestrator over an injected provider client.
    pub fn new(provider: Arc<dyn ProviderApi>) -> Self {
        Self { provider }
    }

    /// Create, fill, and send one campaign for an established session.
    ///
    /// The three provider calls run strictly in sequence; each step's input
    /// depends on the previous step's output. There is no compensation: if
    /// the content or send step fails, the half-configured campaign stays on
    /// the provider side for manual remediation.
    pub async fn send(
        &self,
        session: &SessionRecord,
        draft: &CampaignDraft,
    ) -> Result<CampaignResult> {
        if let Some(field) = draft.first_missing_field() {
            return Err(BrokerError::InvalidDraft(format!("{} is required", field)));
        }

        let token = &session.access_token;
        let dc = &session.account.dc;

        let campaign_id = self
            .provider
            .create_campaign(token, dc, draft)
            .await
            .map_err(BrokerError::UpstreamApi)?;

        if let Err(e) = self
            .provider
            .set_campaign_content(token, dc, &campaign_id, &draft.html_content)
            .await
        {
            warn!(campaign_id = %campaign_id, "content upload failed; draft campaign left on provider side");
            return Err(BrokerError::UpstreamApi(e));
        }

        if let Err(e) = self.provider.send_campaign(token, dc, &campaign_id).await {
            warn!(campaign_id = %campaign_id, "send failed; unsent campaign left on provider side");
            return Err(BrokerError::UpstreamApi(e));
        }

        info!(campaign_id = %campaign_id, list_id = %draft.list_id, "campaign sent");

        Ok(CampaignResult {
            campaign_id,
            status: "sent".to_string(),
            message: "Campaign sent successfully".to_string(),
        })
    }
}
