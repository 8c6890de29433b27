//! Campaign send endpoint.

use axum::{Json, extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use listpilot_provider::CampaignDraft;

use crate::envelope::ApiEnvelope;
use crate::error::ServerError;
use crate::routes::require_session;
use crate::state::AppState;

/// Campaign draft as submitted by the frontend.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendCampaignRequest {
    #[serde(default)]
    pub list_id: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub html_content: String,
    #[serde(default)]
    pub from_name: String,
    #[serde(default)]
    pub reply_to: String,
}

impl From<SendCampaignRequest> for CampaignDraft {
    fn from(request: SendCampaignRequest) -> Self {
        CampaignDraft {
            list_id: request.list_id,
            subject: request.subject,
            html_content: request.html_content,
            from_name: request.from_name,
            reply_to: request.reply_to,
        }
    }
}

/// Result of a completed send.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignData {
    pub campaign_id: String,
    pub status: String,
    pub message: String,
}

/// POST /campaign/send - create, fill, and send one campaign.
#[utoipa::path(
    post,
    path = "/campaign/send",
    request_body = SendCampaignRequest,
    responses(
        (status = 200, description = "Campaign sent"),
        (status = 400, description = "Draft validation failed; nothing attempted upstream"),
        (status = 401, description = "No established session"),
        (status = 502, description = "A provider step failed; a partial campaign may remain upstream"),
    ),
    tag = "campaign"
)]
pub async fn send_campaign_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SendCampaignRequest>,
) -> Result<Json<ApiEnvelope<CampaignData>>, ServerError> {
    let session = require_session(&state, &headers).await?;
    let draft: CampaignDraft = request.into();

    let result = state.campaigns.send(&session, &draft).await?;

    Ok(Json(ApiEnvelope::ok(CampaignData {
        campaign_id: result.campaign_id,
        status: result.status,
        message: result.message,
    })))
}
