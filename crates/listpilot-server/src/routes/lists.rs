//! Audience list retrieval.

use axum::{Json, extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use listpilot_broker::BrokerError;

use crate::envelope::ApiEnvelope;
use crate::error::ServerError;
use crate::routes::require_session;
use crate::state::AppState;

/// Lists payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListsData {
    pub lists: Vec<ListInfo>,
}

/// One audience list.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListInfo {
    pub id: String,
    pub name: String,
    pub stats: ListStats,
}

/// List statistics.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListStats {
    pub member_count: u64,
}

/// GET /lists - fetch the connected account's audience lists.
#[utoipa::path(
    get,
    path = "/lists",
    responses(
        (status = 200, description = "Audience lists for the connected account"),
        (status = 401, description = "No established session"),
        (status = 502, description = "Provider API call failed"),
    ),
    tag = "lists"
)]
pub async fn lists_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiEnvelope<ListsData>>, ServerError> {
    let session = require_session(&state, &headers).await?;

    let lists = state
        .provider
        .fetch_lists(&session.access_token, &session.account.dc)
        .await
        .map_err(BrokerError::UpstreamApi)?;

    let data = ListsData {
        lists: lists
            .into_iter()
            .map(|list| ListInfo {
                id: list.id,
                name: list.name,
                stats: ListStats {
                    member_count: list.member_count,
                },
            })
            .collect(),
    };

    Ok(Json(ApiEnvelope::ok(data)))
}
