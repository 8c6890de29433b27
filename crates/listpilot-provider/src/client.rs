//! The [`ProviderApi`] trait and its HTTP implementation.
//!
//! Every call is a single stateless outbound request: credentials come in as
//! parameters, nothing is cached, and nothing is retried. Retry policy, if
//! any, belongs to the caller.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::error::{ProviderError, Result};
use crate::types::{AccountMetadata, CampaignDraft, MailingList, TokenResponse};

/// Outbound calls against the email-marketing provider.
#[async_trait]
pub trait ProviderApi: Send + Sync {
    /// Exchange an authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> Result<TokenResponse>;

    /// Fetch metadata for the account the token is scoped to.
    async fn fetch_account_metadata(&self, access_token: &str) -> Result<AccountMetadata>;

    /// Fetch the account's audience lists from the given datacenter.
    async fn fetch_lists(&self, access_token: &str, dc: &str) -> Result<Vec<MailingList>>;

    /// Create a draft campaign; returns the provider-assigned campaign id.
    async fn create_campaign(
        &self,
        access_token: &str,
        dc: &str,
        draft: &CampaignDraft,
    ) -> Result<String>;

    /// Set the HTML content of an existing campaign.
    async fn set_campaign_content(
        &self,
        access_token: &str,
        dc: &str,
        campaign_id: &str,
        html: &str,
    ) -> Result<()>;

    /// Send a fully configured campaign.
    async fn send_campaign(&self, access_token: &str, dc: &str, campaign_id: &str) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire shapes private to the HTTP implementation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ListsEnvelope {
    lists: Vec<ListEntry>,
}

#[derive(Debug, Deserialize)]
struct ListEntry {
    id: String,
    name: String,
    stats: ListStats,
}

#[derive(Debug, Deserialize)]
struct ListStats {
    member_count: u64,
}

#[derive(Debug, Serialize)]
struct CreateCampaignRequest<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    recipients: CampaignRecipients<'a>,
    settings: CampaignSettings<'a>,
}

#[derive(Debug, Serialize)]
struct CampaignRecipients<'a> {
    list_id: &'a str,
}

#[derive(Debug, Serialize)]
struct CampaignSettings<'a> {
    subject_line: &'a str,
    from_name: &'a str,
    reply_to: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateCampaignResponse {
    id: String,
}

#[derive(Debug, Serialize)]
struct CampaignContentRequest<'a> {
    html: &'a str,
}

// ─────────────────────────────────────────────────────────────────────────────
// HttpProvider
// ─────────────────────────────────────────────────────────────────────────────

/// reqwest-backed implementation of [`ProviderApi`].
#[derive(Debug, Clone)]
pub struct HttpProvider {
    config: ProviderConfig,
    http: reqwest::Client,
}

impl HttpProvider {
    /// Create a provider client with the given configuration.
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Access the endpoint configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// Log the raw error body at the provider boundary and return a sanitized
/// auth error. The body never reaches an external caller.
async fn auth_failure(response: reqwest::Response, endpoint: &'static str) -> ProviderError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".to_string());
    tracing::warn!(status, endpoint, body = %body, "provider auth endpoint returned an error");
    ProviderError::Auth { status }
}

/// Same as [`auth_failure`] for data-API calls.
async fn api_failure(response: reqwest::Response, endpoint: &'static str) -> ProviderError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".to_string());
    tracing::warn!(status, endpoint, body = %body, "provider API call returned an error");
    ProviderError::Api { status }
}

#[async_trait]
impl ProviderApi for HttpProvider {
    async fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
        let params = [
            ("grant_type", "authorization_code"),
            ("client_id", &self.config.client_id),
            ("client_secret", &self.config.client_secret),
            ("redirect_uri", &self.config.redirect_uri),
            ("code", code),
        ];

        let response = self
            .http
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(auth_failure(response, "token").await);
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| ProviderError::Decode(format!("token response: {}", e)))
    }

    async fn fetch_account_metadata(&self, access_token: &str) -> Result<AccountMetadata> {
        let response = self
            .http
            .get(&self.config.metadata_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(auth_failure(response, "metadata").await);
        }

        response
            .json::<AccountMetadata>()
            .await
            .map_err(|e| ProviderError::Decode(format!("metadata response: {}", e)))
    }

    async fn fetch_lists(&self, access_token: &str, dc: &str) -> Result<Vec<MailingList>> {
        let url = format!("{}/lists", self.config.api_base(dc));
        let response = self.http.get(&url).bearer_auth(access_token).send().await?;

        if !response.status().is_success() {
            return Err(api_failure(response, "lists").await);
        }

        let envelope = response
            .json::<ListsEnvelope>()
            .await
            .map_err(|e| ProviderError::Decode(format!("lists response: {}", e)))?;

        Ok(envelope
            .lists
            .into_iter()
            .map(|entry| MailingList {
                id: entry.id,
                name: entry.name,
                member_count: entry.stats.member_count,
            })
            .collect())
    }

    async fn create_campaign(
        &self,
        access_token: &str,
        dc: &str,
        draft: &CampaignDraft,
    ) -> Result<String> {
        let url = format!("{}/campaigns", self.config.api_base(dc));
        let body = CreateCampaignRequest {
            kind: "regular",
            recipients: CampaignRecipients {
                list_id: &draft.list_id,
            },
            settings: CampaignSettings {
                subject_line: &draft.subject,
                from_name: &draft.from_name,
                reply_to: &draft.reply_to,
            },
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(access_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_failure(response, "campaign create").await);
        }

        let created = response
            .json::<CreateCampaignResponse>()
            .await
            .map_err(|e| ProviderError::Decode(format!("campaign create response: {}", e)))?;

        Ok(created.id)
    }

    async fn set_campaign_content(
        &self,
        access_token: &str,
        dc: &str,
        campaign_id: &str,
        html: &str,
    ) -> Result<()> {
        let url = format!("{}/campaigns/{}/content", self.config.api_base(dc), campaign_id);
        let response = self
            .http
            .put(&url)
            .bearer_auth(access_token)
            .json(&CampaignContentRequest { html })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_failure(response, "campaign content").await);
        }

        Ok(())
    }

    async fn send_campaign(&self, access_token: &str, dc: &str, campaign_id: &str) -> Result<()> {
        let url = format!(
            "{}/campaigns/{}/actions/send",
            self.config.api_base(dc),
            campaign_id
        );
        let response = self.http.post(&url).bearer_auth(access_token).send().await?;

        if !response.status().is_success() {
            return Err(api_failure(response, "campaign send").await);
        }

        Ok(())
    }
}
