//! Scripted [`ProviderApi`] test double.
//!
//! Records every call in order and can be told to fail at any individual
//! step, so tests can assert call counts and sequencing without a network.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::ProviderApi;
use crate::error::{ProviderError, Result};
use crate::types::{AccountMetadata, CampaignDraft, LoginInfo, MailingList, TokenResponse};

/// In-memory provider double with call recording and scripted failures.
#[derive(Debug)]
pub struct MockProvider {
    token: TokenResponse,
    metadata: AccountMetadata,
    lists: Vec<MailingList>,
    campaign_id: String,
    fail_exchange: bool,
    fail_metadata: bool,
    fail_lists: bool,
    fail_create: bool,
    fail_content: bool,
    fail_send: bool,
    log: Mutex<Vec<&'static str>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Create a mock that succeeds at every step with fixed fixtures.
    pub fn new() -> Self {
        Self {
            token: TokenResponse {
                access_token: "tok_1".to_string(),
                token_type: "bearer".to_string(),
                expires_in: Some(3600),
                refresh_token: None,
                scope: None,
            },
            metadata: AccountMetadata {
                dc: "us1".to_string(),
                accountname: "Acme".to_string(),
                user_id: Some(42),
                login: LoginInfo {
                    email: "a@acme.com".to_string(),
                },
                api_endpoint: Some("https://us1.api.mailchimp.com".to_string()),
            },
            lists: vec![MailingList {
                id: "list-1".to_string(),
                name: "Newsletter".to_string(),
                member_count: 120,
            }],
            campaign_id: "cmp_1".to_string(),
            fail_exchange: false,
            fail_metadata: false,
            fail_lists: false,
            fail_create: false,
            fail_content: false,
            fail_send: false,
            log: Mutex::new(Vec::new()),
        }
    }

    /// Replace the token returned by `exchange_code`.
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.token.access_token = access_token.into();
        self
    }

    /// Replace the account metadata fixture.
    pub fn with_metadata(
        mut self,
        dc: impl Into<String>,
        accountname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.metadata.dc = dc.into();
        self.metadata.accountname = accountname.into();
        self.metadata.login.email = email.into();
        self
    }

    /// Replace the lists fixture.
    pub fn with_lists(mut self, lists: Vec<MailingList>) -> Self {
        self.lists = lists;
        self
    }

    /// Replace the campaign id assigned by `create_campaign`.
    pub fn with_campaign_id(mut self, campaign_id: impl Into<String>) -> Self {
        self.campaign_id = campaign_id.into();
        self
    }

    /// Fail the token exchange.
    pub fn failing_exchange(mut self) -> Self {
        self.fail_exchange = true;
        self
    }

    /// Fail the metadata fetch.
    pub fn failing_metadata(mut self) -> Self {
        self.fail_metadata = true;
        self
    }

    /// Fail the lists fetch.
    pub fn failing_lists(mut self) -> Self {
        self.fail_lists = true;
        self
    }

    /// Fail campaign creation.
    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    /// Fail the content upload.
    pub fn failing_content(mut self) -> Self {
        self.fail_content = true;
        self
    }

    /// Fail the final send.
    pub fn failing_send(mut self) -> Self {
        self.fail_send = true;
        self
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.log.lock().expect("mock call log poisoned").clone()
    }

    fn record(&self, name: &'static str) {
        self.log.lock().expect("mock call log poisoned").push(name);
    }

    fn count(&self, name: &'static str) -> usize {
        self.calls().iter().filter(|c| **c == name).count()
    }

    pub fn exchange_calls(&self) -> usize {
        self.count("exchange_code")
    }

    pub fn metadata_calls(&self) -> usize {
        self.count("fetch_account_metadata")
    }

    pub fn lists_calls(&self) -> usize {
        self.count("fetch_lists")
    }

    pub fn create_calls(&self) -> usize {
        self.count("create_campaign")
    }

    pub fn content_calls(&self) -> usize {
        self.count("set_campaign_content")
    }

    pub fn send_calls(&self) -> usize {
        self.count("send_campaign")
    }
}

#[async_trait]
impl ProviderApi for MockProvider {
    async fn exchange_code(&self, _code: &str) -> Result<TokenResponse> {
        self.record("exchange_code");
        if self.fail_exchange {
            return Err(ProviderError::Auth { status: 400 });
        }
        Ok(self.token.clone())
    }

    async fn fetch_account_metadata(&self, _access_token: &str) -> Result<AccountMetadata> {
        self.record("fetch_account_metadata");
        if self.fail_metadata {
            return Err(ProviderError::Auth { status: 401 });
        }
        Ok(self.metadata.clone())
    }

    async fn fetch_lists(&self, _access_token: &str, _dc: &str) -> Result<Vec<MailingList>> {
        self.record("fetch_lists");
        if self.fail_lists {
            return Err(ProviderError::Api { status: 500 });
        }
        Ok(self.lists.clone())
    }

    async fn create_campaign(
        &self,
        _access_token: &str,
        _dc: &str,
        _draft: &CampaignDraft,
    ) -> Result<String> {
        self.record("create_campaign");
        if self.fail_create {
            return Err(ProviderError::Api { status: 500 });
        }
        Ok(self.campaign_id.clone())
    }

    async fn set_campaign_content(
        &self,
        _access_token: &str,
        _dc: &str,
        _campaign_id: &str,
        _html: &str,
    ) -> Result<()> {
        self.record("set_campaign_content");
        if self.fail_content {
            return Err(ProviderError::Api { status: 500 });
        }
        Ok(())
    }

    async fn send_campaign(&self, _access_token: &str, _dc: &str, _campaign_id: &str) -> Result<()> {
        self.record("send_campaign");
        if self.fail_send {
            return Err(ProviderError::Api { status: 500 });
        }
        Ok(())
    }
}
