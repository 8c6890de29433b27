//! Wire types for provider responses and campaign operations.

use serde::{Deserialize, Serialize};

/// Response from the provider's token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Account metadata returned by the provider's metadata endpoint.
///
/// `dc` is the datacenter shard; every data-API call for this account must be
/// routed to the `dc`-specific host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountMetadata {
    pub dc: String,
    pub accountname: String,
    #[serde(default)]
    pub user_id: Option<u64>,
    pub login: LoginInfo,
    #[serde(default)]
    pub api_endpoint: Option<String>,
}

/// Login details embedded in account metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInfo {
    pub email: String,
}

/// One audience list owned by the connected account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailingList {
    pub id: String,
    pub name: String,
    pub member_count: u64,
}

/// Caller-supplied description of one outbound send.
///
/// Ephemeral: exists only for the duration of a single send operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignDraft {
    pub list_id: String,
    pub subject: String,
    pub html_content: String,
    pub from_name: String,
    pub reply_to: String,
}

impl CampaignDraft {
    /// Return the API-facing name of the first empty field, if any.
    ///
    /// All five fields are required; validation runs before any outbound call.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        if self.list_id.trim().is_empty() {
            return Some("listId");
        }
        if self.subject.trim().is_empty() {
            return Some("subject");
        }
        if self.html_content.trim().is_empty() {
            return Some("htmlContent");
        }
        if self.from_name.trim().is_empty() {
            return Some("fromName");
        }
        if self.reply_to.trim().is_empty() {
            return Some("replyTo");
        }
        None
    }
}

/// Outcome of a completed campaign send.
///
/// `campaign_id` is assigned by the provider and is opaque to this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignResult {
    pub campaign_id: String,
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> CampaignDraft {
        CampaignDraft {
            list_id: "list-1".to_string(),
            subject: "Hello".to_string(),
            html_content: "<p>Hi</p>".to_string(),
            from_name: "Acme".to_string(),
            reply_to: "news@acme.com".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_missing_fields() {
        assert_eq!(valid_draft().first_missing_field(), None);
    }

    #[test]
    fn test_empty_list_id_reported_first() {
        let draft = CampaignDraft {
            list_id: String::new(),
            ..valid_draft()
        };
        assert_eq!(draft.first_missing_field(), Some("listId"));
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let draft = CampaignDraft {
            subject: "   ".to_string(),
            ..valid_draft()
        };
        assert_eq!(draft.first_missing_field(), Some("subject"));
    }

    #[test]
    fn test_token_response_optional_fields() {
        let json = r#"{"access_token":"tok_1","token_type":"bearer"}"#;
        let parsed: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access_token, "tok_1");
        assert!(parsed.expires_in.is_none());
        assert!(parsed.refresh_token.is_none());
    }

    #[test]
    fn test_account_metadata_parsing() {
        let json = r#"{
            "dc": "us1",
            "accountname": "Acme",
            "user_id": 42,
            "login": {"email": "a@acme.com"},
            "api_endpoint": "https://us1.api.mailchimp.com"
        }"#;
        let parsed: AccountMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.dc, "us1");
        assert_eq!(parsed.accountname, "Acme");
        assert_eq!(parsed.login.email, "a@acme.com");
    }
}
