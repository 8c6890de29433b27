//! Provider endpoint and credential configuration.

/// Configuration for the provider's OAuth and data endpoints.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// OAuth client id registered with the provider.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Redirect URI registered for the authorization-code flow.
    pub redirect_uri: String,
    /// Token endpoint on the login host.
    pub token_url: String,
    /// Account metadata endpoint on the login host.
    pub metadata_url: String,
    /// Domain for datacenter-sharded data-API calls
    /// (`https://{dc}.{api_domain}/3.0`).
    pub api_domain: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::mailchimp()
    }
}

impl ProviderConfig {
    /// Create a config pointing at Mailchimp's production endpoints.
    ///
    /// Credentials are left empty; callers supply them from the environment.
    pub fn mailchimp() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: "http://localhost:8080/oauth-callback".to_string(),
            token_url: "https://login.mailchimp.com/oauth2/token".to_string(),
            metadata_url: "https://login.mailchimp.com/oauth2/metadata".to_string(),
            api_domain: "api.mailchimp.com".to_string(),
        }
    }

    /// Set the OAuth client id.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Set the OAuth client secret.
    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = client_secret.into();
        self
    }

    /// Set the registered redirect URI.
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = redirect_uri.into();
        self
    }

    /// Override the token endpoint (tests, mock servers).
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Override the metadata endpoint.
    pub fn with_metadata_url(mut self, metadata_url: impl Into<String>) -> Self {
        self.metadata_url = metadata_url.into();
        self
    }

    /// Override the data-API domain.
    pub fn with_api_domain(mut self, api_domain: impl Into<String>) -> Self {
        self.api_domain = api_domain.into();
        self
    }

    /// Base URL for data-API calls routed to the given datacenter.
    pub fn api_base(&self, dc: &str) -> String {
        format!("https://{}.{}/3.0", dc, self.api_domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_mailchimp() {
        let config = ProviderConfig::default();
        assert!(config.token_url.contains("login.mailchimp.com"));
        assert!(config.client_id.is_empty());
    }

    #[test]
    fn test_api_base_routes_to_datacenter() {
        let config = ProviderConfig::mailchimp();
        assert_eq!(config.api_base("us1"), "https://us1.api.mailchimp.com/3.0");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ProviderConfig::mailchimp()
            .with_client_id("id")
            .with_client_secret("secret")
            .with_api_domain("api.example.test");

        assert_eq!(config.client_id, "id");
        assert_eq!(config.api_base("eu2"), "https://eu2.api.example.test/3.0");
    }
}
