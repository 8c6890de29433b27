//! Outbound client for the email-marketing provider API.
//!
//! The provider's data API is datacenter-sharded: every data call is routed
//! to `https://{dc}.{api_domain}/3.0/...`, where `dc` comes from the account
//! metadata returned at connect time. The OAuth token and metadata endpoints
//! live on a fixed login host.
//!
//! # Components
//!
//! - [`client`]: the [`ProviderApi`] trait and its reqwest-backed implementation
//! - [`config`]: endpoint and credential configuration
//! - [`types`]: wire types for tokens, metadata, lists, and campaigns
//! - [`mock`]: scripted test double (behind the `testing` feature)

pub mod client;
pub mod config;
pub mod error;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod mock;

pub use client::{HttpProvider, ProviderApi};
pub use config::ProviderConfig;
pub use error::{ProviderError, Result};
pub use types::{
    AccountMetadata, CampaignDraft, CampaignResult, LoginInfo, MailingList, TokenResponse,
};

#[cfg(any(test, feature = "testing"))]
pub use mock::MockProvider;
