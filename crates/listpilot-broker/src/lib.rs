//! OAuth connect state machine and campaign-send orchestration.
//!
//! Two components with real partial-failure semantics live here:
//!
//! - [`OAuthBroker`] runs the authorization-code → access-token →
//!   account-metadata → session-creation pipeline. Both HTTP entry points
//!   (the provider redirect callback and the direct token endpoint) invoke
//!   this one implementation; only the result adaptation differs.
//! - [`CampaignOrchestrator`] runs the create → content → send sequence
//!   against the provider as one logical unit.

pub mod campaign;
pub mod connect;
pub mod error;

pub use campaign::CampaignOrchestrator;
pub use connect::{AuthorizationCallback, EstablishedSession, OAuthBroker};
pub use error::{BrokerError, Result};
