//! Session record types.

use chrono::{DateTime, Utc};

/// Snapshot of the connected provider account, immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedAccount {
    /// Datacenter shard; all data-API calls for this account route here.
    pub dc: String,
    /// Account display name.
    pub account_name: String,
    /// Account owner email.
    pub login_email: String,
}

/// One authenticated linkage between a browser session and a provider account.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    /// Opaque broker-generated identifier; never produced by the client.
    pub session_id: String,
    /// Bearer credential for provider calls. Write-once; never exposed to
    /// the API surface beyond internal use.
    pub access_token: String,
    /// Account metadata captured at connect time.
    pub account: ConnectedAccount,
    /// Creation timestamp.
    pub connected_at: DateTime<Utc>,
}
