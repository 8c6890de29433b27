//! Connected-account session store.
//!
//! A session record exists if and only if a full token exchange plus metadata
//! fetch completed for its identifier; absence of a record is the sole signal
//! of "not connected". The store is the exclusive owner of these records:
//! the broker writes them, gated endpoints read them, disconnect removes them.

pub mod id;
pub mod record;
pub mod store;

pub use id::generate_session_id;
pub use record::{ConnectedAccount, SessionRecord};
pub use store::SessionStore;
