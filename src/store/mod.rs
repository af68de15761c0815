// Credential store backends
// Pluggable key-value storage for user records and session records.

pub mod memory;
pub mod redis;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::UserRecord;
use crate::session::SessionRecord;

/// Storage errors surfaced by a backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),

    #[error("store command error: {0}")]
    Command(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait over the external key-value store.
///
/// User records are read-only after seeding; session records are written
/// with a time-to-live and expire passively in the store itself. Every
/// operation is a single atomic key access, so no locking or transactions
/// exist above this trait.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a user record by email.
    async fn get_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Write a user record keyed by email, overwriting any existing one.
    async fn put_user(&self, user: &UserRecord) -> Result<(), StoreError>;

    /// Look up a session record by token. Expired records read as absent.
    async fn get_session(&self, token: &str) -> Result<Option<SessionRecord>, StoreError>;

    /// Write a session record with the given time-to-live in seconds.
    async fn put_session(
        &self,
        token: &str,
        record: &SessionRecord,
        ttl_secs: u64,
    ) -> Result<(), StoreError>;

    /// Delete a session record. Deleting an absent token is not an error.
    async fn delete_session(&self, token: &str) -> Result<(), StoreError>;
}
