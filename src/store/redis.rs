// Redis-backed credential store
// One multiplexed connection is opened at startup and shared across all
// requests; session expiry is enforced by the store's own TTL mechanism.

use std::sync::Arc;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tokio::sync::Mutex;
use tracing::info;

use super::{CredentialStore, StoreError};
use crate::models::UserRecord;
use crate::session::SessionRecord;

pub struct RedisStore {
    conn: Arc<Mutex<MultiplexedConnection>>,
}

impl RedisStore {
    /// Connect to the store at the given URL.
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        let conn = client
            .get_multiplexed_tokio_connection()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        info!("Connected to credential store");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn user_key(email: &str) -> String {
        format!("user:{}", email)
    }

    fn session_key(token: &str) -> String {
        format!("session:{}", token)
    }
}

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        StoreError::Command(err.to_string())
    }
}

#[async_trait]
impl CredentialStore for RedisStore {
    async fn get_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let mut conn = self.conn.lock().await;
        let raw: Option<String> = conn.get(Self::user_key(email)).await?;

        raw.map(|s| serde_json::from_str(&s))
            .transpose()
            .map_err(Into::into)
    }

    async fn put_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user)?;
        let mut conn = self.conn.lock().await;
        let _: () = conn.set(Self::user_key(&user.email), raw).await?;
        Ok(())
    }

    async fn get_session(&self, token: &str) -> Result<Option<SessionRecord>, StoreError> {
        let mut conn = self.conn.lock().await;
        let raw: Option<String> = conn.get(Self::session_key(token)).await?;

        raw.map(|s| serde_json::from_str(&s))
            .transpose()
            .map_err(Into::into)
    }

    async fn put_session(
        &self,
        token: &str,
        record: &SessionRecord,
        ttl_secs: u64,
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(record)?;
        let mut conn = self.conn.lock().await;
        let _: () = conn.set_ex(Self::session_key(token), raw, ttl_secs).await?;
        Ok(())
    }

    async fn delete_session(&self, token: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.lock().await;
        let _: () = conn.del(Self::session_key(token)).await?;
        Ok(())
    }
}
