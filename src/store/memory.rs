// In-memory credential store
// Test double for the Redis backend; the time-to-live is honored passively
// on read, matching the store-enforced expiry of the real backend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use super::{CredentialStore, StoreError};
use crate::models::UserRecord;
use crate::session::SessionRecord;

pub struct MemoryStore {
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
    sessions: Arc<RwLock<HashMap<String, (SessionRecord, DateTime<Utc>)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn get_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn put_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        users.insert(user.email.clone(), user.clone());
        Ok(())
    }

    async fn get_session(&self, token: &str) -> Result<Option<SessionRecord>, StoreError> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some((record, expires_at)) if Utc::now() <= *expires_at => {
                    return Ok(Some(record.clone()));
                }
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // Expired: drop the record so the invariant (present iff live) holds
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
        Ok(None)
    }

    async fn put_session(
        &self,
        token: &str,
        record: &SessionRecord,
        ttl_secs: u64,
    ) -> Result<(), StoreError> {
        let expires_at = Utc::now() + Duration::seconds(ttl_secs as i64);
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.to_string(), (record.clone(), expires_at));
        Ok(())
    }

    async fn delete_session(&self, token: &str) -> Result<(), StoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
        Ok(())
    }
}
