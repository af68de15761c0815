// Session manager for the login / validate / logout lifecycle

use std::sync::Arc;

use tracing::{info, warn};

use super::types::{generate_token, SessionConfig, SessionRecord, SessionValidation};
use crate::auth::verify_password;
use crate::error::AuthError;
use crate::models::PublicUser;
use crate::store::CredentialStore;

/// Token and public user view returned by a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub session_id: String,
    pub user: PublicUser,
}

/// Translates credential checks into session tokens and validates and
/// revokes tokens. Session records in the store are owned exclusively by
/// this type.
pub struct SessionManager {
    store: Arc<dyn CredentialStore>,
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(store: Arc<dyn CredentialStore>, config: SessionConfig) -> Self {
        Self { store, config }
    }

    /// Check credentials and issue a session token.
    ///
    /// Unknown emails and wrong passwords produce the identical
    /// `InvalidCredentials` error. On success exactly one session record is
    /// written, with the configured fixed time-to-live.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let user = self
            .store
            .get_user(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = generate_token();
        let record = SessionRecord::new(PublicUser::from(user));
        self.store
            .put_session(&token, &record, self.config.ttl_secs)
            .await?;

        info!("Created session for user {}", record.user.id);

        Ok(LoginOutcome {
            session_id: token,
            user: record.user,
        })
    }

    /// Look up a token and return the stored user snapshot.
    ///
    /// Never fails: an empty token short-circuits without touching the
    /// store, and store errors degrade to an invalid result. Validation
    /// does not extend the session's expiry.
    pub async fn validate(&self, token: &str) -> SessionValidation {
        if token.is_empty() {
            return SessionValidation::invalid();
        }

        match self.store.get_session(token).await {
            Ok(Some(record)) => SessionValidation {
                valid: true,
                user: Some(record.user),
            },
            Ok(None) => SessionValidation::invalid(),
            Err(err) => {
                warn!("session validation degraded to invalid: {}", err);
                SessionValidation::invalid()
            }
        }
    }

    /// Revoke a token. Idempotent: deleting an absent token is not an
    /// error, and an empty token is a no-op.
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        if token.is_empty() {
            return Ok(());
        }

        self.store.delete_session(token).await?;
        info!("Session revoked");
        Ok(())
    }
}
