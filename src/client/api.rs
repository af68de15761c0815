//! Native client for the auth gateway.
//!
//! Drives the login / logout / validate-session boundary the way a
//! protected view does: load the cached token, validate it against the
//! server before trusting it, and fall back to the public entry point
//! (an unauthenticated result) when the server rejects it.

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::cache::{CachedSession, SessionCache};
use crate::models::PublicUser;

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginPayload {
    session_id: String,
    user: PublicUser,
}

#[derive(Debug, Deserialize)]
struct ValidatePayload {
    valid: bool,
    user: Option<PublicUser>,
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: String,
}

/// Clone is cheap - reqwest::Client uses Arc internally for connection
/// pooling.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Log in and return the session to cache.
    pub async fn login(&self, email: &str, password: &str) -> Result<CachedSession> {
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .context("Login request failed")?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorPayload>()
                .await
                .map(|p| p.error)
                .unwrap_or_else(|_| "Login failed".to_string());
            bail!(message);
        }

        let payload: LoginPayload = response
            .json()
            .await
            .context("Failed to parse login response")?;

        Ok(CachedSession::new(payload.session_id, payload.user))
    }

    /// Revoke a session server-side.
    pub async fn logout(&self, session_id: &str) -> Result<()> {
        self.client
            .post(self.url("/api/auth/logout"))
            .json(&json!({ "sessionId": session_id }))
            .send()
            .await
            .context("Logout request failed")?
            .error_for_status()
            .context("Logout rejected")?;

        Ok(())
    }

    /// Ask the server whether a token is still live.
    pub async fn validate_session(&self, session_id: &str) -> Result<Option<PublicUser>> {
        let response = self
            .client
            .post(self.url("/api/auth/session"))
            .json(&json!({ "sessionId": session_id }))
            .send()
            .await
            .context("Session validation request failed")?;

        let payload: ValidatePayload = response
            .json()
            .await
            .context("Failed to parse session validation response")?;

        if payload.valid {
            Ok(payload.user)
        } else {
            Ok(None)
        }
    }

    /// Restore authentication state from the cache.
    ///
    /// The contract for protected views: the cached token is never trusted
    /// until the server confirms it. No token, a rejected token, or an
    /// unreachable gateway all clear the cache and read as unauthenticated,
    /// so the caller redirects to the public entry point.
    pub async fn restore(&self, cache: &mut SessionCache) -> Result<Option<PublicUser>> {
        if !cache.load()? {
            return Ok(None);
        }

        let Some(token) = cache.token().map(str::to_owned) else {
            return Ok(None);
        };

        match self.validate_session(&token).await {
            Ok(Some(user)) => Ok(Some(user)),
            Ok(None) => {
                cache.clear()?;
                Ok(None)
            }
            Err(err) => {
                warn!("session validation failed, treating as logged out: {}", err);
                cache.clear()?;
                Ok(None)
            }
        }
    }

    /// Log in and persist the session in one step.
    pub async fn login_and_cache(
        &self,
        cache: &mut SessionCache,
        email: &str,
        password: &str,
    ) -> Result<PublicUser> {
        let session = self.login(email, password).await?;
        let user = session.user.clone();
        cache.update(session);
        cache.save()?;
        Ok(user)
    }

    /// Log out and drop the cached session. The cache is cleared even when
    /// the server call fails: the local state must not outlive the intent.
    pub async fn logout_and_clear(&self, cache: &mut SessionCache) -> Result<()> {
        if let Some(token) = cache.token().map(str::to_owned) {
            if let Err(err) = self.logout(&token).await {
                warn!("logout request failed: {}", err);
            }
        }
        cache.clear()
    }
}
