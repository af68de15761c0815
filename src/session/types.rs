// Session types and token generation

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::models::PublicUser;

/// Number of random bytes in a session token (256 bits of entropy).
const TOKEN_BYTES: usize = 32;

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Fixed session lifetime in seconds. There is no renewal: validating
    /// a session never extends it.
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { ttl_secs: 3600 } // 1 hour
    }
}

/// Session record held in the credential store, keyed by token.
/// Owned exclusively by the session manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user: PublicUser,
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(user: PublicUser) -> Self {
        Self {
            user,
            created_at: Utc::now(),
        }
    }
}

/// Result of a validation call. Invalid and absent sessions are a normal
/// negative result, never an error.
#[derive(Debug, Clone, Serialize)]
pub struct SessionValidation {
    pub valid: bool,
    pub user: Option<PublicUser>,
}

impl SessionValidation {
    pub fn invalid() -> Self {
        Self {
            valid: false,
            user: None,
        }
    }
}

/// Generate an opaque session token from the OS CSPRNG, hex-encoded.
/// Tokens are only ever compared for equality as store keys.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
