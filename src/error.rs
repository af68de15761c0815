// Auth error taxonomy and the HTTP boundary mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Failures of the login/logout flow. Invalid or absent sessions are not
/// represented here: validation reports them as a normal negative result.
#[derive(Debug, Error)]
pub enum AuthError {
    /// User absent or password mismatch. Both cases produce this same
    /// variant so responses never reveal which one failed.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("credential store unavailable: {0}")]
    Store(#[from] StoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<bcrypt::BcryptError> for AuthError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            AuthError::Store(err) => {
                error!("credential store failure: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AuthError::Internal(err) => {
                error!("internal error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
