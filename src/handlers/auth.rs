// Auth gateway handlers
// Each call is an independent request/response cycle against the shared
// store handle; session manager results map to status codes here.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use super::AppState;
use crate::error::AuthError;
use crate::models::{LoginRequest, LoginResponse, SessionRequest};
use crate::session::SessionValidation;

/// `POST /api/auth/login`
/// 200 with the session id and public user view, 401 on bad credentials,
/// 500 on a malformed body or store failure.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AuthError> {
    let Json(payload) = payload.map_err(|e| AuthError::Internal(e.to_string()))?;

    let outcome = state
        .sessions
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        session_id: outcome.session_id,
        user: outcome.user,
    }))
}

/// `POST /api/auth/logout`
/// Always 200 when the store is reachable; revoking an unknown or absent
/// token is not an error.
pub async fn logout(
    State(state): State<AppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<Json<Value>, AuthError> {
    let Json(payload) = payload.map_err(|e| AuthError::Internal(e.to_string()))?;

    let token = payload.session_id.unwrap_or_default();
    state.sessions.logout(&token).await?;

    Ok(Json(json!({ "message": "Logged out successfully" })))
}

/// `POST /api/auth/session`
/// Always 200: invalid, absent and unverifiable sessions, and even a
/// malformed body, all report as `{valid:false, user:null}` rather than an
/// error status.
pub async fn validate_session(
    State(state): State<AppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Json<SessionValidation> {
    let token = payload
        .map(|Json(p)| p.session_id.unwrap_or_default())
        .unwrap_or_default();

    Json(state.sessions.validate(&token).await)
}
