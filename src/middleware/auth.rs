// Session guard middleware
// Route protection happens here, before the handler is constructed: the
// bearer token is validated and the user snapshot injected, or the request
// is rejected outright.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::handlers::AppState;
use crate::models::PublicUser;

/// Authenticated user injected into request extensions by the guard.
#[derive(Clone)]
pub struct CurrentUser(pub PublicUser);

pub async fn require_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .unwrap_or_default();

    let validation = state.sessions.validate(token).await;

    match (validation.valid, validation.user) {
        (true, Some(user)) => {
            request.extensions_mut().insert(CurrentUser(user));
            Ok(next.run(request).await)
        }
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        )
            .into_response()),
    }
}
