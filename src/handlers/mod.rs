pub mod auth;
pub mod content;
pub mod health;
pub mod users;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::content::ContentClient;
use crate::session::SessionManager;
use crate::store::CredentialStore;

/// Shared application state, passed to every handler explicitly via axum's
/// `State` extractor. There is no ambient global.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CredentialStore>,
    pub sessions: Arc<SessionManager>,
    pub content: ContentClient,
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    // Content routes sit behind the session guard; everything auth-related
    // is public by nature
    let protected = Router::new()
        .route("/api/forms", get(content::forms))
        .route("/api/books", get(content::books))
        .route("/api/events", get(content::events))
        .route("/api/preorders", get(content::preorders))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::auth::require_session,
        ));

    Router::new()
        .route("/", get(health::health_check))
        .route("/health", get(health::health_check))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", post(auth::validate_session))
        .route("/api/users/init", post(users::init_users))
        .merge(protected)
        .with_state(state)
}
