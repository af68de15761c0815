// User seeding endpoint
// Writes user records with hashed secrets; overwriting is idempotent.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use super::AppState;
use crate::auth::hash_password;
use crate::error::AuthError;
use crate::models::{SeedUser, SeedUsersRequest, UserRecord};

/// `POST /api/users/init`
/// Seeds the supplied users, or the built-in default set when none are
/// given. Secrets are hashed before they reach the store.
pub async fn init_users(
    State(state): State<AppState>,
    payload: Result<Json<SeedUsersRequest>, JsonRejection>,
) -> Result<Json<Value>, AuthError> {
    let Json(payload) = payload.map_err(|e| AuthError::Internal(e.to_string()))?;
    let seeds = payload.users.unwrap_or_else(default_users);
    let count = seeds.len();

    for seed in seeds {
        let record = UserRecord {
            id: seed.id,
            email: seed.email,
            name: seed.name,
            password_hash: hash_password(&seed.password)?,
        };
        state.store.put_user(&record).await?;
    }

    info!("Seeded {} user record(s)", count);

    Ok(Json(json!({
        "message": "Users initialized successfully",
        "count": count
    })))
}

fn default_users() -> Vec<SeedUser> {
    vec![
        SeedUser {
            id: "1".to_string(),
            email: "admin@yourdomain.com".to_string(),
            name: "Admin User".to_string(),
            password: "admin123".to_string(),
        },
        SeedUser {
            id: "2".to_string(),
            email: "books@yourdomain.com".to_string(),
            name: "Books Manager".to_string(),
            password: "books123".to_string(),
        },
        SeedUser {
            id: "3".to_string(),
            email: "events@yourdomain.com".to_string(),
            name: "Events Manager".to_string(),
            password: "events123".to_string(),
        },
    ]
}
