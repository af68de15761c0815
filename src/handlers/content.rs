// Content pass-through handlers
// Thin data-fetching screens: each proxies one collection from the remote
// content API as opaque JSON. All of them sit behind the session guard.

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use super::AppState;
use crate::content::ContentError;

pub async fn forms(State(state): State<AppState>) -> Result<Json<Value>, ContentError> {
    Ok(Json(state.content.fetch("forms").await?))
}

pub async fn books(State(state): State<AppState>) -> Result<Json<Value>, ContentError> {
    Ok(Json(state.content.fetch("books").await?))
}

pub async fn events(State(state): State<AppState>) -> Result<Json<Value>, ContentError> {
    Ok(Json(state.content.fetch("events").await?))
}

pub async fn preorders(State(state): State<AppState>) -> Result<Json<Value>, ContentError> {
    Ok(Json(state.content.fetch("preorders").await?))
}
