pub mod client;

pub use client::ContentClient;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failures of the pass-through to the remote content API.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content API responded with status {status}")]
    UpstreamStatus { status: u16 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        match self {
            ContentError::UpstreamStatus { status } => {
                let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    code,
                    Json(json!({ "error": format!("API responded with status {}", status) })),
                )
                    .into_response()
            }
            ContentError::Network(err) => {
                error!("content fetch failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch content data" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_passes_through() {
        let response = ContentError::UpstreamStatus { status: 404 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unmappable_status_becomes_bad_gateway() {
        let response = ContentError::UpstreamStatus { status: 9999 }.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
