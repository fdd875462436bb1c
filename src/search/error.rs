use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures a search call can surface.
///
/// An empty catalog is not in this taxonomy: it is a normal outcome answered
/// with an empty result and an explanatory message.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query was empty after trimming. Raised before any catalog fetch
    /// or indexing work; a client error, never retried internally.
    #[error("Search query is required.")]
    InvalidQuery,
    /// The catalog collaborator failed to return documents. The whole search
    /// aborts and the fault propagates as this single wrapped failure; retry
    /// policy belongs to the caller.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(anyhow::Error),
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        match self {
            SearchError::InvalidQuery => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Search query is required." })),
            )
                .into_response(),
            SearchError::CatalogUnavailable(err) => {
                tracing::error!("Search failed: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Search failed" })),
                )
                    .into_response()
            }
        }
    }
}
