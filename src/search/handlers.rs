use super::engine::search;
use super::error::SearchError;
use super::types::SearchResponse;
use crate::catalog::store::ProductStore;
use crate::config::SearchConfig;
use axum::extract::{Path, Query};
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchParams {
    pub user_id: Option<String>,
}

/// `GET /products/search/:query`
///
/// The query lives in the path (URL-encoded); an optional `user_id` query
/// parameter is echoed back in the response for request correlation.
pub async fn handle_search(
    Path(query): Path<String>,
    Query(params): Query<SearchParams>,
    Extension(store): Extension<Arc<ProductStore>>,
    Extension(config): Extension<Arc<SearchConfig>>,
) -> Result<Json<SearchResponse>, SearchError> {
    let response = search(store.as_ref(), &query, params.user_id, &config).await?;
    tracing::debug!(
        "Search {:?} matched {} products",
        query,
        response.products.len()
    );
    Ok(Json(response))
}
