use axum::{routing::get, Extension, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use storefront::catalog::handlers::{
    handle_create_product, handle_delete_product, handle_get_product, handle_list_products,
    handle_update_product,
};
use storefront::catalog::store::ProductStore;
use storefront::config::SearchConfig;
use storefront::search::handlers::handle_search;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let bind_addr: SocketAddr = std::env::var("BIND")
        .unwrap_or_else(|_| "127.0.0.1:4000".to_string())
        .parse()?;

    let store = Arc::new(ProductStore::new());
    let search_config = Arc::new(SearchConfig::from_env());
    tracing::info!(
        "Exact-match boost weight: {}",
        search_config.exact_match_weight
    );

    // The static /products/search segment wins over the /:id capture.
    let app = Router::new()
        .route(
            "/products",
            get(handle_list_products).post(handle_create_product),
        )
        .route("/products/search/:query", get(handle_search))
        .route(
            "/products/:id",
            get(handle_get_product)
                .put(handle_update_product)
                .delete(handle_delete_product),
        )
        .layer(Extension(store))
        .layer(Extension(search_config));

    tracing::info!("Catalog service listening on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
