use super::store::ProductStore;
use super::types::{DeleteProductResponse, ErrorResponse, Product, ProductPayload};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

fn product_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Product not found".to_string(),
        }),
    )
}

pub async fn handle_list_products(
    Extension(store): Extension<Arc<ProductStore>>,
) -> Json<Vec<Product>> {
    Json(store.snapshot())
}

pub async fn handle_get_product(
    Path(product_id): Path<String>,
    Extension(store): Extension<Arc<ProductStore>>,
) -> Result<Json<Product>, (StatusCode, Json<ErrorResponse>)> {
    match store.get(&product_id) {
        Some(product) => Ok(Json(product)),
        None => Err(product_not_found()),
    }
}

pub async fn handle_create_product(
    Extension(store): Extension<Arc<ProductStore>>,
    Json(req): Json<ProductPayload>,
) -> (StatusCode, Json<Product>) {
    let product = Product {
        product_id: Uuid::new_v4().to_string(),
        name: req.name,
        description: req.description,
        price: req.price,
        brand: req.brand,
        image: req.image,
        seller_id: req.seller_id,
        seq: 0, // assigned by the store
    };

    let stored = store.insert(product);
    tracing::debug!("Created product {}", stored.product_id);
    (StatusCode::CREATED, Json(stored))
}

pub async fn handle_update_product(
    Path(product_id): Path<String>,
    Extension(store): Extension<Arc<ProductStore>>,
    Json(req): Json<ProductPayload>,
) -> Result<Json<Product>, (StatusCode, Json<ErrorResponse>)> {
    let existing = store.get(&product_id).ok_or_else(product_not_found)?;

    let updated = Product {
        product_id: existing.product_id.clone(),
        name: req.name,
        description: req.description,
        price: req.price,
        brand: req.brand,
        // A PUT without a new image keeps the current one.
        image: req.image.or(existing.image),
        seller_id: req.seller_id.or(existing.seller_id),
        seq: existing.seq,
    };

    match store.update(&product_id, updated) {
        Some(product) => {
            tracing::debug!("Updated product {}", product.product_id);
            Ok(Json(product))
        }
        None => Err(product_not_found()),
    }
}

pub async fn handle_delete_product(
    Path(product_id): Path<String>,
    Extension(store): Extension<Arc<ProductStore>>,
) -> Result<Json<DeleteProductResponse>, (StatusCode, Json<ErrorResponse>)> {
    match store.remove(&product_id) {
        Some(product) => {
            tracing::debug!("Deleted product {}", product.product_id);
            Ok(Json(DeleteProductResponse {
                message: "Product deleted successfully".to_string(),
            }))
        }
        None => Err(product_not_found()),
    }
}
