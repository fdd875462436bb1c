use super::types::Product;
use anyhow::Result;
use dashmap::DashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

/// Read-only view of the catalog consumed by the search engine.
///
/// Fetching may suspend (a real backing store would go over the network), so
/// the operation is future-returning even though the in-memory implementation
/// resolves immediately. Search never writes through this interface.
pub trait CatalogSource {
    /// Returns every product in the catalog, in stable catalog order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Product>>> + Send;
}

/// Concurrently accessible in-memory product store.
///
/// Each product gets a monotonically increasing `seq` on insert; `snapshot`
/// sorts by it, so the catalog order seen by readers is insertion order and
/// identical across calls.
#[derive(Default)]
pub struct ProductStore {
    products: DashMap<String, Product>,
    next_seq: AtomicU64,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new product, assigning its catalog ordinal.
    /// Returns the record as stored.
    pub fn insert(&self, mut product: Product) -> Product {
        product.seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.products
            .insert(product.product_id.clone(), product.clone());
        product
    }

    pub fn get(&self, product_id: &str) -> Option<Product> {
        self.products.get(product_id).map(|entry| entry.value().clone())
    }

    /// Replaces an existing record, keeping its id and catalog ordinal.
    /// Returns `None` when no product has the given id.
    pub fn update(&self, product_id: &str, mut updated: Product) -> Option<Product> {
        let mut entry = self.products.get_mut(product_id)?;
        updated.product_id = entry.product_id.clone();
        updated.seq = entry.seq;
        *entry = updated.clone();
        Some(updated)
    }

    pub fn remove(&self, product_id: &str) -> Option<Product> {
        self.products.remove(product_id).map(|(_, product)| product)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Snapshot of the whole catalog sorted by insertion ordinal.
    pub fn snapshot(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .products
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        products.sort_by_key(|product| product.seq);
        products
    }
}

impl CatalogSource for ProductStore {
    fn list_all(&self) -> impl Future<Output = Result<Vec<Product>>> + Send {
        let products = self.snapshot();
        async move { Ok(products) }
    }
}
