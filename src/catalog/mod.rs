//! Catalog Module
//!
//! The product data layer: the system of record the search engine reads from.
//!
//! ## Overview
//! Products live in a concurrently accessible in-memory store. The store
//! assigns every product a stable insertion ordinal, so full-catalog reads
//! always come back in the same order — the ranker relies on that order for
//! deterministic tie-breaking.
//!
//! ## Responsibilities
//! - **Storage**: Insert/get/update/remove over a sharded concurrent map.
//! - **Catalog reads**: The read-only [`store::CatalogSource`] interface
//!   consumed by the search subsystem.
//! - **API**: CRUD HTTP handlers for managing catalog entries.
//!
//! ## Submodules
//! - **`store`**: `ProductStore` and the `CatalogSource` trait.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Product record and request/response DTOs.

pub mod handlers;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
