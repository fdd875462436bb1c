//! Storefront Catalog Service Library
//!
//! This library crate defines the core modules of the catalog backend.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three loosely coupled subsystems:
//!
//! - **`catalog`**: The product data layer. A concurrently accessible in-memory
//!   product store (`ProductStore`) plus the CRUD HTTP surface for managing
//!   catalog entries.
//! - **`search`**: The core information retrieval logic. Contains the tokenizer,
//!   the per-query corpus model, the scoring algorithm (TF-IDF blended with an
//!   exact-match boost), and the search HTTP handler.
//! - **`config`**: Tuning parameters for the ranking algorithm.

pub mod catalog;
pub mod config;
pub mod search;
