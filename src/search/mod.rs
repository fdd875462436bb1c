//! Search Module
//!
//! The core component responsible for ranking catalog products against user queries.
//!
//! ## Overview
//! This module implements the Information Retrieval (IR) pipeline for product
//! search. Every query triggers a full pass over the current catalog: the text
//! of each product (name + description) is indexed into a fresh, call-scoped
//! [`corpus::Corpus`], every entry is scored with a blend of TF-IDF relevance
//! and an exact whole-word match boost, and the surviving entries come back
//! sorted by descending score. Nothing is cached between calls, so results
//! always reflect the catalog as it is right now.
//!
//! ## Responsibilities
//! - **Tokenization**: Normalizing raw query strings and document text into
//!   comparable lowercase tokens.
//! - **Indexing**: Building per-query term frequency / document frequency
//!   statistics over the full catalog.
//! - **Ranking**: Scoring, sorting, and filtering documents against the query.
//! - **API**: Exposing the search endpoint via the Axum web server.
//!
//! ## Submodules
//! - **`corpus`**: The per-query document corpus and TF-IDF statistics.
//! - **`engine`**: Query validation, catalog fetch, and the ranking pipeline.
//! - **`error`**: The search failure taxonomy and its HTTP mapping.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`tokenizer`**: Text normalization and tokenization utilities.
//! - **`types`**: The narrow document view and API response types.

pub mod corpus;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod tokenizer;
pub mod types;
