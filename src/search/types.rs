use crate::catalog::types::Product;
use serde::{Deserialize, Serialize};

/// Narrow read-only view of a product exposed to the ranking subsystem.
///
/// Ranking only ever looks at the two text fields; the rest of the product
/// record stays opaque and is passed through to the caller untouched.
#[derive(Debug, Clone, Copy)]
pub struct CatalogDoc<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a Product> for CatalogDoc<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            id: &product.product_id,
            name: &product.name,
            description: &product.description,
        }
    }
}

/// One corpus entry's combined score. `index` refers to the entry's position
/// in the catalog sequence the corpus was built from. Lives only for the
/// duration of a single search call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    pub index: usize,
    pub score: f64,
}

/// Successful search result: ranked products plus request-correlation echoes.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub products: Vec<Product>,
    /// Set on the empty-catalog outcome ("No products found."), absent otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Echo of the caller's identity token; not used by ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}
