use serde::{Deserialize, Serialize};

/// A catalog entry. Only `name` and `description` participate in search;
/// every other field is opaque to ranking and passed through unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub brand: String,
    pub image: Option<String>,
    pub seller_id: Option<String>,
    /// Insertion ordinal assigned by the store. Gives the catalog a stable
    /// order, which the ranker's tie-breaking is defined against.
    #[serde(default)]
    pub seq: u64,
}

/// Request body shared by product create (POST) and update (PUT).
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub brand: String,
    pub image: Option<String>,
    pub seller_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteProductResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
