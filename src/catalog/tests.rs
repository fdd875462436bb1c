//! Catalog Module Tests
//!
//! Validates the in-memory product store and the catalog DTOs.
//!
//! ## Test Scopes
//! - **Store**: Insert/get/update/remove mechanics and the stable catalog
//!   ordering that search tie-breaking depends on.
//! - **CatalogSource**: The read-only view handed to the search engine.
//! - **Serialization**: JSON compatibility for API types.

#[cfg(test)]
mod tests {
    use crate::catalog::store::{CatalogSource, ProductStore};
    use crate::catalog::types::{Product, ProductPayload};

    fn product(id: &str, name: &str) -> Product {
        Product {
            product_id: id.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            price: 9.99,
            brand: "Acme".to_string(),
            image: None,
            seller_id: Some("seller-1".to_string()),
            seq: 0,
        }
    }

    // ============================================================
    // STORE TESTS
    // ============================================================

    #[test]
    fn test_insert_and_get() {
        let store = ProductStore::new();
        store.insert(product("p1", "Red Shoe"));

        let found = store.get("p1").expect("product should exist");
        assert_eq!(found.name, "Red Shoe");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = ProductStore::new();
        assert!(store.get("nope").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_assigns_increasing_ordinals() {
        let store = ProductStore::new();
        let first = store.insert(product("p1", "Red Shoe"));
        let second = store.insert(product("p2", "Blue Hat"));
        let third = store.insert(product("p3", "Wool Socks"));

        assert!(first.seq < second.seq);
        assert!(second.seq < third.seq);
    }

    #[test]
    fn test_snapshot_is_in_insertion_order() {
        let store = ProductStore::new();
        store.insert(product("p1", "Red Shoe"));
        store.insert(product("p2", "Blue Hat"));
        store.insert(product("p3", "Wool Socks"));

        let names: Vec<String> = store.snapshot().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Red Shoe", "Blue Hat", "Wool Socks"]);
    }

    #[test]
    fn test_snapshot_order_survives_updates() {
        let store = ProductStore::new();
        store.insert(product("p1", "Red Shoe"));
        store.insert(product("p2", "Blue Hat"));

        // Updating the first product must not move it to the back.
        store
            .update("p1", product("p1", "Crimson Shoe"))
            .expect("update should succeed");

        let names: Vec<String> = store.snapshot().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Crimson Shoe", "Blue Hat"]);
    }

    #[test]
    fn test_update_keeps_id_and_ordinal() {
        let store = ProductStore::new();
        let original = store.insert(product("p1", "Red Shoe"));

        // The replacement carries a bogus id and ordinal; both are ignored.
        let mut replacement = product("other-id", "Crimson Shoe");
        replacement.seq = 999;
        let updated = store.update("p1", replacement).expect("update");

        assert_eq!(updated.product_id, "p1");
        assert_eq!(updated.seq, original.seq);
        assert_eq!(updated.name, "Crimson Shoe");
    }

    #[test]
    fn test_update_missing_is_none() {
        let store = ProductStore::new();
        assert!(store.update("nope", product("nope", "Ghost")).is_none());
    }

    #[test]
    fn test_remove() {
        let store = ProductStore::new();
        store.insert(product("p1", "Red Shoe"));

        let removed = store.remove("p1").expect("product should exist");
        assert_eq!(removed.name, "Red Shoe");
        assert!(store.get("p1").is_none());
        assert!(store.remove("p1").is_none());
    }

    // ============================================================
    // CATALOG SOURCE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_list_all_matches_snapshot() {
        let store = ProductStore::new();
        store.insert(product("p1", "Red Shoe"));
        store.insert(product("p2", "Blue Hat"));

        let listed = store.list_all().await.expect("in-memory fetch");
        let names: Vec<String> = listed.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Red Shoe", "Blue Hat"]);
    }

    #[tokio::test]
    async fn test_list_all_empty_catalog() {
        let store = ProductStore::new();
        let listed = store.list_all().await.expect("in-memory fetch");
        assert!(listed.is_empty());
    }

    // ============================================================
    // TYPES TESTS
    // ============================================================

    #[test]
    fn test_product_serialization_round_trip() {
        let mut original = product("p1", "Red Shoe");
        original.image = Some("red-shoe.png".to_string());

        let json = serde_json::to_string(&original).unwrap();
        let restored: Product = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.product_id, "p1");
        assert_eq!(restored.name, "Red Shoe");
        assert_eq!(restored.image.as_deref(), Some("red-shoe.png"));
        assert_eq!(restored.seller_id.as_deref(), Some("seller-1"));
    }

    #[test]
    fn test_product_seq_defaults_when_absent() {
        // Clients never send the ordinal; it must default on the way in.
        let json = r#"{
            "product_id": "p1",
            "name": "Red Shoe",
            "description": "comfortable running shoe",
            "price": 49.5,
            "brand": "Acme",
            "image": null,
            "seller_id": null
        }"#;

        let restored: Product = serde_json::from_str(json).unwrap();
        assert_eq!(restored.seq, 0);
    }

    #[test]
    fn test_product_payload_deserialization() {
        let json = r#"{
            "name": "Red Shoe",
            "description": "comfortable running shoe",
            "price": 49.5,
            "brand": "Acme"
        }"#;

        let payload: ProductPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.name, "Red Shoe");
        assert!((payload.price - 49.5).abs() < 1e-9);
        assert!(payload.image.is_none());
        assert!(payload.seller_id.is_none());
    }
}
