//! The product entity and its request payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted product row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    /// Database-assigned identifier.
    pub id: i32,
    pub name: String,
    pub price: f64,
}

/// Body of `POST /product` and `PUT /product/{id}`.
///
/// Missing fields decode to empty name / zero price. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct ProductPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

impl ProductPayload {
    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_defaults_and_ignores_id() {
        let p: ProductPayload = serde_json::from_value(json!({ "id": 77, "name": "lamp" })).unwrap();
        assert_eq!(p.name, "lamp");
        assert_eq!(p.price, 0.0);
    }

    #[test]
    fn payload_rejects_wrong_types() {
        assert!(serde_json::from_value::<ProductPayload>(json!({ "name": 5 })).is_err());
        assert!(serde_json::from_value::<ProductPayload>(json!({ "price": "cheap" })).is_err());
    }

    #[test]
    fn product_serializes_flat() {
        let p = ProductPayload { name: "test product".into(), price: 11.22 }.into_product(3);
        assert_eq!(
            serde_json::to_value(&p).unwrap(),
            json!({ "id": 3, "name": "test product", "price": 11.22 })
        );
    }
}
