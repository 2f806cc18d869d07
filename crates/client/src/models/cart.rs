//! Cart wire models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use clementine_core::types::{CartId, CartItemId, ProductId};

/// A single line in the signed-in user's cart.
///
/// `quantity` and `unit_price` are the authoritative inputs to the derived
/// cart totals; everything else is denormalized product metadata for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub cart_id: Option<CartId>,
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub subtotal: Option<Decimal>,
    pub product_name: Option<String>,
    pub product_sku: Option<String>,
    pub product_image_url: Option<String>,
    pub product_description: Option<String>,
    pub units_in_stock: Option<i32>,
    pub date_added: Option<NaiveDateTime>,
    pub last_updated: Option<NaiveDateTime>,
}

/// Body for `POST /cart/items`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Body for `PUT /cart/items/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_item_deserializes_from_backend_shape() {
        let item: CartItem = serde_json::from_str(
            r#"{
                "id": 1,
                "cartId": 5,
                "productId": 42,
                "quantity": 2,
                "unitPrice": 9.99,
                "subtotal": 19.98,
                "productName": "Ceramic Mug",
                "productSku": "MUG-42",
                "productImageUrl": "/images/mug.png",
                "unitsInStock": 12,
                "dateAdded": "2024-05-01T10:00:00"
            }"#,
        )
        .unwrap();
        assert_eq!(item.id, CartItemId::new(1));
        assert_eq!(item.product_id, ProductId::new(42));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price, Decimal::new(999, 2));
        assert_eq!(item.product_name.as_deref(), Some("Ceramic Mug"));
    }

    #[test]
    fn test_cart_item_tolerates_sparse_payload() {
        let item: CartItem = serde_json::from_str(
            r#"{"id": 1, "productId": 42, "quantity": 1, "unitPrice": 4.50}"#,
        )
        .unwrap();
        assert!(item.product_name.is_none());
        assert!(item.date_added.is_none());
    }

    #[test]
    fn test_add_request_wire_format() {
        let body = AddToCartRequest {
            product_id: ProductId::new(42),
            quantity: 3,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"productId": 42, "quantity": 3}));
    }
}
