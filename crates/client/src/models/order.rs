//! Order wire models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use clementine_core::types::{OrderId, OrderItemId, OrderStatus, ProductId, UserId};

/// An order as returned by the order endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: Option<UserId>,
    pub order_number: Option<String>,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub order_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
}

/// A single line on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: OrderItemId,
    pub product_id: ProductId,
    pub product_name: Option<String>,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub subtotal: Option<Decimal>,
    pub product_sku: Option<String>,
    pub product_image_url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserializes() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 10,
                "customerId": 1,
                "orderNumber": "ORD-2024-0010",
                "status": "SHIPPED",
                "totalAmount": 31.48,
                "orderDate": "2024-05-01T10:00:00",
                "orderItems": [
                    {"id": 1, "productId": 7, "quantity": 2, "unitPrice": 12.50}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.order_items.len(), 1);
        assert_eq!(order.total_amount, Decimal::new(3148, 2));
    }

    #[test]
    fn test_order_without_items() {
        let order: Order = serde_json::from_str(
            r#"{"id": 11, "status": "PENDING", "totalAmount": 0}"#,
        )
        .unwrap();
        assert!(order.order_items.is_empty());
    }
}
