//! Product catalog wire models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use clementine_core::types::{CategoryId, ProductId};

/// A product as returned by the catalog endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub sku: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub unit_price: Decimal,
    pub image_url: Option<String>,
    pub active: Option<bool>,
    pub units_in_stock: Option<i32>,
    pub date_created: Option<NaiveDateTime>,
    pub last_updated: Option<NaiveDateTime>,
    pub category_id: Option<CategoryId>,
    pub category_name: Option<String>,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub category_name: String,
    pub category_english_name: Option<String>,
    pub product_count: Option<i64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 7,
                "sku": "MUG-07",
                "name": "Ceramic Mug",
                "unitPrice": 12.50,
                "unitsInStock": 3,
                "categoryId": 2,
                "categoryName": "Kitchen"
            }"#,
        )
        .unwrap();
        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.unit_price, Decimal::new(1250, 2));
        assert_eq!(product.category_id, Some(CategoryId::new(2)));
    }

    #[test]
    fn test_category_deserializes() {
        let category: Category =
            serde_json::from_str(r#"{"id": 2, "categoryName": "Kitchen", "productCount": 14}"#)
                .unwrap();
        assert_eq!(category.category_name, "Kitchen");
        assert_eq!(category.product_count, Some(14));
    }
}
