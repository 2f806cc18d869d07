//! Product review wire models.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use clementine_core::types::{OrderId, ProductId, ReviewId, ReviewStatus, UserId};

/// A product review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub customer_id: Option<UserId>,
    pub order_id: Option<OrderId>,
    pub rating: u8,
    pub title: Option<String>,
    pub content: Option<String>,
    pub helpful_count: Option<i32>,
    pub verified_purchase: Option<bool>,
    pub status: Option<ReviewStatus>,
    pub date_created: Option<NaiveDateTime>,
    pub last_updated: Option<NaiveDateTime>,
    pub customer_name: Option<String>,
    pub product_name: Option<String>,
}

/// Aggregated rating data for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub product_id: ProductId,
    pub total_reviews: i64,
    pub average_rating: Decimal,
    /// Review counts keyed by star rating (1-5).
    #[serde(default)]
    pub rating_distribution: BTreeMap<u8, i64>,
    #[serde(default)]
    pub recent_reviews: Vec<Review>,
}

/// Body for `POST /products/{id}/reviews`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub product_id: ProductId,
    pub rating: u8,
    pub title: Option<String>,
    pub content: Option<String>,
    pub order_id: Option<OrderId>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_review_deserializes() {
        let review: Review = serde_json::from_str(
            r#"{
                "id": 3,
                "productId": 7,
                "rating": 5,
                "title": "Great mug",
                "verifiedPurchase": true,
                "status": "APPROVED",
                "customerName": "alice"
            }"#,
        )
        .unwrap();
        assert_eq!(review.rating, 5);
        assert_eq!(review.status, Some(ReviewStatus::Approved));
    }

    #[test]
    fn test_summary_distribution_keys_are_ratings() {
        let summary: ReviewSummary = serde_json::from_str(
            r#"{
                "productId": 7,
                "totalReviews": 3,
                "averageRating": 4.33,
                "ratingDistribution": {"5": 2, "3": 1}
            }"#,
        )
        .unwrap();
        assert_eq!(summary.rating_distribution.get(&5), Some(&2));
        assert_eq!(summary.rating_distribution.get(&3), Some(&1));
        assert!(summary.recent_reviews.is_empty());
    }
}
