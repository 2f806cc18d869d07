//! Product review service.

use clementine_core::types::{ProductId, ReviewId};

use crate::api::{ApiClient, ApiError};
use crate::models::{CreateReviewRequest, Page, PageQuery, Review, ReviewSummary};

/// Typed wrappers for the review endpoints.
///
/// List defaults: page 0, size 10, sorted by creation date descending.
#[derive(Clone)]
pub struct ReviewsService {
    api: ApiClient,
}

impl ReviewsService {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /products/{id}/reviews`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn product_reviews(
        &self,
        product_id: ProductId,
        query: &PageQuery,
    ) -> Result<Page<Review>, ApiError> {
        self.api
            .get(
                &format!("/products/{product_id}/reviews"),
                &query.to_params(),
            )
            .await?
            .into_result()
    }

    /// `GET /products/{id}/reviews/summary`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn summary(&self, product_id: ProductId) -> Result<ReviewSummary, ApiError> {
        self.api
            .get(&format!("/products/{product_id}/reviews/summary"), &[])
            .await?
            .into_result()
    }

    /// `POST /products/{id}/reviews`
    ///
    /// The body repeats the product id, as the backend expects.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn create(&self, request: &CreateReviewRequest) -> Result<Review, ApiError> {
        self.api
            .post(
                &format!("/products/{}/reviews", request.product_id),
                request,
            )
            .await?
            .into_result()
    }

    /// `GET /products/reviews/my`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn my_reviews(&self, query: &PageQuery) -> Result<Page<Review>, ApiError> {
        self.api
            .get("/products/reviews/my", &query.to_params())
            .await?
            .into_result()
    }

    /// `DELETE /products/reviews/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn delete(&self, review_id: ReviewId) -> Result<String, ApiError> {
        self.api
            .delete(&format!("/products/reviews/{review_id}"))
            .await?
            .into_result()
    }
}
