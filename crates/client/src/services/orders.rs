//! Order history service.

use clementine_core::types::{OrderId, OrderStatus};

use crate::api::{ApiClient, ApiError};
use crate::models::{Order, Page, PageQuery};

/// Typed wrappers for the order endpoints.
///
/// List defaults: page 0, size 10, sorted by creation date descending.
#[derive(Clone)]
pub struct OrdersService {
    api: ApiClient,
}

impl OrdersService {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /orders`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn orders(&self, query: &PageQuery) -> Result<Page<Order>, ApiError> {
        self.api
            .get("/orders", &query.to_params())
            .await?
            .into_result()
    }

    /// `GET /orders/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn order(&self, order_id: OrderId) -> Result<Order, ApiError> {
        self.api
            .get(&format!("/orders/{order_id}"), &[])
            .await?
            .into_result()
    }

    /// `GET /orders/status/{status}`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn orders_by_status(
        &self,
        status: OrderStatus,
        query: &PageQuery,
    ) -> Result<Page<Order>, ApiError> {
        self.api
            .get(&format!("/orders/status/{status}"), &query.to_params())
            .await?
            .into_result()
    }
}
