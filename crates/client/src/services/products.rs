//! Product catalog service.

use clementine_core::types::{CategoryId, ProductId};

use crate::api::{ApiClient, ApiError};
use crate::models::{Category, Page, PageQuery, Product};

/// Typed wrappers for the product and category endpoints.
#[derive(Clone)]
pub struct ProductsService {
    api: ApiClient,
}

impl ProductsService {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Default sort for product listings.
    #[must_use]
    pub fn default_query() -> PageQuery {
        PageQuery::sorted_by("name", "asc")
    }

    /// `GET /products/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.api
            .get(&format!("/products/{id}"), &[])
            .await?
            .into_result()
    }

    /// `GET /products`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn products(&self, query: &PageQuery) -> Result<Page<Product>, ApiError> {
        self.api
            .get("/products", &query.to_params())
            .await?
            .into_result()
    }

    /// `GET /products/category/{categoryId}`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn products_by_category(
        &self,
        category_id: CategoryId,
        query: &PageQuery,
    ) -> Result<Page<Product>, ApiError> {
        self.api
            .get(
                &format!("/products/category/{category_id}"),
                &query.to_params(),
            )
            .await?
            .into_result()
    }

    /// `GET /products/search`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn search(
        &self,
        keyword: &str,
        query: &PageQuery,
    ) -> Result<Page<Product>, ApiError> {
        let mut params = vec![("keyword", keyword.to_string())];
        params.push(("page", query.page.to_string()));
        params.push(("size", query.size.to_string()));
        self.api
            .get("/products/search", &params)
            .await?
            .into_result()
    }

    /// `GET /categories`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.api.get("/categories", &[]).await?.into_result()
    }
}
