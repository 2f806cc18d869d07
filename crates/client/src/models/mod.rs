//! Wire models for the backend REST API.
//!
//! Field names follow the backend's camelCase JSON. Money fields are
//! `rust_decimal::Decimal`; timestamps are naive local datetimes as the
//! backend serializes them without a zone offset.

mod cart;
mod catalog;
mod order;
mod review;
mod user;

pub use cart::*;
pub use catalog::*;
pub use order::*;
pub use review::*;
pub use user::*;

use serde::Deserialize;

/// A page of results as returned by list endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: i32,
    pub page_size: i32,
    pub total_elements: i64,
    pub total_pages: i32,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

/// Pagination and sort parameters for list endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: i32,
    pub size: i32,
    pub sort_by: String,
    pub sort_dir: String,
}

impl Default for PageQuery {
    /// Newest-first paging, matching the review and order list defaults.
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort_by: "dateCreated".to_string(),
            sort_dir: "desc".to_string(),
        }
    }
}

impl PageQuery {
    /// First page with the given sort.
    #[must_use]
    pub fn sorted_by(sort_by: &str, sort_dir: &str) -> Self {
        Self {
            sort_by: sort_by.to_string(),
            sort_dir: sort_dir.to_string(),
            ..Self::default()
        }
    }

    /// Query-string pairs for [`crate::api::ApiClient::get`].
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sortBy", self.sort_by.clone()),
            ("sortDir", self.sort_dir.clone()),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_defaults() {
        let query = PageQuery::default();
        assert_eq!(
            query.to_params(),
            vec![
                ("page", "0".to_string()),
                ("size", "10".to_string()),
                ("sortBy", "dateCreated".to_string()),
                ("sortDir", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_deserializes() {
        let page: Page<i32> = serde_json::from_str(
            r#"{
                "content": [1, 2, 3],
                "pageNumber": 0,
                "pageSize": 10,
                "totalElements": 3,
                "totalPages": 1,
                "first": true,
                "last": true,
                "empty": false
            }"#,
        )
        .unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert!(page.first && page.last && !page.empty);
    }
}
