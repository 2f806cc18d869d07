//! Wire-format tests for the resource services against the mock backend.

#![allow(clippy::unwrap_used)]

use clementine_client::api::ApiError;
use clementine_client::models::PageQuery;
use clementine_client::services::ProductsService;
use clementine_integration_tests::MockBackend;

#[tokio::test]
async fn product_listing_sends_name_ascending_defaults() {
    let backend = MockBackend::spawn().await;
    let storefront = backend.storefront();

    let page = storefront
        .products()
        .products(&ProductsService::default_query())
        .await
        .unwrap();

    assert_eq!(page.content.len(), 2);
    assert_eq!(page.content[0].name, "Ceramic Mug");

    let query = backend.last_products_query().await;
    assert_eq!(query.get("page").map(String::as_str), Some("0"));
    assert_eq!(query.get("size").map(String::as_str), Some("10"));
    assert_eq!(query.get("sortBy").map(String::as_str), Some("name"));
    assert_eq!(query.get("sortDir").map(String::as_str), Some("asc"));
}

#[tokio::test]
async fn order_listing_defaults_to_newest_first() {
    let backend = MockBackend::spawn().await;
    let storefront = backend.storefront();

    let page = storefront.orders().orders(&PageQuery::default()).await.unwrap();
    assert!(page.content.is_empty());

    let query = backend.last_orders_query().await;
    assert_eq!(query.get("sortBy").map(String::as_str), Some("dateCreated"));
    assert_eq!(query.get("sortDir").map(String::as_str), Some("desc"));
}

#[tokio::test]
async fn phone_update_travels_in_query_string() {
    let backend = MockBackend::spawn().await;
    let storefront = backend.storefront();

    let message = storefront.users().update_phone("555-0123").await.unwrap();
    assert_eq!(message, "Phone number updated successfully");

    let query = backend.last_phone_query().await;
    assert_eq!(query.get("phone").map(String::as_str), Some("555-0123"));
}

#[tokio::test]
async fn envelope_rejection_surfaces_server_message() {
    let backend = MockBackend::spawn().await;
    let storefront = backend.storefront();

    backend.reject_next_products(400, "bad keyword").await;
    let err = storefront
        .products()
        .products(&ProductsService::default_query())
        .await
        .unwrap_err();

    match err {
        ApiError::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "bad keyword");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn transport_level_failure_maps_to_http_error() {
    let backend = MockBackend::spawn().await;
    let storefront = backend.storefront();

    backend.fail_next_products(500).await;
    let err = storefront
        .products()
        .products(&ProductsService::default_query())
        .await
        .unwrap_err();

    match err {
        ApiError::Http { status, .. } => assert_eq!(status, 500),
        other => panic!("unexpected error: {other:?}"),
    }
}
