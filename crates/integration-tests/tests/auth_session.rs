//! Sign-in and session lifecycle tests against the mock backend.

#![allow(clippy::unwrap_used)]

use clementine_integration_tests::{MockBackend, issue_token};

#[tokio::test]
async fn login_stores_token_and_user_together() {
    let backend = MockBackend::spawn().await;
    let storefront = backend.storefront();
    assert!(!storefront.auth().is_authenticated());

    let response = storefront.auth().login("alice", "secret").await.unwrap();
    assert_eq!(response.username, "alice");

    assert!(storefront.auth().is_authenticated());
    assert!(!storefront.auth().is_token_expired());
    let user = storefront.auth().current_user().unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.real_name.as_deref(), Some("Alice Doe"));
}

#[tokio::test]
async fn logout_clears_token_and_user_together() {
    let backend = MockBackend::spawn().await;
    let storefront = backend.storefront();

    storefront.auth().login("alice", "secret").await.unwrap();
    storefront.auth().logout();

    assert!(!storefront.auth().is_authenticated());
    assert!(storefront.auth().current_user().is_none());
    // A missing token counts as expired.
    assert!(storefront.auth().is_token_expired());
}

#[tokio::test]
async fn expired_token_is_reported_but_still_counts_as_signed_in() {
    let backend = MockBackend::spawn().await;
    let storefront = backend.storefront();

    storefront.session().set_token(&issue_token(0));

    assert!(storefront.auth().is_authenticated());
    assert!(storefront.auth().is_token_expired());
}
