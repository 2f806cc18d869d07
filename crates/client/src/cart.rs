//! Shared cart store.
//!
//! The cart collection and its derived totals are process-wide shared
//! state: every holder of a cloned [`CartStore`] observes and mutates the
//! same instance. Construct one store at application start-up (see
//! [`crate::state::Storefront`]) and pass it by reference; do not create
//! per-consumer copies of the state.
//!
//! # Synchronization contract
//!
//! Every mutation that the server accepts is followed by a full re-fetch
//! of the authoritative cart, never an optimistic local patch, so the
//! displayed cart cannot drift from server state after a successful write.
//! The cost is one extra round trip per mutation and a brief window of
//! stale data until the re-fetch resolves.
//!
//! There is no retry, no coalescing, and no sequencing between overlapping
//! fetches: concurrent mutations each trigger their own re-fetch and the
//! last response to resolve wins, which is not necessarily the one for the
//! most recent user action. In-flight requests are never cancelled.

use std::sync::{Arc, PoisonError, RwLock};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use clementine_core::types::{CartItemId, ProductId, format_amount, line_total};

use crate::api::{ApiClient, Envelope};
use crate::models::{AddToCartRequest, CartItem, UpdateCartItemRequest};

const CART_ITEMS_PATH: &str = "/cart/items";

/// Errors surfaced by cart mutations.
///
/// Fetch failures are not reported here; they are logged and the store
/// keeps showing the last successfully synced state.
#[derive(Debug, Error)]
pub enum CartError {
    /// No token in the session store; nothing was sent to the server.
    #[error("not signed in")]
    NotAuthenticated,

    /// The server rejected the mutation (envelope status != 200).
    #[error("{0}")]
    Rejected(String),

    /// Transport or parse failure.
    #[error(transparent)]
    Api(#[from] crate::api::ApiError),
}

/// Cart collection plus totals derived from it.
///
/// The totals are always a pure function of `items`; they are recomputed
/// wholesale on every replacement and never patched incrementally.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub item_count: u32,
    pub total: Decimal,
}

impl CartState {
    fn from_items(items: Vec<CartItem>) -> Self {
        let item_count = items.iter().map(|item| item.quantity).sum();
        let total = items
            .iter()
            .map(|item| line_total(item.unit_price, item.quantity))
            .sum();
        Self {
            items,
            item_count,
            total,
        }
    }
}

/// Shared cart store, synced with the backend after every write.
///
/// Cheaply cloneable; all clones share one state.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    api: ApiClient,
    state: RwLock<CartState>,
}

impl CartStore {
    /// Create a cart store over the given API client.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            inner: Arc::new(CartStoreInner {
                api,
                state: RwLock::new(CartState::default()),
            }),
        }
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    /// Snapshot of the current cart state.
    #[must_use]
    pub fn snapshot(&self) -> CartState {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current cart items.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.snapshot().items
    }

    /// Sum of quantities over all items.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .item_count
    }

    /// Sum of unit price times quantity over all items.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .total
    }

    /// The total formatted to two decimal places for display.
    #[must_use]
    pub fn total_display(&self) -> String {
        format_amount(self.total())
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Fetch the authoritative cart and replace local state wholesale.
    ///
    /// No-op when not signed in: no network call is made and the state is
    /// left untouched. Failures are logged and swallowed, leaving the last
    /// successfully synced state visible.
    #[instrument(skip(self))]
    pub async fn fetch(&self) {
        if !self.inner.api.session().is_authenticated() {
            return;
        }

        match self
            .inner
            .api
            .get::<Vec<CartItem>>(CART_ITEMS_PATH, &[])
            .await
        {
            Ok(envelope) if envelope.is_success() => {
                self.replace_items(envelope.data.unwrap_or_default());
            }
            Ok(envelope) => {
                warn!(
                    status = envelope.status,
                    message = envelope.message.as_deref().unwrap_or(""),
                    "cart fetch rejected"
                );
            }
            Err(e) => warn!(error = %e, "cart fetch failed"),
        }
    }

    /// Fire-and-forget initial fetch, intended to run once per session
    /// start.
    pub fn init(&self) {
        let store = self.clone();
        tokio::spawn(async move { store.fetch().await });
    }

    /// Add a product to the cart.
    ///
    /// On success the whole cart is re-fetched; the server response for
    /// the mutation itself is never used to patch local state.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a stored token (no network call is
    /// made), `Rejected` with the server message on an envelope failure,
    /// `Api` on transport or parse failure. The state is unchanged in all
    /// three cases.
    #[instrument(skip(self), fields(product_id = %product_id, quantity))]
    pub async fn add(&self, product_id: ProductId, quantity: u32) -> Result<(), CartError> {
        if !self.inner.api.session().is_authenticated() {
            return Err(CartError::NotAuthenticated);
        }

        let body = AddToCartRequest {
            product_id,
            quantity,
        };
        let envelope: Envelope<CartItem> = self.inner.api.post(CART_ITEMS_PATH, &body).await?;
        self.finish_mutation(envelope, "failed to add item to cart")
            .await
    }

    /// Change the quantity of a cart line.
    ///
    /// Fractional quantities are truncated toward zero before
    /// transmission (3.7 becomes 3).
    ///
    /// # Errors
    ///
    /// Same as [`Self::add`].
    #[instrument(skip(self), fields(cart_item_id = %cart_item_id, quantity))]
    pub async fn update_quantity(
        &self,
        cart_item_id: CartItemId,
        quantity: f64,
    ) -> Result<(), CartError> {
        if !self.inner.api.session().is_authenticated() {
            return Err(CartError::NotAuthenticated);
        }

        let body = UpdateCartItemRequest {
            quantity: coerce_quantity(quantity),
        };
        let path = format!("{CART_ITEMS_PATH}/{cart_item_id}");
        let envelope: Envelope<CartItem> = self.inner.api.put(&path, Some(&body), &[]).await?;
        self.finish_mutation(envelope, "failed to update cart item")
            .await
    }

    /// Remove a line from the cart.
    ///
    /// # Errors
    ///
    /// Same as [`Self::add`].
    #[instrument(skip(self), fields(cart_item_id = %cart_item_id))]
    pub async fn remove(&self, cart_item_id: CartItemId) -> Result<(), CartError> {
        if !self.inner.api.session().is_authenticated() {
            return Err(CartError::NotAuthenticated);
        }

        let path = format!("{CART_ITEMS_PATH}/{cart_item_id}");
        let envelope: Envelope<serde_json::Value> = self.inner.api.delete(&path).await?;
        self.finish_mutation(envelope, "failed to remove cart item")
            .await
    }

    /// Shared tail of every mutation: re-fetch on success, surface the
    /// server message on rejection. A rejected mutation triggers no
    /// re-fetch, so the previously displayed cart stays as-is.
    async fn finish_mutation<T>(
        &self,
        envelope: Envelope<T>,
        fallback_message: &str,
    ) -> Result<(), CartError> {
        if envelope.is_success() {
            self.fetch().await;
            Ok(())
        } else {
            Err(CartError::Rejected(
                envelope
                    .message
                    .unwrap_or_else(|| fallback_message.to_string()),
            ))
        }
    }

    /// Replace the collection wholesale and recompute totals from it.
    fn replace_items(&self, items: Vec<CartItem>) {
        let state = CartState::from_items(items);
        debug!(
            item_count = state.item_count,
            total = %state.total,
            "cart state replaced"
        );
        *self
            .inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner) = state;
    }
}

/// Integer coercion applied to update quantities before transmission.
#[allow(clippy::cast_possible_truncation)]
fn coerce_quantity(quantity: f64) -> i32 {
    quantity as i32
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::ClientConfig;
    use crate::session::MemorySessionStore;

    fn store() -> CartStore {
        let config = ClientConfig::new("http://localhost:8080/api", "unused.json").unwrap();
        let api = ApiClient::new(&config, Arc::new(MemorySessionStore::new()));
        CartStore::new(api)
    }

    fn item(id: i64, quantity: u32, unit_price: Decimal) -> CartItem {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "productId": id * 10,
            "quantity": quantity,
            "unitPrice": unit_price,
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_store_totals() {
        let store = store();
        assert_eq!(store.item_count(), 0);
        assert_eq!(store.total(), Decimal::ZERO);
        assert_eq!(store.total_display(), "0.00");
    }

    #[test]
    fn test_totals_are_pure_function_of_items() {
        let store = store();
        store.replace_items(vec![
            item(1, 2, Decimal::new(999, 2)),
            item(2, 1, Decimal::new(450, 2)),
        ]);
        assert_eq!(store.item_count(), 3);
        assert_eq!(store.total(), Decimal::new(2448, 2));
        assert_eq!(store.total_display(), "24.48");
    }

    #[test]
    fn test_replacement_recomputes_rather_than_accumulates() {
        let store = store();
        store.replace_items(vec![item(1, 2, Decimal::new(999, 2))]);
        assert_eq!(store.total_display(), "19.98");

        // A second wholesale replacement discards the previous totals.
        store.replace_items(vec![item(1, 1, Decimal::new(999, 2))]);
        assert_eq!(store.item_count(), 1);
        assert_eq!(store.total_display(), "9.99");
    }

    #[test]
    fn test_clones_share_state() {
        let store = store();
        let observer = store.clone();
        store.replace_items(vec![item(1, 2, Decimal::new(999, 2))]);
        assert_eq!(observer.item_count(), 2);
    }

    #[test]
    fn test_coerce_quantity_truncates_toward_zero() {
        assert_eq!(coerce_quantity(3.7), 3);
        assert_eq!(coerce_quantity(3.0), 3);
        assert_eq!(coerce_quantity(0.9), 0);
    }
}
