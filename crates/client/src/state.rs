//! The storefront facade wiring the data layer together.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::cart::CartStore;
use crate::config::ClientConfig;
use crate::services::{AuthService, OrdersService, ProductsService, ReviewsService, UsersService};
use crate::session::{FileSessionStore, SessionStore};

/// The storefront data layer.
///
/// Construct exactly one instance at application start-up and hand clones
/// (cheap, `Arc`-backed) to every consumer. All clones share one session
/// store and one cart store, so a header badge and a cart page observe
/// identical numbers without any cross-component messaging.
#[derive(Clone)]
pub struct Storefront {
    inner: Arc<StorefrontInner>,
}

struct StorefrontInner {
    config: ClientConfig,
    session: Arc<dyn SessionStore>,
    api: ApiClient,
    cart: CartStore,
    auth: AuthService,
    products: ProductsService,
    reviews: ReviewsService,
    users: UsersService,
    orders: OrdersService,
}

impl Storefront {
    /// Create a storefront backed by the file session store named in the
    /// configuration.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let session: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(config.session_file.clone()));
        Self::with_session(config, session)
    }

    /// Create a storefront over a caller-provided session store.
    #[must_use]
    pub fn with_session(config: ClientConfig, session: Arc<dyn SessionStore>) -> Self {
        let api = ApiClient::new(&config, Arc::clone(&session));
        let cart = CartStore::new(api.clone());
        let auth = AuthService::new(api.clone(), Arc::clone(&session));
        let products = ProductsService::new(api.clone());
        let reviews = ReviewsService::new(api.clone());
        let users = UsersService::new(api.clone());
        let orders = OrdersService::new(api.clone());

        Self {
            inner: Arc::new(StorefrontInner {
                config,
                session,
                api,
                cart,
                auth,
                products,
                reviews,
                users,
                orders,
            }),
        }
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The shared session store.
    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.inner.session
    }

    /// The underlying API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// The shared cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Auth operations and session bookkeeping.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// Product catalog operations.
    #[must_use]
    pub fn products(&self) -> &ProductsService {
        &self.inner.products
    }

    /// Review operations.
    #[must_use]
    pub fn reviews(&self) -> &ReviewsService {
        &self.inner.reviews
    }

    /// Profile and address operations.
    #[must_use]
    pub fn users(&self) -> &UsersService {
        &self.inner.users
    }

    /// Order history operations.
    #[must_use]
    pub fn orders(&self) -> &OrdersService {
        &self.inner.orders
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn test_clones_share_cart_state() {
        let config = ClientConfig::new("http://localhost:8080/api", "unused.json").unwrap();
        let storefront =
            Storefront::with_session(config, Arc::new(MemorySessionStore::new()));
        let observer = storefront.clone();

        storefront.session().set_token("tok");
        assert!(observer.auth().is_authenticated());
        assert_eq!(observer.cart().item_count(), storefront.cart().item_count());
    }
}
