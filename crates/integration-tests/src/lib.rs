//! Test support: an in-process mock of the storefront backend.
//!
//! The mock speaks the backend's envelope protocol (`{status, data,
//! message}` with HTTP 200 even for rejections) and records enough about
//! incoming requests for tests to assert on wire behavior: request counts,
//! the last query strings seen, the last `Authorization` header, and the
//! quantities received by cart mutations.
//!
//! Tests drive failure paths through injection methods: a one-shot
//! envelope rejection, a one-shot raw HTTP error, and staged cart fetch
//! responses with per-response delays for ordering tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::RwLock;

use clementine_client::config::ClientConfig;
use clementine_client::session::MemorySessionStore;
use clementine_client::state::Storefront;

/// Fabricate an unsigned JWT with the given `exp` claim.
///
/// The client only reads the payload segment, so the signature is a
/// placeholder.
#[must_use]
pub fn issue_token(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"alice","exp":{exp}}}"#));
    format!("{header}.{payload}.signature")
}

/// A token whose expiry is one hour in the future.
#[must_use]
pub fn fresh_token() -> String {
    issue_token(chrono_now() + 3600)
}

fn chrono_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// A cart line as the mock stores and serves it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRecord {
    pub id: i64,
    pub product_id: i64,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub product_name: String,
}

/// A staged response for one `GET /cart/items`, served after `delay`.
struct StagedFetch {
    items: Vec<CartItemRecord>,
    delay: Duration,
}

#[derive(Default)]
struct BackendState {
    cart: Vec<CartItemRecord>,
    next_cart_item_id: i64,
    catalog: HashMap<i64, Decimal>,
    cart_fetch_plan: VecDeque<StagedFetch>,
    cart_fetch_count: usize,
    cart_mutation_count: usize,
    last_authorization: Option<String>,
    last_update_quantity: Option<i64>,
    last_products_query: HashMap<String, String>,
    last_orders_query: HashMap<String, String>,
    last_phone_query: HashMap<String, String>,
    reject_next_remove: Option<(i32, String)>,
    reject_next_products: Option<(i32, String)>,
    fail_next_products: Option<u16>,
}

type SharedState = Arc<RwLock<BackendState>>;

/// Handle to a running mock backend bound to an ephemeral port.
pub struct MockBackend {
    state: SharedState,
    addr: SocketAddr,
}

impl MockBackend {
    /// Bind an ephemeral port and serve the mock until the test ends.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn spawn() -> Self {
        let state: SharedState = Arc::new(RwLock::new(BackendState::default()));
        let app = router(Arc::clone(&state));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Self { state, addr }
    }

    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A storefront wired to this mock over an in-memory session store.
    ///
    /// # Panics
    ///
    /// Panics if the mock's address is not a valid base URL.
    #[must_use]
    pub fn storefront(&self) -> Storefront {
        let config =
            ClientConfig::new(&self.base_url(), "unused-session.json").expect("valid base url");
        Storefront::with_session(config, Arc::new(MemorySessionStore::new()))
    }

    // =========================================================================
    // Seeding and failure injection
    // =========================================================================

    pub async fn seed_cart_item(&self, product_id: i64, quantity: u32, unit_price: Decimal) {
        let mut state = self.state.write().await;
        state.next_cart_item_id += 1;
        let id = state.next_cart_item_id;
        state.cart.push(CartItemRecord {
            id,
            product_id,
            quantity,
            unit_price,
            product_name: format!("Product {product_id}"),
        });
    }

    pub async fn seed_product_price(&self, product_id: i64, unit_price: Decimal) {
        self.state
            .write()
            .await
            .catalog
            .insert(product_id, unit_price);
    }

    /// Stage one `GET /cart/items` response, served after `delay` instead
    /// of the live cart. Staged responses are consumed in order.
    pub async fn stage_cart_fetch(&self, items: Vec<CartItemRecord>, delay: Duration) {
        self.state
            .write()
            .await
            .cart_fetch_plan
            .push_back(StagedFetch { items, delay });
    }

    /// Make the next `DELETE /cart/items/{id}` fail with an envelope
    /// rejection.
    pub async fn reject_next_remove(&self, status: i32, message: &str) {
        self.state.write().await.reject_next_remove = Some((status, message.to_string()));
    }

    /// Make the next `GET /products` fail with an envelope rejection.
    pub async fn reject_next_products(&self, status: i32, message: &str) {
        self.state.write().await.reject_next_products = Some((status, message.to_string()));
    }

    /// Make the next `GET /products` fail at the HTTP layer.
    pub async fn fail_next_products(&self, status: u16) {
        self.state.write().await.fail_next_products = Some(status);
    }

    // =========================================================================
    // Recorded observations
    // =========================================================================

    pub async fn cart_fetch_count(&self) -> usize {
        self.state.read().await.cart_fetch_count
    }

    pub async fn cart_mutation_count(&self) -> usize {
        self.state.read().await.cart_mutation_count
    }

    pub async fn last_authorization(&self) -> Option<String> {
        self.state.read().await.last_authorization.clone()
    }

    pub async fn last_update_quantity(&self) -> Option<i64> {
        self.state.read().await.last_update_quantity
    }

    pub async fn last_products_query(&self) -> HashMap<String, String> {
        self.state.read().await.last_products_query.clone()
    }

    pub async fn last_orders_query(&self) -> HashMap<String, String> {
        self.state.read().await.last_orders_query.clone()
    }

    pub async fn last_phone_query(&self) -> HashMap<String, String> {
        self.state.read().await.last_phone_query.clone()
    }

    pub async fn cart_items(&self) -> Vec<CartItemRecord> {
        self.state.read().await.cart.clone()
    }
}

// =============================================================================
// Router and handlers
// =============================================================================

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/auth/signin", post(signin))
        .route("/cart/items", get(cart_list).post(cart_add))
        .route("/cart/items/{id}", put(cart_update).delete(cart_remove))
        .route("/products", get(products_list))
        .route("/orders", get(orders_list))
        .route("/user/phone", put(phone_update))
        .with_state(state)
}

fn ok<T: Serialize>(data: &T) -> Json<Value> {
    Json(json!({ "status": 200, "data": data, "message": null }))
}

fn rejected(status: i32, message: &str) -> Json<Value> {
    Json(json!({ "status": status, "data": null, "message": message }))
}

fn page_of(content: Value) -> Value {
    let total = content.as_array().map_or(0, Vec::len);
    json!({
        "content": content,
        "pageNumber": 0,
        "pageSize": 10,
        "totalElements": total,
        "totalPages": 1,
        "first": true,
        "last": true,
        "empty": total == 0,
    })
}

async fn signin(Json(body): Json<Value>) -> Json<Value> {
    let username = body["username"].as_str().unwrap_or("alice");
    ok(&json!({
        "token": fresh_token(),
        "type": "Bearer",
        "id": 1,
        "username": username,
        "realName": "Alice Doe",
        "phone": "555-0100",
        "roles": ["ROLE_USER"],
    }))
}

async fn cart_list(State(state): State<SharedState>, headers: HeaderMap) -> Json<Value> {
    let staged = {
        let mut state = state.write().await;
        state.cart_fetch_count += 1;
        state.last_authorization = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        state.cart_fetch_plan.pop_front()
    };

    match staged {
        Some(staged) => {
            tokio::time::sleep(staged.delay).await;
            ok(&staged.items)
        }
        None => ok(&state.read().await.cart),
    }
}

async fn cart_add(State(state): State<SharedState>, Json(body): Json<Value>) -> Json<Value> {
    let mut state = state.write().await;
    state.cart_mutation_count += 1;

    let product_id = body["productId"].as_i64().unwrap_or(0);
    let quantity = u32::try_from(body["quantity"].as_i64().unwrap_or(1)).unwrap_or(1);
    let unit_price = state
        .catalog
        .get(&product_id)
        .copied()
        .unwrap_or_else(|| Decimal::new(999, 2));

    state.next_cart_item_id += 1;
    let record = CartItemRecord {
        id: state.next_cart_item_id,
        product_id,
        quantity,
        unit_price,
        product_name: format!("Product {product_id}"),
    };
    state.cart.push(record.clone());
    ok(&record)
}

async fn cart_update(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut state = state.write().await;
    state.cart_mutation_count += 1;

    let quantity = body["quantity"].as_i64();
    state.last_update_quantity = quantity;

    let Some(item) = state.cart.iter_mut().find(|item| item.id == id) else {
        return rejected(404, "item not found");
    };
    item.quantity = u32::try_from(quantity.unwrap_or(0)).unwrap_or(0);
    let item = item.clone();
    ok(&item)
}

async fn cart_remove(State(state): State<SharedState>, Path(id): Path<i64>) -> Json<Value> {
    let mut state = state.write().await;
    state.cart_mutation_count += 1;

    if let Some((status, message)) = state.reject_next_remove.take() {
        return rejected(status, &message);
    }
    state.cart.retain(|item| item.id != id);
    ok(&"Item removed")
}

async fn products_list(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let mut state = state.write().await;
    state.last_products_query = query;

    if let Some(status) = state.fail_next_products.take() {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, "mock backend failure").into_response();
    }
    if let Some((status, message)) = state.reject_next_products.take() {
        return rejected(status, &message).into_response();
    }

    ok(&page_of(json!([
        { "id": 1, "name": "Ceramic Mug", "unitPrice": 12.50 },
        { "id": 2, "name": "Steel Bottle", "unitPrice": 24.00 },
    ])))
    .into_response()
}

async fn orders_list(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.write().await.last_orders_query = query;
    ok(&page_of(json!([])))
}

async fn phone_update(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.write().await.last_phone_query = query;
    ok(&"Phone number updated successfully")
}
