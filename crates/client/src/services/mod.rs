//! Per-resource service wrappers.
//!
//! Each service is a thin, stateless convenience layer: one operation per
//! backend endpoint, applying resource-specific default query parameters
//! and unwrapping the response envelope into a typed result. The cart is
//! not a service - it owns shared state and lives in [`crate::cart`].

mod auth;
mod orders;
mod products;
mod reviews;
mod users;

pub use auth::AuthService;
pub use orders::OrdersService;
pub use products::ProductsService;
pub use reviews::ReviewsService;
pub use users::UsersService;
