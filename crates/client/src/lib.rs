//! Clementine client - storefront data layer.
//!
//! This crate is the client-side data layer of the Clementine storefront:
//! typed service wrappers over the backend REST API plus a shared cart
//! store that keeps derived totals consistent with server state.
//!
//! # Architecture
//!
//! - [`api`] - HTTP client: bearer-token injection, response envelope
//!   unwrapping, error normalization
//! - [`session`] - durable token/user storage (re-read on every access)
//! - [`cart`] - shared cart store; every mutation is followed by a full
//!   re-fetch of server state, never an optimistic local patch
//! - [`services`] - one thin wrapper per resource area (auth, products,
//!   reviews, users, orders)
//! - [`state`] - the [`state::Storefront`] facade wiring everything
//!   together as a single explicitly constructed instance
//!
//! # Example
//!
//! ```rust,ignore
//! use clementine_client::config::ClientConfig;
//! use clementine_client::state::Storefront;
//!
//! let storefront = Storefront::new(ClientConfig::from_env()?);
//! storefront.auth().login("alice", "secret").await?;
//! storefront.cart().add(ProductId::new(1), 2).await?;
//! println!("{}", storefront.cart().total_display());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod config;
pub mod models;
pub mod services;
pub mod session;
pub mod state;
