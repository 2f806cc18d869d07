//! Clementine Core - Shared types library.
//!
//! This crate provides common types used across all Clementine components:
//! - `client` - Storefront data layer (HTTP client, cart store, services)
//! - `cli` - Command-line tool exercising the data layer
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money helpers, and
//!   status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
