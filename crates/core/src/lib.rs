//! MenuLink Core - Shared types library.
//!
//! This crate provides common types used across all MenuLink components:
//! - `cart` - Cart store, persistence adapter and cart consumers
//! - `cli` - Command-line front end over a file-backed cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for identifiers and prices, plus the menu
//!   and cart line item models

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
