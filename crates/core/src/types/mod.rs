//! Core types for MenuLink.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod menu;
pub mod price;

pub use cart::{CartLineItem, NewCartItem};
pub use id::*;
pub use menu::{MenuCategory, MenuItem, Restaurant};
pub use price::{AMOUNT_TOO_LARGE, CurrencyCode, Price, PriceError, format_amount, format_total};
