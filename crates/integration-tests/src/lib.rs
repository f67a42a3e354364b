//! Integration tests for MenuLink.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p menulink-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_reload` - Cart survives a reload over file and memory storage
//! - `cart_consumers` - Menu browsing, floating button and checkout flows
//! - `cart_properties` - Property tests over arbitrary operation sequences
//!
//! This crate only hosts shared fixtures.

use menulink_core::{CategoryId, MenuCategory, MenuItem, MenuItemId, NewCartItem, Price};

/// A cart snapshot for an item priced in whole rupees.
#[must_use]
pub fn dish(id: &str, name: &str, rupees: i64) -> NewCartItem {
    NewCartItem::new(id, name, rupee_price(rupees))
}

/// A menu category with `count` items named `"{prefix} {n}"`.
#[must_use]
pub fn category(id: &str, prefix: &str, count: usize) -> MenuCategory {
    MenuCategory {
        id: CategoryId::new(id),
        name: prefix.to_string(),
        menu_items: (0..count)
            .map(|n| MenuItem {
                id: MenuItemId::new(format!("{id}-{n}")),
                name: format!("{prefix} {n}"),
                description: None,
                price: rupee_price(50 + i64::try_from(n).unwrap_or(0)),
                image: None,
            })
            .collect(),
    }
}

fn rupee_price(rupees: i64) -> Price {
    Price::from_minor(rupees.max(0).saturating_mul(100)).unwrap_or(Price::ZERO)
}
