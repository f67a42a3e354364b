//! Cart line item models.
//!
//! A [`CartLineItem`] is the persisted unit of the cart: a snapshot of a menu
//! item's identity, name and price plus the requested quantity. The field
//! names match the JSON layout stored on the device.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::MenuItemId;
use super::price::Price;

/// Snapshot data passed to the cart when a user adds a menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    /// Menu item identifier; the cart's unique key.
    pub id: MenuItemId,
    /// Display name at the time of adding.
    pub name: String,
    /// Unit price at the time of adding.
    pub price: Price,
}

impl NewCartItem {
    /// Create a new cart item snapshot.
    #[must_use]
    pub fn new(id: impl Into<MenuItemId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// One row of the cart.
///
/// `quantity` is always at least 1 while the row is in a cart; the cart store
/// removes rows instead of keeping them at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl CartLineItem {
    /// Start a new row for `item` with a quantity of 1.
    #[must_use]
    pub fn first(item: NewCartItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            quantity: 1,
        }
    }

    /// Unit price multiplied by quantity, or `None` on overflow.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.line_total(self.quantity)
    }
}
