//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! # Add one unit of a menu item
//! menulink cart add --id m1 --name "Paneer Tikka" --price 220
//!
//! # Set a quantity (0 or less removes the line)
//! menulink cart set m1 3
//!
//! # Remove a line, empty the cart, show it
//! menulink cart remove m1
//! menulink cart clear
//! menulink cart list --json
//! ```

use std::io::Write;

use menulink_cart::{CartStore, KeyValueStore};
use menulink_core::{CurrencyCode, NewCartItem, Price};

use crate::error::{CliError, Result};

/// Add one unit of an item and report the new quantity.
pub fn add<S: KeyValueStore>(
    cart: &mut CartStore<S>,
    id: &str,
    name: &str,
    price: &str,
    out: &mut impl Write,
) -> Result<()> {
    let id = id.trim();
    if id.is_empty() {
        return Err(CliError::EmptyId);
    }
    let price = Price::parse(price)?;

    cart.add_item(NewCartItem::new(id, name, price));
    writeln!(out, "{id}: {}", cart.get_quantity(id))?;
    Ok(())
}

/// Set the quantity of an existing line.
pub fn set<S: KeyValueStore>(
    cart: &mut CartStore<S>,
    id: &str,
    quantity: i64,
    out: &mut impl Write,
) -> Result<()> {
    let before = cart.get_quantity(id);
    cart.set_quantity(id, quantity);
    let after = cart.get_quantity(id);

    if before == 0 && quantity > 0 {
        writeln!(out, "{id} is not in the cart; add it first")?;
    } else {
        writeln!(out, "{id}: {after}")?;
    }
    Ok(())
}

/// Remove a line.
pub fn remove<S: KeyValueStore>(
    cart: &mut CartStore<S>,
    id: &str,
    out: &mut impl Write,
) -> Result<()> {
    cart.remove_item(id);
    writeln!(out, "{id}: 0")?;
    Ok(())
}

/// Empty the cart.
pub fn clear<S: KeyValueStore>(cart: &mut CartStore<S>, out: &mut impl Write) -> Result<()> {
    cart.clear();
    writeln!(out, "Cart cleared")?;
    Ok(())
}

/// Print the cart's lines and totals.
pub fn list<S: KeyValueStore>(
    cart: &CartStore<S>,
    currency: CurrencyCode,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    if json {
        let value = serde_json::json!({
            "items": cart.list_items(),
            "summary": cart.summary(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    if cart.is_empty() {
        writeln!(out, "Cart is empty")?;
        return Ok(());
    }

    for line in cart.list_items() {
        writeln!(
            out,
            "{:<12} {:<24} {:>4} x {:>10}",
            line.id.as_str(),
            line.name,
            line.quantity,
            line.price.display(currency)
        )?;
    }
    let summary = cart.summary();
    writeln!(
        out,
        "{} items, subtotal {}",
        summary.item_count,
        summary.subtotal_display(currency)
    )?;
    Ok(())
}
