//! Checkout command.
//!
//! # Usage
//!
//! ```bash
//! # Print the order message and a WhatsApp link for it
//! menulink checkout --restaurant "Spice Hut" --whatsapp "+91 98765 43210"
//!
//! # Same, then empty the cart
//! menulink checkout --restaurant "Spice Hut" --whatsapp 919876543210 --clear
//! ```

use std::io::Write;

use menulink_cart::{CartStore, KeyValueStore, OrderMessage};
use menulink_core::CurrencyCode;

use crate::error::{CliError, Result};

/// Render the order and its WhatsApp link.
pub fn run<S: KeyValueStore>(
    cart: &mut CartStore<S>,
    restaurant: &str,
    whatsapp: &str,
    currency: CurrencyCode,
    clear_after: bool,
    out: &mut impl Write,
) -> Result<()> {
    let message =
        OrderMessage::build(restaurant, cart.list_items(), currency).ok_or(CliError::EmptyCart)?;
    let link = message
        .whatsapp_link(whatsapp)
        .ok_or_else(|| CliError::InvalidWhatsApp(whatsapp.to_owned()))?;

    writeln!(out, "{}", message.text())?;
    writeln!(out)?;
    writeln!(out, "{link}")?;

    if clear_after {
        cart.clear();
        tracing::info!("Cart cleared after checkout");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use menulink_cart::MemoryStore;
    use menulink_core::{NewCartItem, Price};

    use super::*;

    fn cart_with_soup() -> CartStore<MemoryStore> {
        let mut cart = CartStore::open(MemoryStore::new());
        cart.add_item(NewCartItem::new("a", "Soup", Price::parse("100").unwrap()));
        cart
    }

    #[test]
    fn test_checkout_prints_message_and_link() {
        let mut cart = cart_with_soup();
        let mut out = Vec::new();
        run(&mut cart, "Spice Hut", "+91 98765 43210", CurrencyCode::INR, false, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Hi Spice Hut!"));
        assert!(output.contains("*Soup* x1 - ₹100.00"));
        assert!(output.trim_end().ends_with(
            "https://wa.me/919876543210?text=Hi%20Spice%20Hut%21%0A%0AI%27d%20like%20to%20order%3A%0A%2ASoup%2A%20x1%20-%20%E2%82%B9100.00%0A%0A%2ATotal%3A%2A%20%E2%82%B9100.00"
        ));
        assert_eq!(cart.get_quantity("a"), 1);
    }

    #[test]
    fn test_checkout_with_overflowing_total() {
        let mut cart = CartStore::open(MemoryStore::new());
        cart.add_item(NewCartItem::new(
            "a",
            "Feast",
            Price::parse("100000000000000000000000000").unwrap(),
        ));
        cart.set_quantity("a", 1000);

        let mut out = Vec::new();
        run(&mut cart, "Spice Hut", "919876543210", CurrencyCode::INR, false, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("*Total:* amount too large"));
    }

    #[test]
    fn test_checkout_can_clear() {
        let mut cart = cart_with_soup();
        let mut out = Vec::new();
        run(&mut cart, "Spice Hut", "919876543210", CurrencyCode::INR, true, &mut out).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_errors() {
        let mut out = Vec::new();

        let mut empty = CartStore::open(MemoryStore::new());
        assert!(matches!(
            run(&mut empty, "Spice Hut", "919876543210", CurrencyCode::INR, true, &mut out),
            Err(CliError::EmptyCart)
        ));

        let mut cart = cart_with_soup();
        assert!(matches!(
            run(&mut cart, "Spice Hut", "none", CurrencyCode::INR, true, &mut out),
            Err(CliError::InvalidWhatsApp(_))
        ));
        // Failed checkout keeps the cart
        assert_eq!(cart.get_quantity("a"), 1);
    }
}
