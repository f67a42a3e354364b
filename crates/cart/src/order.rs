//! Order hand-off over WhatsApp.
//!
//! Checkout does not go through the backend: the cart is rendered as a
//! plain-text order and opened as a `wa.me` link addressed to the
//! restaurant's WhatsApp number.

use std::fmt::Write as _;

use menulink_core::{CartLineItem, CurrencyCode, Restaurant, format_total};

use crate::summary::CartSummary;

/// A rendered order, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMessage {
    text: String,
}

impl OrderMessage {
    /// Render an order for `items`. Returns `None` for an empty cart.
    #[must_use]
    pub fn build(restaurant_name: &str, items: &[CartLineItem], currency: CurrencyCode) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        let greeting = if restaurant_name.trim().is_empty() {
            "there"
        } else {
            restaurant_name.trim()
        };

        let mut text = format!("Hi {greeting}!\n\nI'd like to order:\n");
        for line in items {
            // Writing to a String cannot fail
            let _ = writeln!(
                text,
                "*{}* x{} - {}",
                line.name,
                line.quantity,
                format_total(line.line_total(), currency)
            );
        }
        let summary = CartSummary::from_items(items);
        let _ = write!(text, "\n*Total:* {}", summary.subtotal_display(currency));

        Some(Self { text })
    }

    /// The message body.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `wa.me` link that opens a chat with `number` prefilled with this order.
    #[must_use]
    pub fn whatsapp_link(&self, number: &str) -> Option<String> {
        whatsapp_link(number, &self.text)
    }
}

/// Build a `wa.me` link for `number` with `text` prefilled.
///
/// Everything but ASCII digits is stripped from `number`, so formatted input
/// like `"+91 98765-43210"` works. Returns `None` when no digits remain.
#[must_use]
pub fn whatsapp_link(number: &str, text: &str) -> Option<String> {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!(
        "https://wa.me/{digits}?text={}",
        urlencoding::encode(text)
    ))
}

/// Checkout link for `restaurant`, or `None` when the cart is empty or the
/// restaurant has no usable WhatsApp number.
#[must_use]
pub fn checkout_link(
    restaurant: &Restaurant,
    items: &[CartLineItem],
    currency: CurrencyCode,
) -> Option<String> {
    let number = restaurant.whatsapp.as_deref()?;
    let link = OrderMessage::build(&restaurant.name, items, currency)?.whatsapp_link(number);
    if link.is_none() {
        tracing::debug!(slug = %restaurant.slug, "Restaurant WhatsApp number has no digits");
    }
    link
}
