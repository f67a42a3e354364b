//! Cart aggregates for totals and the floating cart button.

use menulink_core::{CartLineItem, CurrencyCode, format_total};
use rust_decimal::Decimal;
use serde::Serialize;

/// Totals computed from the cart's line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    /// Sum of all quantities.
    pub item_count: u64,
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of price times quantity, `None` if it does not fit in a `Decimal`.
    pub subtotal: Option<Decimal>,
}

impl Default for CartSummary {
    fn default() -> Self {
        Self {
            item_count: 0,
            line_count: 0,
            subtotal: Some(Decimal::ZERO),
        }
    }
}

impl CartSummary {
    /// Compute totals for `items`.
    #[must_use]
    pub fn from_items(items: &[CartLineItem]) -> Self {
        items.iter().fold(Self::default(), |mut acc, line| {
            acc.item_count = acc.item_count.saturating_add(u64::from(line.quantity));
            acc.line_count += 1;
            acc.subtotal = acc
                .subtotal
                .zip(line.line_total())
                .and_then(|(sum, total)| sum.checked_add(total));
            acc
        })
    }

    /// Whether the cart holds nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Label for the floating cart button, or `None` when it should be hidden.
    #[must_use]
    pub fn button_label(&self) -> Option<String> {
        (!self.is_empty()).then(|| format!("Open Cart ({})", self.item_count))
    }

    /// Subtotal formatted with a currency symbol.
    #[must_use]
    pub fn subtotal_display(&self, currency: CurrencyCode) -> String {
        format_total(self.subtotal, currency)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use menulink_core::{AMOUNT_TOO_LARGE, MenuItemId, Price};

    use super::*;

    fn line(id: &str, price: &str, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: MenuItemId::new(id),
            name: id.to_uppercase(),
            price: Price::parse(price).unwrap(),
            quantity,
        }
    }

    #[test]
    fn test_empty_summary_hides_button() {
        let summary = CartSummary::from_items(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.button_label(), None);
        assert_eq!(summary.subtotal_display(CurrencyCode::INR), "₹0.00");
    }

    #[test]
    fn test_totals() {
        let summary = CartSummary::from_items(&[line("a", "100", 2), line("b", "12.5", 3)]);
        assert_eq!(summary.item_count, 5);
        assert_eq!(summary.line_count, 2);
        assert_eq!(summary.subtotal, Some(Decimal::new(2375, 1)));
        assert_eq!(summary.button_label().as_deref(), Some("Open Cart (5)"));
        assert_eq!(summary.subtotal_display(CurrencyCode::INR), "₹237.50");
    }

    #[test]
    fn test_overflowing_subtotal_is_reported_not_panicked() {
        let huge = line("a", "100000000000000000000000000", 1000);
        let summary = CartSummary::from_items(&[huge]);
        assert_eq!(summary.subtotal, None);
        assert_eq!(summary.item_count, 1000);
        assert_eq!(summary.button_label().as_deref(), Some("Open Cart (1000)"));
        assert_eq!(summary.subtotal_display(CurrencyCode::INR), AMOUNT_TOO_LARGE);

        // Each line fits, the sum does not
        let max = line("b", "79228162514264337593543950335", 1);
        let summary = CartSummary::from_items(&[max.clone(), line("c", "1", 1)]);
        assert_eq!(summary.subtotal, None);
        assert_eq!(CartSummary::from_items(&[max]).subtotal, Some(Decimal::MAX));
    }
}
