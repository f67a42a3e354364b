//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are non-negative amounts in the currency's standard unit (rupees,
//! not paise). On the wire they are plain JSON numbers, which is the format
//! the menu API returns and the format the persisted cart snapshot uses.
//! The number is written with the exact decimal digits of the amount, so a
//! price read back from a snapshot is the price that was saved.
//!
//! Arithmetic on prices is checked: totals are `Option<Decimal>` and `None`
//! means the amount is too large to represent.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
    /// The input is not a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),
}

/// A non-negative unit price.
///
/// ## Examples
///
/// ```
/// use menulink_core::Price;
///
/// let soup = Price::parse("100").unwrap();
/// assert_eq!(soup.line_total(3).unwrap().to_string(), "300");
///
/// assert!(Price::parse("-1").is_err());
/// assert!(Price::parse("abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from an amount in minor units (e.g. paise).
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `minor` is below zero.
    pub fn from_minor(minor: i64) -> Result<Self, PriceError> {
        Self::new(Decimal::new(minor, 2))
    }

    /// Parse a price from a string such as `"149.50"`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Invalid`] for non-numeric input and
    /// [`PriceError::Negative`] for amounts below zero.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount = Decimal::from_str(s.trim()).map_err(|_| PriceError::Invalid(s.to_owned()))?;
        Self::new(amount)
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price multiplied by a quantity, or `None` on overflow.
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Option<Decimal> {
        self.0.checked_mul(Decimal::from(quantity))
    }

    /// Format for display with a currency symbol (e.g., "₹149.50").
    #[must_use]
    pub fn display(&self, currency: CurrencyCode) -> String {
        format_amount(self.0, currency)
    }
}

/// Shown in place of a total that overflowed.
pub const AMOUNT_TOO_LARGE: &str = "amount too large";

/// Format an arbitrary amount (e.g., a subtotal) with a currency symbol.
#[must_use]
pub fn format_amount(amount: Decimal, currency: CurrencyCode) -> String {
    format!("{}{amount:.2}", currency.symbol())
}

/// Format a checked total, falling back to [`AMOUNT_TOO_LARGE`] on overflow.
#[must_use]
pub fn format_total(total: Option<Decimal>, currency: CurrencyCode) -> String {
    total.map_or_else(
        || AMOUNT_TOO_LARGE.to_owned(),
        |amount| format_amount(amount, currency),
    )
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::arbitrary_precision::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::arbitrary_precision::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    AED,
}

impl CurrencyCode {
    /// Display symbol placed before amounts.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::AED => "AED ",
        }
    }

    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::INR => "INR",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::AED => "AED",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(Self::INR),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "AED" => Ok(Self::AED),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_prices() {
        assert_eq!(Price::parse("0").unwrap(), Price::ZERO);
        assert_eq!(Price::parse("100").unwrap().amount(), Decimal::from(100));
        assert_eq!(
            Price::parse(" 149.50 ").unwrap().amount(),
            Decimal::new(14950, 2)
        );
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(matches!(Price::parse("-0.01"), Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Price::parse("ten"), Err(PriceError::Invalid(_))));
        assert!(matches!(Price::parse(""), Err(PriceError::Invalid(_))));
    }

    #[test]
    fn test_line_total() {
        let price = Price::from_minor(1999).unwrap();
        assert_eq!(price.line_total(3), Some(Decimal::new(5997, 2)));
        assert_eq!(price.line_total(0), Some(Decimal::ZERO));
    }

    #[test]
    fn test_line_total_overflow_is_none() {
        let price = Price::parse("100000000000000000000000000").unwrap();
        assert_eq!(price.line_total(1000), None);
        assert_eq!(Price::new(Decimal::MAX).unwrap().line_total(1), Some(Decimal::MAX));
    }

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(Some(Decimal::from(5)), CurrencyCode::GBP), "£5.00");
        assert_eq!(format_total(None, CurrencyCode::GBP), AMOUNT_TOO_LARGE);
    }

    #[test]
    fn test_display_with_currency() {
        let price = Price::parse("100").unwrap();
        assert_eq!(price.display(CurrencyCode::INR), "₹100.00");
        assert_eq!(price.display(CurrencyCode::USD), "$100.00");
        assert_eq!(price.to_string(), "100.00");
    }

    #[test]
    fn test_serializes_as_json_number() {
        let price = Price::from_minor(14950).unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "149.50");
    }

    #[test]
    fn test_json_keeps_every_digit() {
        for raw in [
            "0.1234567890123456789",
            "79228162514264337593543950335",
            "0.0000000000000000000000000001",
        ] {
            let price = Price::parse(raw).unwrap();
            let json = serde_json::to_string(&price).unwrap();
            assert_eq!(json, raw);
            assert_eq!(serde_json::from_str::<Price>(&json).unwrap(), price);
        }
    }

    #[test]
    fn test_deserializes_integer_and_float() {
        let whole: Price = serde_json::from_str("100").unwrap();
        assert_eq!(whole.amount(), Decimal::from(100));

        let fractional: Price = serde_json::from_str("12.5").unwrap();
        assert_eq!(fractional.amount(), Decimal::new(125, 1));
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-5").is_err());
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("inr".parse::<CurrencyCode>().unwrap(), CurrencyCode::INR);
        assert_eq!("USD".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert!("XYZ".parse::<CurrencyCode>().is_err());
        assert_eq!(CurrencyCode::default(), CurrencyCode::INR);
    }
}
