//! Prices and discount arithmetic.
//!
//! Prices are held in minor units (cents). Catalog prices arrive as decimal
//! strings and are converted once, on the way in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency a catalog is priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// ISO code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Prefix used when rendering a price.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A price in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    pub cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(cents: i64, currency: Currency) -> Self {
        Self { cents, currency }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Round a decimal amount to the nearest cent.
    ///
    /// ```
    /// use discount_core::money::{Currency, Money};
    /// assert_eq!(Money::from_decimal(49.99, Currency::USD).cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Parse a catalog price such as `"20.99"` or `"$20.99"`.
    ///
    /// Non-numeric and non-finite input yields `None`.
    pub fn parse_decimal(raw: &str, currency: Currency) -> Option<Self> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix(currency.symbol()).unwrap_or(trimmed);
        let amount: f64 = digits.trim().parse().ok()?;
        amount.is_finite().then(|| Self::from_decimal(amount, currency))
    }

    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// `percent`% of this price, rounded to the cent.
    pub fn percent(&self, percent: f64) -> Self {
        Self::new((self.cents as f64 * percent / 100.0).round() as i64, self.currency)
    }

    /// This price reduced by `off`, never below zero.
    pub fn reduced_by(&self, off: Money) -> Self {
        let off = off.cents.clamp(0, self.cents.max(0));
        Self::new(self.cents - off, self.currency)
    }

    /// Rendered form, e.g. `"$49.99"`.
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        format!("{}{}{}.{:02}", sign, self.currency.symbol(), abs / 100, abs % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_parse_catalog_prices() {
        assert_eq!(Money::parse_decimal("20.99", Currency::USD), Some(usd(2099)));
        assert_eq!(Money::parse_decimal(" $49 ", Currency::USD), Some(usd(4900)));
        assert_eq!(Money::parse_decimal("abc", Currency::USD), None);
        assert_eq!(Money::parse_decimal("NaN", Currency::USD), None);
    }

    #[test]
    fn test_percent_and_reduction() {
        let price = usd(1999);
        assert_eq!(price.percent(10.0), usd(200));
        assert_eq!(price.reduced_by(usd(500)), usd(1499));
        assert_eq!(price.reduced_by(usd(5000)), usd(0));
        assert_eq!(price.reduced_by(usd(-100)), price);
    }

    #[test]
    fn test_display() {
        assert_eq!(usd(4999).display(), "$49.99");
        assert_eq!(usd(5).display(), "$0.05");
        assert_eq!(Money::new(1200, Currency::EUR).to_string(), "\u{20ac}12.00");
    }
}
