//! Discount types and edits.

use crate::error::DiscountError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Percentage off.
    #[default]
    Percent,
    /// Fixed amount off.
    Flat,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percent => "percent",
            DiscountType::Flat => "flat",
        }
    }

    /// Label shown in the type selector.
    pub fn label(&self) -> &'static str {
        match self {
            DiscountType::Percent => "% Off",
            DiscountType::Flat => "Flat Off",
        }
    }

    /// Parse a type token. Accepts `%` as an alias for percent.
    pub fn parse(token: &str) -> Result<Self, DiscountError> {
        match token.trim().to_lowercase().as_str() {
            "%" | "percent" | "percentage" => Ok(DiscountType::Percent),
            "flat" => Ok(DiscountType::Flat),
            other => Err(DiscountError::InvalidDiscountType(other.to_string())),
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single edit to a discount: either its value or its type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiscountEdit {
    /// New discount value, already clamped to be non-negative.
    Value(f64),
    /// New discount type.
    Type(DiscountType),
}

impl DiscountEdit {
    /// Value edit; negative and NaN input clamp to 0.
    pub fn value(raw: f64) -> Self {
        if raw.is_nan() || raw < 0.0 {
            DiscountEdit::Value(0.0)
        } else {
            DiscountEdit::Value(raw)
        }
    }

    /// Value edit from text input.
    ///
    /// Reads the leading integer; anything unparseable becomes 0.
    pub fn parse_value(input: &str) -> Self {
        Self::value(leading_integer(input).unwrap_or(0) as f64)
    }

    /// Type edit from a type token.
    pub fn parse_type(token: &str) -> Result<Self, DiscountError> {
        DiscountType::parse(token).map(DiscountEdit::Type)
    }
}

fn leading_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
