//! Monetary cell values.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::GridError;

/// A monetary amount backed by an exact decimal.
///
/// The fractional part survives exactly as written: `"1234.5"` formats
/// with a single fractional digit, not `50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(Decimal);

impl Price {
    /// Wrap a decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Format with thousands grouping and a currency suffix, e.g.
    /// `1 234.5 $` under the default theme tokens.
    pub fn format(&self, separator: char, currency: &str) -> String {
        let (sign, whole, fraction) = self.parts();
        let grouped = group_thousands(&whole, separator);
        let mut out = String::new();
        if sign {
            out.push('-');
        }
        out.push_str(&grouped);
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(&fraction);
        }
        if !currency.is_empty() {
            out.push(' ');
            out.push_str(currency);
        }
        out
    }

    /// Split into (negative, whole digits, fractional digits).
    fn parts(&self) -> (bool, String, Option<String>) {
        let text = self.0.to_string();
        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.as_str()),
        };
        match digits.split_once('.') {
            Some((whole, fraction)) => (sign, whole.to_string(), Some(fraction.to_string())),
            None => (sign, digits.to_string(), None),
        }
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl TryFrom<&str> for Price {
    type Error = GridError;

    /// Parse an `"integer.fraction"` literal. An unparseable literal is a
    /// caller-contract violation and fails fast.
    fn try_from(literal: &str) -> Result<Self, Self::Error> {
        Decimal::from_str(literal.trim())
            .map(Self)
            .map_err(|_| GridError::BadPrice(literal.to_string()))
    }
}

impl TryFrom<f64> for Price {
    type Error = GridError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Decimal::from_f64_retain(amount)
            .map(Self)
            .ok_or_else(|| GridError::BadPrice(amount.to_string()))
    }
}

/// Insert `separator` between every group of three digits, right to left.
fn group_thousands(digits: &str, separator: char) -> String {
    let count = digits.chars().count();
    let mut out = String::with_capacity(count + count / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (count - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
