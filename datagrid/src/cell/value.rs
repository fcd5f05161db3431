//! Typed cell values.

use chrono::{DateTime, Utc};

use super::price::Price;
use crate::fragment::Fragment;

/// A typed cell value.
///
/// This is the variant-type replacement for string "kind" tags: a
/// column's accessor produces a `CellValue` and [`render`](super::render)
/// dispatches on it with an exhaustive match, so adding a kind is a
/// compile-checked extension. Values without a declared kind travel in
/// the [`CellValue::Json`] fallback, which renders defined values as text
/// and absent values as the em-dash.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value.
    Null,
    /// Plain text; the empty string renders the em-dash.
    Text(String),
    /// Numeric value. Zero renders as `0`, never the em-dash.
    Number(f64),
    /// Thumbnail URL; `None` renders the theme's placeholder asset.
    Photo(Option<String>),
    /// Filled/unfilled indicator dot.
    Dot(bool),
    /// Anchor with a label and target.
    Link { label: String, href: String },
    /// Anchor followed by a descriptive line.
    LinkWithText {
        label: String,
        href: String,
        description: String,
    },
    /// Primary line over a de-emphasized secondary line.
    Double { primary: String, secondary: String },
    /// Status badge keyed by its text.
    Status(String),
    /// Monetary amount.
    Price(Price),
    /// Calendar date, shown as `dd.mm.yyyy`.
    Date(DateTime<Utc>),
    /// Date with time of day, shown as `dd.mm.yyyy hh:mm`.
    DateTime(DateTime<Utc>),
    /// Inclusive date range, shown as `from X to Y`.
    DateRange(DateTime<Utc>, DateTime<Utc>),
    /// One line per element; empty elements are skipped.
    Array(Vec<String>),
    /// One `(label, href)` anchor per line; entries with an empty label
    /// are skipped.
    ArrayLinks(Vec<(String, String)>),
    /// Caller-supplied fragment, passed through untouched.
    Custom(Fragment),
    /// Fallback for values without a declared kind.
    Json(serde_json::Value),
}

impl CellValue {
    /// Anchor for an entity id pointing at its detail page.
    pub fn linked_id(id: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            label: id.into(),
            href: href.into(),
        }
    }

    /// Anchor for an email address with a `mailto:` target.
    pub fn linked_email(address: impl Into<String>) -> Self {
        let address = address.into();
        let href = format!("mailto:{address}");
        Self::Link {
            label: address,
            href,
        }
    }

    /// Whether this value is absent.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for CellValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i64> for CellValue {
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<i32> for CellValue {
    fn from(number: i32) -> Self {
        Self::Number(number as f64)
    }
}

impl From<bool> for CellValue {
    fn from(filled: bool) -> Self {
        Self::Dot(filled)
    }
}

impl From<Price> for CellValue {
    fn from(price: Price) -> Self {
        Self::Price(price)
    }
}

impl From<Fragment> for CellValue {
    fn from(fragment: Fragment) -> Self {
        Self::Custom(fragment)
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}
