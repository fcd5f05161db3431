//! Row records and identifiers.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::error::GridError;

/// Stable row identity used as the selection, expansion and drag key.
///
/// Ids are caller-supplied and must stay stable across data refreshes.
/// Numeric ids order before string ids so that notification payloads
/// sort deterministically for mixed id types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Str(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(n) => write!(f, "{n}"),
            RowId::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RowId {
    fn from(id: i64) -> Self {
        RowId::Int(id)
    }
}

impl From<i32> for RowId {
    fn from(id: i32) -> Self {
        RowId::Int(id as i64)
    }
}

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        RowId::Str(id.to_string())
    }
}

impl From<String> for RowId {
    fn from(id: String) -> Self {
        RowId::Str(id)
    }
}

/// One data record in the grid.
///
/// A row is an opaque record: a stable id, a field map read through
/// column accessors, and optionally nested sub-rows of the same shape.
/// The grid borrows rows read-only; reordering always hands the caller a
/// new vector.
///
/// # Example
///
/// ```
/// use datagrid::row::Row;
///
/// let row = Row::new(7)
///     .set("name", "Warehouse A")
///     .with_sub_rows(vec![Row::new(71).set("name", "Dock 1")]);
/// assert!(row.can_expand());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: RowId,
    fields: HashMap<String, CellValue>,
    sub_rows: Vec<Row>,
}

impl Row {
    /// Create an empty record with the given id.
    pub fn new(id: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
            sub_rows: Vec::new(),
        }
    }

    /// Set a field value.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Attach nested sub-rows.
    pub fn with_sub_rows(mut self, sub_rows: Vec<Row>) -> Self {
        self.sub_rows = sub_rows;
        self
    }

    /// The stable row id.
    pub fn id(&self) -> &RowId {
        &self.id
    }

    /// Look up a field value.
    pub fn field(&self, name: &str) -> Option<&CellValue> {
        self.fields.get(name)
    }

    /// All field values.
    pub fn fields(&self) -> &HashMap<String, CellValue> {
        &self.fields
    }

    /// Nested sub-rows, in order.
    pub fn sub_rows(&self) -> &[Row] {
        &self.sub_rows
    }

    /// Whether this row can expand (has sub-rows).
    pub fn can_expand(&self) -> bool {
        !self.sub_rows.is_empty()
    }

    /// Detect the text-row shape: a record carrying exactly one data
    /// field, named by `section_field`, holding non-empty text. Such a
    /// row collapses into a single full-width section cell. Any
    /// additional field defeats the mode, even if the section field is
    /// also present.
    pub fn section_text(&self, section_field: &str) -> Option<&str> {
        if self.fields.len() != 1 {
            return None;
        }
        match self.fields.get(section_field) {
            Some(CellValue::Text(text)) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Validate that row ids are unique among siblings at every nesting
/// level. Ids may repeat across levels; the drag/selection key contract
/// only requires sibling uniqueness.
pub(crate) fn validate_sibling_ids(rows: &[Row]) -> Result<(), GridError> {
    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        if !seen.insert(row.id()) {
            return Err(GridError::DuplicateRowId(row.id().to_string()));
        }
        validate_sibling_ids(row.sub_rows())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_id_ordering() {
        let mut ids = vec![
            RowId::from("beta"),
            RowId::from(10),
            RowId::from("alpha"),
            RowId::from(2),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                RowId::from(2),
                RowId::from(10),
                RowId::from("alpha"),
                RowId::from("beta"),
            ]
        );
    }

    #[test]
    fn test_section_text_requires_exact_shape() {
        let section = Row::new(1).set("string", "Header");
        assert_eq!(section.section_text("string"), Some("Header"));

        // An extra field defeats the mode even with the section field present.
        let not_section = Row::new(2).set("string", "Header").set("name", "A");
        assert_eq!(not_section.section_text("string"), None);

        let wrong_field = Row::new(3).set("title", "Header");
        assert_eq!(wrong_field.section_text("string"), None);
    }

    #[test]
    fn test_duplicate_sibling_ids_rejected() {
        let rows = vec![Row::new(1), Row::new(2), Row::new(1)];
        assert_eq!(
            validate_sibling_ids(&rows),
            Err(GridError::DuplicateRowId("1".to_string()))
        );

        // Same id on different levels is fine.
        let nested = vec![Row::new(1).with_sub_rows(vec![Row::new(1)])];
        assert!(validate_sibling_ids(&nested).is_ok());
    }
}
