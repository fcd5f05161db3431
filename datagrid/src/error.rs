//! Grid error types.

use thiserror::Error;

/// Errors raised at the grid's construction and data boundaries.
///
/// Every variant is a caller-contract violation and is reported where it
/// is detected instead of being coerced away. Data absence (a missing
/// cell value, an empty row set) is never an error; it renders the
/// documented empty-state affordance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Two columns were declared with the same id.
    #[error("duplicate column id `{0}`")]
    DuplicateColumnId(String),

    /// Two sibling rows share the same id at one nesting level.
    #[error("duplicate row id `{0}` among siblings")]
    DuplicateRowId(String),

    /// A price literal could not be parsed as a decimal amount.
    #[error("malformed price literal `{0}`")]
    BadPrice(String),
}
