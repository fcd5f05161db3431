//! Form binding errors.

use thiserror::Error;

/// Errors raised at the binding boundary.
///
/// These are caller-contract violations and fail fast instead of being
/// coerced; silent coercion is how runtime type confusion crept into the
/// predecessors of this layer. A missing value is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A field path failed to parse.
    #[error("malformed field path `{path}`: {reason}")]
    PathSyntax { path: String, reason: String },

    /// A multi-select was bound to a non-array value.
    #[error("multi-select bound to non-array value at `{path}` (found {found})")]
    NonArrayValue { path: String, found: &'static str },
}
