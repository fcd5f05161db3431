//! Generic form-field binding layer.
//!
//! Binds named fields (dot/bracket paths like `list[2].value`) to a
//! JSON-shaped values object: value/touched/error triples, a
//! pristine/valid/invalid lifecycle per field, explicit control
//! composition, reset-to-snapshot semantics, multi-select bindings, the
//! async-search session for autocomplete-style controls, and scoped
//! preview-URL handling. Validation rules and rendering belong to the
//! owning form and host UI.

pub mod compose;
pub mod error;
pub mod form;
pub mod multiselect;
pub mod path;
pub mod preview;
pub mod search;

pub mod prelude {
    pub use crate::compose::{
        ComposedControl, ControlKind, ControlProps, ControlSpec, FieldMessage, FieldScaffold,
        FieldView,
    };
    pub use crate::error::FormError;
    pub use crate::form::{Binding, FieldPhase, FormId, FormState};
    pub use crate::multiselect::MultiSelectBinding;
    pub use crate::path::{FieldPath, Segment};
    pub use crate::preview::{PreviewSlot, Revoker};
    pub use crate::search::{Choice, SearchPhase, SearchSession, SearchTicket};
}
