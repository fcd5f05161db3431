//! Form value state and field bindings.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use serde_json::Value;

use crate::error::FormError;
use crate::path::FieldPath;

/// Unique identifier for a FormState instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(usize);

impl FormId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__form_{}", self.0)
    }
}

/// Lifecycle phase of one bound field.
///
/// A field leaves `Pristine` on its first touch (blur or programmatic
/// mark) and is `Invalid` exactly while a non-empty error string is
/// attached to its path by the owning form's validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPhase {
    /// Never touched; validation state is not surfaced yet.
    #[default]
    Pristine,
    /// Touched, no error attached.
    Valid,
    /// Touched with an error attached.
    Invalid,
}

/// Internal state for a form.
#[derive(Debug)]
struct FormInner {
    /// Live values object.
    values: Value,
    /// Snapshot restored by `reset`.
    snapshot: Value,
    /// Canonical paths touched so far.
    touched: HashSet<String>,
    /// Canonical path -> validation error message.
    errors: HashMap<String, String>,
}

/// External form state that named fields bind against.
///
/// `FormState` owns a JSON-shaped values object and the per-path
/// touched/error bookkeeping. Handles are cheap to clone and share one
/// state. Validation itself lives in the owning form: it runs its pass
/// and attaches error strings through [`FormState::set_error`].
///
/// # Example
///
/// ```
/// use formbind::form::FormState;
/// use serde_json::json;
///
/// let form = FormState::new(json!({"list": [{}, {}, {"value": "x"}]}));
/// let binding = form.bind("list[2].value").unwrap();
/// assert_eq!(binding.value(), json!("x"));
/// binding.set(json!("y"));
/// assert_eq!(form.values()["list"][2]["value"], json!("y"));
/// ```
#[derive(Debug)]
pub struct FormState {
    /// Unique identifier.
    id: FormId,
    /// Internal state.
    inner: Arc<RwLock<FormInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl FormState {
    /// Create form state from initial values. The initial values double
    /// as the default reset snapshot.
    pub fn new(initial: Value) -> Self {
        Self {
            id: FormId::new(),
            inner: Arc::new(RwLock::new(FormInner {
                values: initial.clone(),
                snapshot: initial,
                touched: HashSet::new(),
                errors: HashMap::new(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID.
    pub fn id(&self) -> FormId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Values
    // -------------------------------------------------------------------------

    /// Snapshot of the whole values object.
    pub fn values(&self) -> Value {
        self.inner
            .read()
            .map(|g| g.values.clone())
            .unwrap_or(Value::Null)
    }

    /// The value at a path; a missing value reads as `null`.
    pub fn value(&self, path: &FieldPath) -> Value {
        self.inner
            .read()
            .ok()
            .and_then(|g| path.get(&g.values).cloned())
            .unwrap_or(Value::Null)
    }

    /// Write a value at a path, creating intermediate structure as
    /// needed. Sibling values keep their identity.
    pub fn set_value(&self, path: &FieldPath, next: Value) {
        if let Ok(mut guard) = self.inner.write() {
            path.set(&mut guard.values, next);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Touched / errors
    // -------------------------------------------------------------------------

    /// Mark a field as touched (first blur or programmatic mark).
    pub fn touch(&self, path: &FieldPath) {
        if let Ok(mut guard) = self.inner.write()
            && guard.touched.insert(path.to_string())
        {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if a field was touched.
    pub fn is_touched(&self, path: &FieldPath) -> bool {
        self.inner
            .read()
            .map(|g| g.touched.contains(&path.to_string()))
            .unwrap_or(false)
    }

    /// Attach a validation error to a field's path. An empty message
    /// clears the error instead.
    pub fn set_error(&self, path: &FieldPath, message: impl Into<String>) {
        let message = message.into();
        if let Ok(mut guard) = self.inner.write() {
            if message.is_empty() {
                guard.errors.remove(&path.to_string());
            } else {
                guard.errors.insert(path.to_string(), message);
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the error at a field's path.
    pub fn clear_error(&self, path: &FieldPath) {
        if let Ok(mut guard) = self.inner.write()
            && guard.errors.remove(&path.to_string()).is_some()
        {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// The error attached to a field, if any.
    pub fn error(&self, path: &FieldPath) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.errors.get(&path.to_string()).cloned())
    }

    /// Drop every attached error (start of a fresh validation pass).
    pub fn clear_errors(&self) {
        if let Ok(mut guard) = self.inner.write()
            && !guard.errors.is_empty()
        {
            guard.errors.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Whether any field currently carries an error.
    pub fn has_errors(&self) -> bool {
        self.inner
            .read()
            .map(|g| !g.errors.is_empty())
            .unwrap_or(false)
    }

    /// The lifecycle phase of one field.
    pub fn phase(&self, path: &FieldPath) -> FieldPhase {
        self.inner
            .read()
            .map(|g| {
                let key = path.to_string();
                if !g.touched.contains(&key) {
                    FieldPhase::Pristine
                } else if g.errors.contains_key(&key) {
                    FieldPhase::Invalid
                } else {
                    FieldPhase::Valid
                }
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Reset
    // -------------------------------------------------------------------------

    /// Restore the current snapshot and clear touched/error state.
    pub fn reset(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.values = guard.snapshot.clone();
            guard.touched.clear();
            guard.errors.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Swap in an alternate snapshot (e.g. "empty filters" rather than
    /// the last loaded values) and reset to it.
    pub fn reset_to(&self, snapshot: Value) {
        if let Ok(mut guard) = self.inner.write() {
            guard.values = snapshot.clone();
            guard.snapshot = snapshot;
            guard.touched.clear();
            guard.errors.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Binding
    // -------------------------------------------------------------------------

    /// Bind a named field. Fails fast on a malformed path.
    pub fn bind(&self, path: &str) -> Result<Binding, FormError> {
        let path = FieldPath::parse(path)?;
        Ok(Binding {
            form: self.clone(),
            path,
        })
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the form state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst)
    }
}

impl Clone for FormState {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

/// Live binding of one named field: the value/touched/error triple plus
/// a write-through setter, as plain data and methods — no child-tree
/// walking involved.
#[derive(Debug, Clone)]
pub struct Binding {
    form: FormState,
    path: FieldPath,
}

impl Binding {
    /// The bound path.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Canonical field name.
    pub fn name(&self) -> String {
        self.path.to_string()
    }

    /// Current value (missing reads as `null`).
    pub fn value(&self) -> Value {
        self.form.value(&self.path)
    }

    /// Whether the field was touched.
    pub fn touched(&self) -> bool {
        self.form.is_touched(&self.path)
    }

    /// The attached validation error, if any.
    pub fn error(&self) -> Option<String> {
        self.form.error(&self.path)
    }

    /// The field's lifecycle phase.
    pub fn phase(&self) -> FieldPhase {
        self.form.phase(&self.path)
    }

    /// Write a new value through to the form.
    pub fn set(&self, next: Value) {
        self.form.set_value(&self.path, next);
    }

    /// Mark the field touched.
    pub fn touch(&self) {
        self.form.touch(&self.path);
    }
}
