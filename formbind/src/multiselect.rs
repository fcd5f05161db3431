//! Multi-select bindings.

use serde_json::Value;

use crate::error::FormError;
use crate::form::FormState;
use crate::path::FieldPath;

/// Binding for a field holding an array of selected values.
///
/// Binding a non-array value is rejected up front instead of coerced —
/// coercing here is how a scalar once ended up spread across checkbox
/// state. A missing (`null`) value is data absence, not a violation: the
/// binding initializes it to an empty array.
#[derive(Debug, Clone)]
pub struct MultiSelectBinding {
    form: FormState,
    path: FieldPath,
}

impl MultiSelectBinding {
    /// Bind a multi-select field. Fails fast when the current value is
    /// neither an array nor missing.
    pub fn bind(form: &FormState, path: &str) -> Result<Self, FormError> {
        let path = FieldPath::parse(path)?;
        match form.value(&path) {
            Value::Array(_) => {}
            Value::Null => form.set_value(&path, Value::Array(Vec::new())),
            other => {
                return Err(FormError::NonArrayValue {
                    path: path.to_string(),
                    found: json_type_name(&other),
                });
            }
        }
        Ok(Self {
            form: form.clone(),
            path,
        })
    }

    /// The currently selected values.
    pub fn selected(&self) -> Vec<Value> {
        match self.form.value(&self.path) {
            Value::Array(items) => items,
            _ => Vec::new(),
        }
    }

    /// Whether a value is selected (by value equality).
    pub fn contains(&self, item: &Value) -> bool {
        self.selected().contains(item)
    }

    /// Add or remove one value.
    pub fn toggle(&self, item: Value) {
        let mut items = self.selected();
        match items.iter().position(|existing| *existing == item) {
            Some(index) => {
                items.remove(index);
            }
            None => items.push(item),
        }
        self.form.set_value(&self.path, Value::Array(items));
    }

    /// Drop the whole selection.
    pub fn clear(&self) {
        self.form.set_value(&self.path, Value::Array(Vec::new()));
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
