//! Explicit field composition.
//!
//! Instead of cloning a child tree and sniffing child types at runtime,
//! the binding layer returns plain data: a [`FieldView`] with the
//! computed id, label, bound control props and the message affordance.
//! The rendering layer passes those props into whichever controls it
//! composes.

use serde_json::Value;

use crate::error::FormError;
use crate::form::{FieldPhase, FormState};

/// Control flavors a field can compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlKind {
    /// Default text input.
    #[default]
    Input,
    /// Field label. Labels never receive the computed control id, so
    /// one id cannot appear on two elements.
    Label,
    Select,
    Checkbox,
}

/// Props handed to a composed control.
///
/// Injected bindings fill these in; caller-declared overrides win on
/// merge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControlProps {
    pub id: Option<String>,
    pub name: Option<String>,
    pub value: Option<Value>,
    pub placeholder: Option<String>,
    pub disabled: Option<bool>,
}

impl ControlProps {
    /// Overlay `declared` on top of `injected`; declared entries win.
    pub fn merge(injected: Self, declared: Self) -> Self {
        Self {
            id: declared.id.or(injected.id),
            name: declared.name.or(injected.name),
            value: declared.value.or(injected.value),
            placeholder: declared.placeholder.or(injected.placeholder),
            disabled: declared.disabled.or(injected.disabled),
        }
    }
}

/// One control declared inside a field.
#[derive(Debug, Clone, Default)]
pub struct ControlSpec {
    pub kind: ControlKind,
    pub props: ControlProps,
}

impl ControlSpec {
    pub fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            props: ControlProps::default(),
        }
    }

    /// Declare explicit props; they take precedence over injected ones.
    pub fn props(mut self, props: ControlProps) -> Self {
        self.props = props;
        self
    }
}

/// Inline message rendered under the control.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldMessage {
    Hint(String),
    Error(String),
}

/// A composed, render-ready control.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedControl {
    pub kind: ControlKind,
    pub props: ControlProps,
}

/// A composed, render-ready field.
#[derive(Debug, Clone)]
pub struct FieldView {
    /// The computed control id (`field-<name>`).
    pub id: String,
    pub label: Option<String>,
    pub controls: Vec<ComposedControl>,
    /// Error once the field is invalid, otherwise the hint, if any.
    pub message: Option<FieldMessage>,
    pub phase: FieldPhase,
}

/// A field's static scaffold: name, label, hint and declared controls.
///
/// # Example
///
/// ```
/// use formbind::compose::{ControlKind, ControlSpec, FieldScaffold};
/// use formbind::form::FormState;
/// use serde_json::json;
///
/// let form = FormState::new(json!({"email": "a@b.c"}));
/// let view = FieldScaffold::new("email")
///     .label("Email")
///     .control(ControlSpec::new(ControlKind::Label))
///     .control(ControlSpec::new(ControlKind::Input))
///     .compose(&form)
///     .unwrap();
/// assert_eq!(view.controls.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FieldScaffold {
    name: String,
    label: Option<String>,
    hint: Option<String>,
    controls: Vec<ControlSpec>,
}

impl FieldScaffold {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            hint: None,
            controls: Vec::new(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Declare a child control. A scaffold with no declared controls
    /// composes the default input.
    pub fn control(mut self, spec: ControlSpec) -> Self {
        self.controls.push(spec);
        self
    }

    /// Compose against live form state.
    pub fn compose(&self, form: &FormState) -> Result<FieldView, FormError> {
        let binding = form.bind(&self.name)?;
        let computed_id = format!("field-{}", self.name);
        let injected = ControlProps {
            id: Some(computed_id.clone()),
            name: Some(self.name.clone()),
            value: Some(binding.value()),
            ..ControlProps::default()
        };

        let controls = if self.controls.is_empty() {
            vec![ComposedControl {
                kind: ControlKind::Input,
                props: injected,
            }]
        } else {
            self.controls
                .iter()
                .map(|spec| {
                    let mut props = ControlProps::merge(injected.clone(), spec.props.clone());
                    if spec.kind == ControlKind::Label && spec.props.id.is_none() {
                        // Suppress the injected id; an explicit one still wins.
                        props.id = None;
                    }
                    ComposedControl {
                        kind: spec.kind,
                        props,
                    }
                })
                .collect()
        };

        let phase = binding.phase();
        let message = match phase {
            FieldPhase::Invalid => binding.error().map(FieldMessage::Error),
            _ => self.hint.clone().map(FieldMessage::Hint),
        };

        Ok(FieldView {
            id: computed_id,
            label: self.label.clone(),
            controls,
            message,
            phase,
        })
    }
}
