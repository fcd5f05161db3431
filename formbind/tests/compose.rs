//! Field composition: injected props, overrides, message affordances.

use formbind::compose::{ControlKind, ControlProps, ControlSpec, FieldMessage, FieldScaffold};
use formbind::form::FormState;
use formbind::path::FieldPath;
use serde_json::json;

#[test]
fn test_field_without_children_composes_the_default_input() {
    let form = FormState::new(json!({"email": "a@b.c"}));
    let view = FieldScaffold::new("email").compose(&form).unwrap();

    assert_eq!(view.controls.len(), 1);
    let control = &view.controls[0];
    assert_eq!(control.kind, ControlKind::Input);
    assert_eq!(control.props.id.as_deref(), Some("field-email"));
    assert_eq!(control.props.name.as_deref(), Some("email"));
    assert_eq!(control.props.value, Some(json!("a@b.c")));
}

#[test]
fn test_declared_props_win_over_injected() {
    let form = FormState::new(json!({"email": "a@b.c"}));
    let view = FieldScaffold::new("email")
        .control(ControlSpec::new(ControlKind::Input).props(ControlProps {
            id: Some("custom-id".to_string()),
            placeholder: Some("you@example.com".to_string()),
            ..ControlProps::default()
        }))
        .compose(&form)
        .unwrap();

    let props = &view.controls[0].props;
    assert_eq!(props.id.as_deref(), Some("custom-id"));
    assert_eq!(props.placeholder.as_deref(), Some("you@example.com"));
    // Non-overridden entries keep the injected binding.
    assert_eq!(props.name.as_deref(), Some("email"));
    assert_eq!(props.value, Some(json!("a@b.c")));
}

#[test]
fn test_label_controls_never_get_the_computed_id() {
    let form = FormState::new(json!({"email": ""}));
    let view = FieldScaffold::new("email")
        .label("Email")
        .control(ControlSpec::new(ControlKind::Label))
        .control(ControlSpec::new(ControlKind::Input))
        .compose(&form)
        .unwrap();

    assert_eq!(view.controls[0].props.id, None);
    assert_eq!(view.controls[1].props.id.as_deref(), Some("field-email"));

    // An explicit label id is a caller override and survives.
    let explicit = FieldScaffold::new("email")
        .control(ControlSpec::new(ControlKind::Label).props(ControlProps {
            id: Some("email-label".to_string()),
            ..ControlProps::default()
        }))
        .compose(&form)
        .unwrap();
    assert_eq!(explicit.controls[0].props.id.as_deref(), Some("email-label"));
}

#[test]
fn test_error_replaces_hint_once_invalid() {
    let form = FormState::new(json!({"email": ""}));
    let path = FieldPath::parse("email").unwrap();
    let scaffold = FieldScaffold::new("email").hint("Work address preferred");

    let view = scaffold.compose(&form).unwrap();
    assert_eq!(
        view.message,
        Some(FieldMessage::Hint("Work address preferred".to_string()))
    );

    // An attached error only surfaces once the field is touched.
    form.set_error(&path, "required");
    let view = scaffold.compose(&form).unwrap();
    assert_eq!(
        view.message,
        Some(FieldMessage::Hint("Work address preferred".to_string()))
    );

    form.touch(&path);
    let view = scaffold.compose(&form).unwrap();
    assert_eq!(view.message, Some(FieldMessage::Error("required".to_string())));
}
