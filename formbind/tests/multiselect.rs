//! Multi-select binding contract.

use formbind::error::FormError;
use formbind::form::FormState;
use formbind::multiselect::MultiSelectBinding;
use serde_json::json;

#[test]
fn test_non_array_value_is_rejected() {
    let form = FormState::new(json!({"tags": "oops"}));
    match MultiSelectBinding::bind(&form, "tags") {
        Err(FormError::NonArrayValue { path, found }) => {
            assert_eq!(path, "tags");
            assert_eq!(found, "string");
        }
        other => panic!("expected a non-array rejection, got {other:?}"),
    }
}

#[test]
fn test_missing_value_initializes_to_empty_array() {
    let form = FormState::new(json!({}));
    let binding = MultiSelectBinding::bind(&form, "tags").unwrap();
    assert!(binding.selected().is_empty());
    assert_eq!(form.values(), json!({"tags": []}));
}

#[test]
fn test_toggle_adds_and_removes_by_value() {
    let form = FormState::new(json!({"tags": ["red"]}));
    let binding = MultiSelectBinding::bind(&form, "tags").unwrap();

    binding.toggle(json!("blue"));
    assert_eq!(binding.selected(), vec![json!("red"), json!("blue")]);
    assert!(binding.contains(&json!("blue")));

    binding.toggle(json!("red"));
    assert_eq!(binding.selected(), vec![json!("blue")]);

    binding.clear();
    assert!(binding.selected().is_empty());
}
