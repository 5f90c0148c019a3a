use super::*;

#[test]
fn solution_is_a_select_and_remarks_a_textarea() {
    assert_eq!(control_for(Field::Solution), Control::Select);
    assert_eq!(control_for(Field::Remarks), Control::TextArea);
}

#[test]
fn contact_inputs_use_native_types() {
    assert_eq!(control_for(Field::Email), Control::Input("email"));
    assert_eq!(control_for(Field::Phone), Control::Input("tel"));
    assert_eq!(control_for(Field::Quantity), Control::Input("text"));
}

#[test]
fn required_fields_render_as_inputs() {
    for field in Field::ALL.into_iter().filter(|f| f.is_required()) {
        assert!(matches!(control_for(field), Control::Input(_)), "{field} should be an <input>");
    }
}

#[test]
fn text_controls_have_placeholders() {
    for field in Field::ALL.into_iter().filter(|f| *f != Field::Solution) {
        assert!(!placeholder(field).is_empty(), "{field} has no placeholder");
    }
    assert_eq!(placeholder(Field::Phone), "010-0000-0000");
}

#[test]
fn control_ids_are_unique() {
    let ids: Vec<String> = Field::ALL.into_iter().map(control_id).collect();
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(control_id(Field::CompanyName), "inquiry-companyName");
}
