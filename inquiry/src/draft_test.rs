use super::*;

fn filled() -> InquiryDraft {
    InquiryDraft {
        solution: "Endpoint Protection".to_owned(),
        quantity: "50".to_owned(),
        company_name: "Acme".to_owned(),
        contact_name: "Kim".to_owned(),
        phone: "010-1111-2222".to_owned(),
        email: "a@acme.com".to_owned(),
        remarks: "urgent".to_owned(),
    }
}

// =============================================================
// Field
// =============================================================

#[test]
fn field_names_round_trip() {
    for field in Field::ALL {
        assert_eq!(field.name().parse::<Field>(), Ok(field));
    }
}

#[test]
fn field_from_str_rejects_unknown_names() {
    assert_eq!("fax".parse::<Field>(), Err(InquiryError::UnknownField("fax".to_owned())));
    assert!("CompanyName".parse::<Field>().is_err());
}

#[test]
fn only_solution_and_remarks_are_optional() {
    let optional: Vec<Field> = Field::ALL.into_iter().filter(|f| !f.is_required()).collect();
    assert_eq!(optional, vec![Field::Solution, Field::Remarks]);
}

#[test]
fn field_display_uses_form_name() {
    assert_eq!(Field::ContactName.to_string(), "contactName");
}

// =============================================================
// InquiryDraft
// =============================================================

#[test]
fn new_draft_selects_first_catalog_entry() {
    let draft = InquiryDraft::new(Catalog::builtin());
    assert_eq!(draft.solution, Catalog::builtin().default_solution());
    for field in Field::ALL.into_iter().filter(|f| *f != Field::Solution) {
        assert_eq!(draft.get(field), "");
    }
}

#[test]
fn set_field_leaves_other_fields_untouched() {
    for target in Field::ALL {
        let before = filled();
        let mut after = before.clone();
        after.set_field(target, "changed");
        for field in Field::ALL {
            if field == target {
                assert_eq!(after.get(field), "changed");
            } else {
                assert_eq!(after.get(field), before.get(field), "{field} was clobbered by {target}");
            }
        }
    }
}

#[test]
fn edit_sequence_keeps_last_value_per_field() {
    let mut draft = InquiryDraft::new(Catalog::builtin());
    draft.set_field(Field::CompanyName, "A");
    draft.set_field(Field::Phone, "010");
    draft.set_field(Field::CompanyName, "Ac");
    draft.set_field(Field::CompanyName, "Acme");
    assert_eq!(draft.company_name, "Acme");
    assert_eq!(draft.phone, "010");
    assert_eq!(draft.quantity, "");
}

#[test]
fn set_field_by_name_resolves_form_names() {
    let mut draft = InquiryDraft::default();
    draft.set_field_by_name("companyName", "Acme").unwrap();
    assert_eq!(draft.company_name, "Acme");
    assert_eq!(
        draft.set_field_by_name("company", "x"),
        Err(InquiryError::UnknownField("company".to_owned()))
    );
    assert_eq!(draft.company_name, "Acme");
}

#[test]
fn apply_external_solution_skips_catalog_check() {
    let mut draft = InquiryDraft::new(Catalog::builtin());
    draft.apply_external_solution("Something Else");
    assert_eq!(draft.solution, "Something Else");
}

#[test]
fn draft_serializes_with_form_names() {
    let json = serde_json::to_value(filled()).unwrap();
    assert_eq!(json["companyName"], "Acme");
    assert_eq!(json["contactName"], "Kim");
}

// =============================================================
// SolutionReconciler
// =============================================================

#[test]
fn reconcile_applies_first_observation() {
    let mut draft = InquiryDraft::new(Catalog::builtin());
    let mut reconciler = SolutionReconciler::new();
    assert!(reconciler.reconcile(&mut draft, Some("ESET PROTECT MDR")));
    assert_eq!(draft.solution, "ESET PROTECT MDR");
    assert!(!reconciler.reconcile(&mut draft, Some("ESET PROTECT MDR")));
}

#[test]
fn reconcile_ignores_absent_and_empty_values() {
    let mut draft = InquiryDraft::new(Catalog::builtin());
    let mut reconciler = SolutionReconciler::new();
    assert!(!reconciler.reconcile(&mut draft, None));
    assert!(!reconciler.reconcile(&mut draft, Some("")));
    assert_eq!(draft.solution, Catalog::builtin().default_solution());
}

#[test]
fn reconcile_does_not_clobber_user_edit_for_same_value() {
    let mut draft = InquiryDraft::new(Catalog::builtin());
    let mut reconciler = SolutionReconciler::new();
    reconciler.reconcile(&mut draft, Some("ESET PROTECT Elite"));
    draft.set_field(Field::Solution, "ESET PROTECT Entry");
    assert!(!reconciler.reconcile(&mut draft, Some("ESET PROTECT Elite")));
    assert_eq!(draft.solution, "ESET PROTECT Entry");
}

#[test]
fn reconcile_applies_each_new_value() {
    let mut draft = InquiryDraft::new(Catalog::builtin());
    let mut reconciler = SolutionReconciler::new();
    reconciler.reconcile(&mut draft, Some("ESET PROTECT Elite"));
    draft.set_field(Field::CompanyName, "Acme");
    assert!(reconciler.reconcile(&mut draft, Some("Endpoint Protection")));
    assert_eq!(draft.solution, "Endpoint Protection");
    assert_eq!(draft.company_name, "Acme");
}

#[test]
fn reconcile_reapplies_value_after_selection_is_cleared() {
    let mut draft = InquiryDraft::new(Catalog::builtin());
    let mut reconciler = SolutionReconciler::new();
    reconciler.reconcile(&mut draft, Some("ESET PROTECT Complete"));
    draft.set_field(Field::Solution, "ESET PROTECT Entry");
    assert!(!reconciler.reconcile(&mut draft, None));
    assert_eq!(draft.solution, "ESET PROTECT Entry");
    assert!(reconciler.reconcile(&mut draft, Some("ESET PROTECT Complete")));
    assert_eq!(draft.solution, "ESET PROTECT Complete");
}

#[test]
fn reconcile_reapplies_value_after_empty_selection() {
    let mut draft = InquiryDraft::new(Catalog::builtin());
    let mut reconciler = SolutionReconciler::new();
    reconciler.reconcile(&mut draft, Some("ESET PROTECT Elite"));
    draft.set_field(Field::Solution, "ESET PROTECT Entry");
    reconciler.reconcile(&mut draft, Some(""));
    assert!(reconciler.reconcile(&mut draft, Some("ESET PROTECT Elite")));
    assert_eq!(draft.solution, "ESET PROTECT Elite");
}

#[test]
fn submitted_trims_only_email() {
    let mut draft = filled();
    draft.set_field(Field::Email, " a@acme.com  ");
    draft.set_field(Field::Remarks, "  indented");
    assert_eq!(draft.submitted(Field::Email), "a@acme.com");
    assert_eq!(draft.get(Field::Email), " a@acme.com  ");
    assert_eq!(draft.submitted(Field::Remarks), "  indented");
}
