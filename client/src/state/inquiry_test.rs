use super::*;

// =============================================================
// InquiryState defaults
// =============================================================

#[test]
fn default_state_selects_first_catalog_solution() {
    let state = InquiryState::default();
    assert_eq!(state.draft.solution, Catalog::builtin().default_solution());
    assert!(state.feedback.is_none());
    assert_eq!(state.submissions, 0);
}

// =============================================================
// edit / select_solution
// =============================================================

#[test]
fn edit_updates_field_and_clears_feedback() {
    let mut state = InquiryState::default();
    state.feedback = Some("stale".to_owned());
    state.edit(Field::Quantity, "100".to_owned());
    assert_eq!(state.draft.quantity, "100");
    assert!(state.feedback.is_none());
}

#[test]
fn select_solution_overwrites_after_mount() {
    let mut state = InquiryState::default();
    state.edit(Field::CompanyName, "Acme".to_owned());
    assert!(state.select_solution(Some("ESET PROTECT Complete")));
    assert_eq!(state.draft.solution, "ESET PROTECT Complete");
    assert_eq!(state.draft.company_name, "Acme");
}

#[test]
fn select_solution_ignores_missing_query_value() {
    let mut state = InquiryState::default();
    assert!(!state.select_solution(None));
    assert_eq!(state.draft.solution, Catalog::builtin().default_solution());
}

// =============================================================
// feedback
// =============================================================

#[test]
fn reject_lists_missing_labels_in_korean() {
    let mut state = InquiryState::default();
    state.reject(&InquiryError::MissingFields(vec![Field::CompanyName, Field::Phone]));
    assert_eq!(state.feedback.as_deref(), Some("필수 항목을 입력해주세요: 회사명, 전화번호"));
}

#[test]
fn invalid_email_feedback() {
    assert_eq!(
        feedback_message(&InquiryError::InvalidEmail("x".to_owned())),
        "올바른 이메일 주소를 입력해주세요."
    );
}

#[test]
fn record_submission_counts_and_clears_feedback() {
    let mut state = InquiryState::default();
    state.feedback = Some("old".to_owned());
    state.record_submission();
    state.record_submission();
    assert_eq!(state.submissions, 2);
    assert!(state.feedback.is_none());
}

#[test]
fn every_field_has_a_label() {
    for field in Field::ALL {
        assert!(!field_label(field).is_empty());
    }
}
