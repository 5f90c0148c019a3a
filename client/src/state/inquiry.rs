#[cfg(test)]
#[path = "inquiry_test.rs"]
mod inquiry_test;

use inquiry::{Catalog, Field, InquiryDraft, InquiryError, SolutionReconciler};

/// Inquiry form state owned by the page.
///
/// Provided as `RwSignal<InquiryState>` context. Components that pick a
/// solution on the user's behalf call [`InquiryState::select_solution`] which
/// reconciles explicitly; the form itself only calls [`InquiryState::edit`].
#[derive(Clone, Debug)]
pub struct InquiryState {
    pub draft: InquiryDraft,
    pub reconciler: SolutionReconciler,
    /// Inline validation message shown above the submit button.
    pub feedback: Option<String>,
    /// Number of mail-client launches attempted on this page.
    pub submissions: u32,
}

impl Default for InquiryState {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl InquiryState {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            draft: InquiryDraft::new(catalog),
            reconciler: SolutionReconciler::new(),
            feedback: None,
            submissions: 0,
        }
    }

    /// Apply a user edit and clear stale feedback.
    pub fn edit(&mut self, field: Field, value: String) {
        self.draft.set_field(field, value);
        self.feedback = None;
    }

    /// Fold an externally chosen solution into the draft.
    pub fn select_solution(&mut self, external: Option<&str>) -> bool {
        self.reconciler.reconcile(&mut self.draft, external)
    }

    /// Record a rejected submission.
    pub fn reject(&mut self, err: &InquiryError) {
        self.feedback = Some(feedback_message(err));
    }

    /// Record a submission that reached the mail-client launch step.
    pub fn record_submission(&mut self) {
        self.submissions += 1;
        self.feedback = None;
    }
}

/// Korean inline message for a validation error.
pub fn feedback_message(err: &InquiryError) -> String {
    match err {
        InquiryError::MissingFields(fields) => {
            let labels = fields.iter().map(|f| field_label(*f)).collect::<Vec<_>>().join(", ");
            format!("필수 항목을 입력해주세요: {labels}")
        }
        InquiryError::InvalidEmail(_) => "올바른 이메일 주소를 입력해주세요.".to_owned(),
        other => other.to_string(),
    }
}

/// Visible form label for `field`.
pub fn field_label(field: Field) -> &'static str {
    match field {
        Field::Solution => "관심 솔루션",
        Field::Quantity => "예상 수량 (Users/Endpoints)",
        Field::CompanyName => "회사명",
        Field::ContactName => "담당자 이름",
        Field::Phone => "전화번호",
        Field::Email => "이메일 주소",
        Field::Remarks => "비고 / 문의사항",
    }
}
