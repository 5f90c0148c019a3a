//! Subject and body rendering for the outbound inquiry email.
//!
//! The body is described as data (field → label pairs) instead of a fixed
//! format string, so the generated message and the form are driven by the
//! same [`Field`] set.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::Serialize;

use crate::draft::{Field, InquiryDraft};

/// Subject and plain-text body of a composed email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}

/// Field-to-label layout of the inquiry email.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageTemplate {
    subject_tag: String,
    lines: Vec<(Field, String)>,
    block: Option<(Field, String)>,
}

impl MessageTemplate {
    /// Start a template whose subject begins with `subject_tag`.
    pub fn builder(subject_tag: impl Into<String>) -> MessageTemplateBuilder {
        MessageTemplateBuilder {
            template: Self { subject_tag: subject_tag.into(), lines: Vec::new(), block: None },
        }
    }

    /// The ESET quote-request email.
    pub fn quote_request() -> Self {
        Self::builder("[ESET 견적 문의]")
            .line(Field::Solution, "문의 솔루션")
            .line(Field::Quantity, "수량")
            .line(Field::CompanyName, "회사명")
            .line(Field::ContactName, "담당자")
            .line(Field::Phone, "전화번호")
            .line(Field::Email, "이메일")
            .block(Field::Remarks, "비고")
            .build()
    }

    /// Label used for `field` in the body, if the template includes it.
    pub fn label_for(&self, field: Field) -> Option<&str> {
        self.lines
            .iter()
            .chain(self.block.iter())
            .find(|(f, _)| *f == field)
            .map(|(_, label)| label.as_str())
    }

    /// Render `draft` into a subject and body.
    ///
    /// The subject is `"{tag} {companyName} - {solution}"`. The body has one
    /// `label: value` line per template line, then a blank line, a bracketed
    /// block label, and the block value.
    pub fn render(&self, draft: &InquiryDraft) -> EmailMessage {
        let subject = format!("{} {} - {}", self.subject_tag, draft.company_name, draft.solution);

        let mut body = self
            .lines
            .iter()
            .map(|(field, label)| format!("{label}: {}", draft.submitted(*field)))
            .collect::<Vec<_>>()
            .join("\n");
        if let Some((field, label)) = &self.block {
            body.push_str(&format!("\n\n[{label}]\n{}", draft.submitted(*field)));
        }

        EmailMessage { subject, body }
    }
}

/// Builder returned by [`MessageTemplate::builder`].
#[derive(Clone, Debug)]
pub struct MessageTemplateBuilder {
    template: MessageTemplate,
}

impl MessageTemplateBuilder {
    /// Append a `label: value` line.
    #[must_use]
    pub fn line(mut self, field: Field, label: impl Into<String>) -> Self {
        self.template.lines.push((field, label.into()));
        self
    }

    /// Set the trailing `[label]` block. A later call replaces an earlier one.
    #[must_use]
    pub fn block(mut self, field: Field, label: impl Into<String>) -> Self {
        self.template.block = Some((field, label.into()));
        self
    }

    pub fn build(self) -> MessageTemplate {
        self.template
    }
}
