//! Required-field validation with the same rules a browser applies to the
//! inquiry form's native `required` and `type="email"` constraints.
//!
//! Text and tel inputs are missing only when empty (whitespace counts as a
//! value). Email inputs are trimmed by the browser's value sanitization before
//! the check, and a non-empty value must match the HTML "valid e-mail address"
//! grammar.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::draft::{Field, InquiryDraft};
use crate::error::InquiryError;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static EMAIL_SHAPE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(EMAIL_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("email pattern failed to compile: {e}");
        None
    }
});

/// Check every required field of `draft`.
///
/// # Errors
///
/// Returns [`InquiryError::MissingFields`] listing all empty required fields in
/// form order, or [`InquiryError::InvalidEmail`] when every field is present but
/// the email is malformed.
pub fn validate(draft: &InquiryDraft) -> Result<(), InquiryError> {
    let missing: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|f| f.is_required() && draft.submitted(*f).is_empty())
        .collect();
    if !missing.is_empty() {
        return Err(InquiryError::MissingFields(missing));
    }

    let email = draft.submitted(Field::Email);
    if !is_email_shaped(email) {
        return Err(InquiryError::InvalidEmail(email.to_owned()));
    }
    Ok(())
}

/// Whether `value` matches the HTML valid e-mail address grammar.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.as_ref().is_some_and(|re| re.is_match(value))
}
