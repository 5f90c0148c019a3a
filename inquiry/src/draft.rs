//! The in-memory inquiry draft and its field-level updates.
//!
//! DESIGN
//! ======
//! The draft is a plain record. The owning context (a Leptos page, the CLI)
//! mutates it one field at a time and hands it to [`crate::submit::submit`]
//! read-only. An externally selected solution is folded in by an explicit
//! [`SolutionReconciler::reconcile`] call rather than an implicit watch, so
//! every overwrite of `solution` is traceable to a call site.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::InquiryError;

/// A form field of the inquiry draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Solution,
    Quantity,
    CompanyName,
    ContactName,
    Phone,
    Email,
    Remarks,
}

impl Field {
    /// Canonical field order, shared by the form and the message template.
    pub const ALL: [Field; 7] = [
        Field::Solution,
        Field::Quantity,
        Field::CompanyName,
        Field::ContactName,
        Field::Phone,
        Field::Email,
        Field::Remarks,
    ];

    /// Form `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Self::Solution => "solution",
            Self::Quantity => "quantity",
            Self::CompanyName => "companyName",
            Self::ContactName => "contactName",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Remarks => "remarks",
        }
    }

    /// Whether the form marks the field `required`.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Quantity | Self::CompanyName | Self::ContactName | Self::Phone | Self::Email)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = InquiryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| InquiryError::UnknownField(s.to_owned()))
    }
}

/// Current values of every inquiry form field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDraft {
    pub solution: String,
    pub quantity: String,
    pub company_name: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub remarks: String,
}

impl InquiryDraft {
    /// Fresh draft with the catalog's first solution selected.
    pub fn new(catalog: &Catalog) -> Self {
        Self { solution: catalog.default_solution().to_owned(), ..Self::default() }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Solution => &self.solution,
            Field::Quantity => &self.quantity,
            Field::CompanyName => &self.company_name,
            Field::ContactName => &self.contact_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Remarks => &self.remarks,
        }
    }

    /// Value as a browser submits it: `type=email` inputs drop surrounding
    /// whitespace, every other field is taken verbatim.
    pub fn submitted(&self, field: Field) -> &str {
        match field {
            Field::Email => self.email.trim(),
            _ => self.get(field),
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Solution => &mut self.solution,
            Field::Quantity => &mut self.quantity,
            Field::CompanyName => &mut self.company_name,
            Field::ContactName => &mut self.contact_name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Remarks => &mut self.remarks,
        }
    }

    /// Replace one field's value; all other fields are left untouched.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Replace a field addressed by its form `name` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`InquiryError::UnknownField`] if `name` is not a draft field.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), InquiryError> {
        let field = name.parse::<Field>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Overwrite `solution` unconditionally. No catalog check is made.
    pub fn apply_external_solution(&mut self, name: impl Into<String>) {
        self.solution = name.into();
    }
}

/// Tracks the last externally observed solution so a draft is only
/// overwritten when that value actually changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolutionReconciler {
    last_seen: Option<String>,
}

impl SolutionReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the current external selection into `draft`.
    ///
    /// Absent or empty values leave the draft alone but clear the observed
    /// value, so re-selecting the same solution later applies it again. A value
    /// equal to the previously observed one is ignored, so user edits made
    /// since then survive. Returns `true` when the draft was overwritten.
    pub fn reconcile(&mut self, draft: &mut InquiryDraft, external: Option<&str>) -> bool {
        let Some(name) = external.filter(|n| !n.is_empty()) else {
            self.last_seen = None;
            return false;
        };
        if self.last_seen.as_deref() == Some(name) {
            return false;
        }
        self.last_seen = Some(name.to_owned());
        draft.apply_external_solution(name);
        true
    }
}
