//! Error types for inquiry handling.

use crate::draft::Field;

/// Error returned by draft, catalog, validation and mailto operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InquiryError {
    /// A form `name` attribute did not map to any [`Field`].
    #[error("unknown form field `{0}`")]
    UnknownField(String),
    /// One or more required fields were empty.
    #[error("required fields missing: {}", field_list(.0))]
    MissingFields(Vec<Field>),
    /// The email field is present but not shaped like an address.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    /// A catalog must offer at least one solution to seed the draft.
    #[error("solution catalog is empty")]
    EmptyCatalog,
    /// The catalog JSON could not be parsed.
    #[error("invalid catalog JSON: {0}")]
    CatalogParse(String),
    /// The input is not a decodable `mailto:` URI.
    #[error("malformed mailto URI: {0}")]
    MalformedMailto(String),
}

/// The mail client could not be launched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("mail client launch failed: {0}")]
pub struct LaunchError(pub String);

impl LaunchError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

fn field_list(fields: &[Field]) -> String {
    fields.iter().map(|f| f.name()).collect::<Vec<_>>().join(", ")
}
