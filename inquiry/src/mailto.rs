//! `mailto:` URI encoding and decoding.
//!
//! Components are escaped exactly like ECMAScript `encodeURIComponent`: every
//! UTF-8 byte is percent-encoded except ASCII alphanumerics and
//! `- _ . ! ~ * ' ( )`. Mail clients parse the resulting query the same way
//! regardless of which side produced it.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::error::InquiryError;
use crate::message::EmailMessage;

/// Fixed recipient of every inquiry.
pub const SALES_ADDRESS: &str = "sales@estc.co.kr";

/// Direct phone line shown next to the form as a manual fallback.
pub const SALES_PHONE: &str = "02-567-0510";

/// Bytes `encodeURIComponent` leaves alone, removed from the escape set.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one URI component.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Decode one percent-encoded URI component.
///
/// # Errors
///
/// Returns [`InquiryError::MalformedMailto`] if the decoded bytes are not UTF-8.
pub fn decode_component(encoded: &str) -> Result<String, InquiryError> {
    percent_decode_str(encoded)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| InquiryError::MalformedMailto(format!("component is not UTF-8: {e}")))
}

/// A `mailto:` link with subject and body query parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoUri {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoUri {
    /// Address `message` to [`SALES_ADDRESS`].
    pub fn for_sales(message: EmailMessage) -> Self {
        Self { recipient: SALES_ADDRESS.to_owned(), subject: message.subject, body: message.body }
    }

    /// Parse a `mailto:` URI produced by [`MailtoUri`]'s `Display`.
    ///
    /// Unknown query parameters are ignored; absent `subject`/`body` decode to
    /// empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`InquiryError::MalformedMailto`] if the scheme is missing or a
    /// component does not decode to UTF-8.
    pub fn parse(uri: &str) -> Result<Self, InquiryError> {
        let rest = uri
            .strip_prefix("mailto:")
            .ok_or_else(|| InquiryError::MalformedMailto(format!("missing mailto: scheme in `{uri}`")))?;
        let (recipient, query) = rest.split_once('?').unwrap_or((rest, ""));

        let mut parsed = Self { recipient: decode_component(recipient)?, subject: String::new(), body: String::new() };
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "subject" => parsed.subject = decode_component(value)?,
                "body" => parsed.body = decode_component(value)?,
                _ => {}
            }
        }
        Ok(parsed)
    }
}

impl fmt::Display for MailtoUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}
