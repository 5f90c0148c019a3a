//! Quote-request domain model shared by the `client`, `server` and `cli` crates.
//!
//! This crate owns everything about an inquiry that is not markup: the draft
//! record and its field-level updates, the solution catalog, required-field
//! validation, the subject/body template, the `mailto:` codec, and the
//! submission handler that launches the mail client through a [`submit::LinkHost`].
//!
//! Nothing here touches the DOM, so every rule is testable on the host.

pub mod catalog;
pub mod draft;
pub mod error;
pub mod mailto;
pub mod message;
pub mod submit;
pub mod validate;

pub use catalog::{Catalog, Solution};
pub use draft::{Field, InquiryDraft, SolutionReconciler};
pub use error::{InquiryError, LaunchError};
pub use mailto::{MailtoUri, SALES_ADDRESS, SALES_PHONE};
pub use message::{EmailMessage, MessageTemplate};
pub use submit::{LinkHost, Notice, NoticeKind, Receipt, submit};
pub use validate::validate;
