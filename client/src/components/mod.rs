//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing page sections. Sections that touch the
//! inquiry draft read and write the `RwSignal<InquiryState>` context provided
//! by `App`.

pub mod contact_form;
pub mod footer;
pub mod hero;
pub mod solutions;
