//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

#[cfg(feature = "hydrate")]
pub mod mail_link;
pub mod notice;
