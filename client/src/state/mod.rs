//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components can depend on small focused models.
//! The page currently has a single domain: the inquiry draft.

pub mod inquiry;
