//! Request validation applied before any storage call.

pub mod validation;
pub use validation::{ContactValidator, FieldRule, CONTACT_RULES};
