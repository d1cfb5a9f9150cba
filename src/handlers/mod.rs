//! HTTP handlers for contact CRUD.

pub mod contact;
pub use contact::*;
