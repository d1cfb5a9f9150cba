//! Contact entity and request payloads.
//!
//! Wire keys are the Spanish names the service has always exposed
//! (`nombre`, `apellido`, `telefono`, `correo`); request bodies also accept
//! the English column names.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored contact. `id` is assigned by the repository on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Contact {
    pub id: i64,
    #[serde(rename = "nombre", alias = "first_name")]
    pub first_name: String,
    #[serde(rename = "apellido", alias = "last_name")]
    pub last_name: String,
    #[serde(rename = "telefono", alias = "phone")]
    pub phone: Option<String>,
    #[serde(rename = "correo", alias = "email")]
    pub email: Option<String>,
}

impl Contact {
    pub fn from_new(id: i64, new: NewContact) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            phone: new.phone,
            email: new.email,
        }
    }
}

/// Raw request body for create and update. Every field is optional here so
/// that missing values surface as validation errors rather than parse errors.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ContactInput {
    /// Ignored on create; must match the path id on update when present.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, rename = "nombre", alias = "first_name")]
    pub first_name: Option<String>,
    #[serde(default, rename = "apellido", alias = "last_name")]
    pub last_name: Option<String>,
    #[serde(default, rename = "telefono", alias = "phone")]
    pub phone: Option<String>,
    #[serde(default, rename = "correo", alias = "email")]
    pub email: Option<String>,
}

/// The mutable fields of a contact after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}
