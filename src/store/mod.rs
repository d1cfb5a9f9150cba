//! Contact storage: the repository contract and its backends.

mod memory;
mod postgres;

pub use memory::InMemoryContactRepository;
pub use postgres::{ensure_database_exists, ensure_schema, PgContactRepository, CONTACTS_TABLE};

use crate::error::AppError;
use crate::model::{Contact, NewContact};
use async_trait::async_trait;

/// Durable storage for contacts. Each call is independent; nothing spans calls.
#[async_trait]
pub trait ContactRepository: Send + Sync + 'static {
    /// All contacts ordered by id. Empty when nothing is stored.
    async fn list_all(&self) -> Result<Vec<Contact>, AppError>;

    /// Returns `None` if no contact has this id.
    async fn get(&self, id: i64) -> Result<Option<Contact>, AppError>;

    /// Persists a new row. The store assigns the id; ids are never reused.
    async fn insert(&self, new: NewContact) -> Result<Contact, AppError>;

    /// Overwrites every mutable field. Returns `None` if no contact has this id.
    async fn update(&self, id: i64, new: NewContact) -> Result<Option<Contact>, AppError>;

    /// Removes the row and returns it, or `None` if no contact has this id.
    async fn delete(&self, id: i64) -> Result<Option<Contact>, AppError>;

    /// Readiness check against the backing store.
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
