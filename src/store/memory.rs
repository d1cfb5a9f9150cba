//! In-memory backend for tests and database-less local runs.

use super::ContactRepository;
use crate::error::AppError;
use crate::model::{Contact, NewContact};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Contact>,
    last_id: i64,
}

/// Rows keyed by id; ids come from a counter that only moves forward.
#[derive(Default)]
pub struct InMemoryContactRepository {
    table: RwLock<Table>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list_all(&self) -> Result<Vec<Contact>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Contact>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, new: NewContact) -> Result<Contact, AppError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let contact = Contact::from_new(table.last_id, new);
        table.rows.insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: i64, new: NewContact) -> Result<Option<Contact>, AppError> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|row| {
            *row = Contact::from_new(id, new);
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<Option<Contact>, AppError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id))
    }
}
