//! Contacts API: CRUD over a single `contacts` table, served with axum.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StorageBackend};
pub use error::{AppError, ConfigError};
pub use model::{Contact, ContactInput, NewContact};
pub use routes::{app, common_routes, common_routes_with_ready, contact_routes, docs_routes, ApiDoc};
pub use service::ContactValidator;
pub use state::AppState;
pub use store::{
    ensure_database_exists, ensure_schema, ContactRepository, InMemoryContactRepository, PgContactRepository,
};
