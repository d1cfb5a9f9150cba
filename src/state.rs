//! Shared application state for all routes.

use crate::store::ContactRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ContactRepository>,
}

impl AppState {
    pub fn new<R: ContactRepository>(repo: R) -> Self {
        Self { repo: Arc::new(repo) }
    }
}
