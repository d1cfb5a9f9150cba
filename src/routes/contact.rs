//! Contact CRUD routes under `/contacts`.

use crate::handlers::contact::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn contact_routes(state: AppState) -> Router {
    Router::new()
        .route("/contacts", get(list).post(create))
        .route("/contacts/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
