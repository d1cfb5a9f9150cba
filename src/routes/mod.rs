//! Routers per concern; the binary merges them.

mod common;
mod contact;
mod docs;

pub use common::{common_routes, common_routes_with_ready, BANNER};
pub use contact::contact_routes;
pub use docs::{docs_routes, ApiDoc};

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// The full service: banner, health/readiness, OpenAPI document and contact CRUD.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(docs_routes())
        .merge(contact_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body_bytes)),
        )
}
