//! OpenAPI document for the contact routes.

use crate::handlers::contact;
use crate::model::{Contact, ContactInput};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Contacts API", description = "CRUD over contact records"),
    paths(contact::list, contact::read, contact::create, contact::update, contact::delete),
    components(schemas(Contact, ContactInput)),
    tags((name = "contacts", description = "Contact records"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /openapi.json
pub fn docs_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
