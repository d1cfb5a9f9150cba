//! Contact CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::model::{Contact, ContactInput};
use crate::service::ContactValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

pub const CONTACTS_PATH: &str = "/contacts";

/// A segment that is not an integer names no contact, so it is a 404.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::NotFound(format!("contact {}", id_str)))
}

fn body(payload: Result<Json<ContactInput>, JsonRejection>) -> Result<ContactInput, AppError> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("contact {}", id))
}

pub fn location(id: i64) -> String {
    format!("{}/{}", CONTACTS_PATH, id)
}

#[utoipa::path(
    get,
    path = "/contacts",
    tag = "contacts",
    responses((status = 200, description = "Every stored contact", body = Vec<Contact>))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, AppError> {
    let rows = state.repo.list_all().await?;
    tracing::debug!(count = rows.len(), "listed contacts");
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/contacts/{id}",
    tag = "contacts",
    params(("id" = i64, Path, description = "Contact id")),
    responses(
        (status = 200, description = "The contact", body = Contact),
        (status = 404, description = "No contact with this id")
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Contact>, AppError> {
    let id = parse_id(&id_str)?;
    let contact = state.repo.get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(contact))
}

#[utoipa::path(
    post,
    path = "/contacts",
    tag = "contacts",
    request_body = ContactInput,
    responses(
        (status = 201, description = "Created; Location points at the new contact", body = Contact),
        (status = 400, description = "Body failed validation")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let new = ContactValidator::validate(body(payload)?)?;
    let contact = state.repo.insert(new).await?;
    tracing::info!(id = contact.id, "contact created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(contact.id))],
        Json(contact),
    ))
}

#[utoipa::path(
    put,
    path = "/contacts/{id}",
    tag = "contacts",
    params(("id" = i64, Path, description = "Contact id")),
    request_body = ContactInput,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Body failed validation or body id differs from path id"),
        (status = 404, description = "No contact with this id")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    let input = body(payload)?;
    if let Some(body_id) = input.id {
        if body_id != id {
            return Err(AppError::BadRequest(format!(
                "body id {} does not match path id {}",
                body_id, id
            )));
        }
    }
    let new = ContactValidator::validate(input)?;
    state.repo.update(id, new).await?.ok_or_else(|| not_found(id))?;
    tracing::info!(id, "contact updated");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/contacts/{id}",
    tag = "contacts",
    params(("id" = i64, Path, description = "Contact id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No contact with this id")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    state.repo.delete(id).await?.ok_or_else(|| not_found(id))?;
    tracing::info!(id, "contact deleted");
    Ok(StatusCode::NO_CONTENT)
}
