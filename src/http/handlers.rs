use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::info;

use super::AppState;
use super::envelope::Envelope;
use crate::domain::{Contact, ContactField, ContactPatch, ContactQuery, ValidationReq};
use crate::errors::AppError;

// Extractor rejections (bad JSON, wrong content type, undecodable path)
// share the 400 envelope.
fn payload(body: Result<Json<ContactPatch>, JsonRejection>) -> Result<ContactPatch, AppError> {
    body.map(|Json(patch)| patch)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

fn phone_param(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    path.map(|Path(phone_number)| phone_number)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

fn contact_not_found() -> AppError {
    AppError::NotFound("Contact".to_string())
}

pub async fn list_contacts(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(pairs) = params.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let query = ContactQuery::from_pairs(pairs);

    let manager = state.contacts()?;
    let contacts: Vec<Contact> = manager.filter(&query).into_iter().cloned().collect();

    Ok(Envelope::success()
        .results(contacts.len())
        .data(json!({ "contacts": contacts }))
        .respond(StatusCode::OK))
}

pub async fn get_contact(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let phone_number = phone_param(path)?;
    let manager = state.contacts()?;
    let contact = manager
        .find_by(ContactField::PhoneNumber, &phone_number)
        .ok_or_else(contact_not_found)?;

    Ok(Envelope::success()
        .data(json!({ "contact": contact }))
        .respond(StatusCode::OK))
}

pub async fn create_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactPatch>, JsonRejection>,
) -> Result<Response, AppError> {
    let contact = payload(body)?.into_contact()?;

    let mut manager = state.contacts()?;
    if manager
        .find_by(ContactField::PhoneNumber, &contact.phone_number)
        .is_some()
    {
        return Err(AppError::Conflict(ValidationReq::duplicate_phone()));
    }

    let contact = manager.add(contact)?;
    info!(phone_number = %contact.phone_number, "contact created");

    Ok(Envelope::success()
        .data(json!({ "contact": contact }))
        .respond(StatusCode::CREATED))
}

pub async fn update_contact(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<ContactPatch>, JsonRejection>,
) -> Result<Response, AppError> {
    let phone_number = phone_param(path)?;
    let patch = payload(body)?;
    patch.validate()?;

    let mut manager = state.contacts()?;
    let contact = manager
        .update(&phone_number, patch)?
        .ok_or_else(contact_not_found)?;
    info!(phone_number = %phone_number, "contact updated");

    Ok(Envelope::success()
        .data(json!({ "contact": contact }))
        .respond(StatusCode::OK))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let phone_number = phone_param(path)?;
    let mut manager = state.contacts()?;
    if !manager.remove(&phone_number) {
        return Err(contact_not_found());
    }
    info!(phone_number = %phone_number, "contact deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}

pub async fn export_contacts(State(state): State<AppState>) -> Result<Response, AppError> {
    let manager = state.contacts()?;

    if manager.export_to_file() {
        Ok(Envelope::success()
            .message("Contacts exported successfully")
            .respond(StatusCode::OK))
    } else {
        Ok(Envelope::error("Failed to export contacts").respond(StatusCode::INTERNAL_SERVER_ERROR))
    }
}

pub async fn import_contacts(State(state): State<AppState>) -> Result<Response, AppError> {
    let mut manager = state.contacts()?;

    if manager.import_from_file() {
        let contacts = manager.list();
        Ok(Envelope::success()
            .message("Contacts imported successfully")
            .results(contacts.len())
            .data(json!({ "contacts": contacts }))
            .respond(StatusCode::OK))
    } else {
        Ok(
            Envelope::error("Failed to import contacts or file does not exist")
                .respond(StatusCode::INTERNAL_SERVER_ERROR),
        )
    }
}
