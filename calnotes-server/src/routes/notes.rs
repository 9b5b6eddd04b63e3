//! Note endpoints

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, put},
};
use calnotes_core::{Note, NoteDraft, NoteId, NotePatch};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", put(update_note).delete(delete_note))
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub date: Option<String>,
}

/// GET /notes?date=YYYY-MM-DD - List the notes of one day, newest first
async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Note>>, AppError> {
    let date = query
        .date
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::BadRequest("Date parameter is required".into()))?;
    let date = parse_date(&date)?;

    let notes = state.store()?.list_by_date(date)?;

    Ok(Json(notes))
}

const REQUIRED_FIELDS: [&str; 3] = ["title", "description", "date"];

/// POST /notes - Create a note. Every field must be present; a null
/// description is stored as empty.
async fn create_note(
    State(state): State<AppState>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let body = json_body(body)?;
    if !REQUIRED_FIELDS.iter().all(|field| body.contains_key(*field)) {
        return Err(AppError::BadRequest(
            "Missing required fields: title, description, date".into(),
        ));
    }

    let title = string_field(&body, "title")?.unwrap_or_default();
    let description = description_field(&body)?.unwrap_or_default();
    let date = string_field(&body, "date")?.unwrap_or_default();

    let draft = NoteDraft::new(title, description, parse_date(&date)?);
    let note = state.store()?.insert(&draft)?;
    tracing::info!(id = %note.id, date = %note.date, "note created");

    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /notes/:id - Update any subset of title, description and date
async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Note>, AppError> {
    let body = json_body(body)?;
    if body.is_empty() {
        return Err(AppError::BadRequest("No data provided".into()));
    }

    let id = NoteId::from(id);
    let store = state.store()?;

    if store.get(&id)?.is_none() {
        return Err(note_not_found());
    }

    let patch = NotePatch {
        title: string_field(&body, "title")?,
        description: description_field(&body)?,
        date: string_field(&body, "date")?
            .map(|d| parse_date(&d))
            .transpose()?,
    };
    if patch.is_empty() {
        return Err(AppError::BadRequest("No valid fields to update".into()));
    }

    let note = store.update(&id, &patch)?.ok_or_else(note_not_found)?;
    tracing::info!(id = %note.id, "note updated");

    Ok(Json(note))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// DELETE /notes/:id - Delete a note
async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = NoteId::from(id);

    if !state.store()?.delete(&id)? {
        return Err(note_not_found());
    }
    tracing::info!(%id, "note deleted");

    Ok(Json(DeleteResponse {
        success: true,
        message: "Note deleted".into(),
    }))
}

fn note_not_found() -> AppError {
    AppError::NotFound("Note not found".into())
}

fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{s}'. Expected YYYY-MM-DD")))
}

/// Unwrap a JSON object body, answering malformed ones with a JSON 400
fn json_body(
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Map<String, Value>, AppError> {
    body.map(|Json(map)| map)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// `description` may be null, which reads as empty
fn description_field(body: &Map<String, Value>) -> Result<Option<String>, AppError> {
    match body.get("description") {
        Some(Value::Null) => Ok(Some(String::new())),
        _ => string_field(body, "description"),
    }
}

/// Read an optional string field from a request body
fn string_field(body: &Map<String, Value>, key: &str) -> Result<Option<String>, AppError> {
    match body.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(AppError::BadRequest(format!("Field '{key}' must be a string"))),
    }
}
