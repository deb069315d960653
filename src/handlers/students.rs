//! Student CRUD handlers: list, read, create, update, delete.
//!
//! Bodies arrive as raw JSON and are deserialized into the typed payloads
//! here; a missing or malformed field is a 400 at the handler boundary.

use crate::error::AppError;
use crate::service::StudentService;
use crate::state::AppState;
use crate::student::{NewStudent, StudentUpdate};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

fn parse_body<T: serde::de::DeserializeOwned>(body: Value) -> Result<T, AppError> {
    if !body.is_object() {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    }
    serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("invalid student payload: {}", e)))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let students = StudentService::list(&state.pool).await?;
    Ok((StatusCode::OK, Json(students)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let student = StudentService::fetch(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?;
    Ok((StatusCode::OK, Json(student)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let new_student: NewStudent = parse_body(body)?;
    new_student.validate()?;
    let student = StudentService::create(&state.pool, &new_student).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let patch: StudentUpdate = parse_body(body)?;
    patch.validate()?;
    let student = StudentService::update(&state.pool, id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?;
    Ok((StatusCode::OK, Json(student)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if !StudentService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("student {}", id)));
    }
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Student deleted successfully" })),
    ))
}
