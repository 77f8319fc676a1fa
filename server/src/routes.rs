//! HTTP handlers for the `/todos` resource.
//!
//! # Design
//! Handlers are stateless between requests; each one locks the shared store,
//! performs a single operation, and maps absence to 404. Body extraction on
//! POST and PATCH uses `Result<Json<_>, JsonRejection>` so that a missing,
//! null, or unparseable body becomes a 400 regardless of what axum's default
//! rejection would be. On PATCH the body check runs before the id lookup, so
//! a bad body is a 400 even when the target id does not exist.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::store::Todo;
use crate::Db;

/// Payload for creating a todo. There is no `id` field: clients cannot pick
/// ids, and an `id` key in the body is simply ignored by deserialization.
#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    pub order: Option<u64>,
}

/// Payload for a partial update. Only fields present in the JSON are applied.
#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub order: Option<u64>,
}

pub async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.lock().await;
    Json(store.get_all().to_vec())
}

pub async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Todo>, StatusCode> {
    let store = db.lock().await;
    store
        .find_by_id(id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn create_todo(
    State(db): State<Db>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), StatusCode> {
    let Json(input) = payload.map_err(|_| StatusCode::BAD_REQUEST)?;
    let mut store = db.lock().await;
    let todo = store.add(input.title, input.completed, input.order);
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, StatusCode> {
    // Body validation first; existence second.
    let Json(input) = payload.map_err(|_| StatusCode::BAD_REQUEST)?;

    let mut store = db.lock().await;
    let todo = store.find_by_id_mut(id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    if let Some(order) = input.order {
        todo.order = order;
    }
    Ok(Json(todo.clone()))
}

pub async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> StatusCode {
    let mut store = db.lock().await;
    if store.remove_by_id(id) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}
