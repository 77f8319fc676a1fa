//! Minimal todo REST service.
//!
//! # Overview
//! Five operations on a single resource: list, get, create, delete, and
//! partial update, all rooted at `/todos`. State lives in an in-memory
//! [`TodoStore`] shared behind one mutex; nothing survives the process.
//!
//! # Design
//! - `app()` builds the router with a fresh store, so every test gets an
//!   isolated instance; `run()` serves it on a caller-provided listener.
//! - The store is constructed here and handed to the handlers through axum
//!   state. Handlers never keep todos across requests; each request locks
//!   and re-reads.
//! - Anticipated failures map to 404 (unknown id) or 400 (bad path segment,
//!   missing or unparseable body). Nothing maps to 5xx.

mod routes;
pub mod store;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use routes::{create_todo, delete_todo, get_todo, list_todos, update_todo};
pub use store::{Todo, TodoStore};

/// Shared handle to the store. Axum runs handlers on parallel tasks, so every
/// store access, read or write, goes through this single lock.
pub type Db = Arc<Mutex<TodoStore>>;

pub fn app() -> Router {
    let db: Db = Arc::new(Mutex::new(TodoStore::new()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
