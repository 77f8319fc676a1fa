//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's wire schema but are declared on this side
//! of the boundary, so the client crate stands alone. The end-to-end test
//! drives a real server instance and catches any drift between the two.
//! Update payloads skip `None` fields during serialization because the
//! server applies only the fields present in the JSON.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    pub order: u64,
}

/// Request payload for creating a new todo. The server assigns the id;
/// `order` defaults to that id when omitted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u64>,
}

/// Request payload for a partial update. Only the fields present in the JSON
/// are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u64>,
}
