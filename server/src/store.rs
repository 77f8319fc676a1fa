//! In-memory todo registry.
//!
//! # Design
//! An insertion-ordered `Vec` plus a monotonic id counter. Ids start at 1,
//! only ever increase, and are never reused after a delete. Lookups are
//! linear scans, which is fine at the scale this server targets. The store
//! never raises errors; absence is conveyed through `Option` and `bool`
//! return values that the route layer maps to HTTP statuses.

use serde::{Deserialize, Serialize};

/// A single todo item as stored and as serialized over the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    pub order: u64,
}

/// Authoritative collection of todos for the lifetime of the process.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// All todos in insertion order.
    pub fn get_all(&self) -> &[Todo] {
        &self.todos
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Mutable lookup used by the update path. Callers may change `title`,
    /// `completed`, and `order`; the id itself stays fixed.
    pub fn find_by_id_mut(&mut self, id: u64) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == id)
    }

    /// Assign the next id, append, and return a clone of the stored todo.
    /// `order` falls back to the assigned id when the caller supplies none.
    pub fn add(&mut self, title: String, completed: bool, order: Option<u64>) -> Todo {
        let id = self.next_id;
        self.next_id += 1;
        let todo = Todo {
            id,
            title,
            completed,
            order: order.unwrap_or(id),
        };
        self.todos.push(todo.clone());
        todo
    }

    /// Remove the todo with the given id, reporting whether one was removed.
    /// The id counter is untouched, so deleted ids are never handed out again.
    pub fn remove_by_id(&mut self, id: u64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
