//! Synchronous client library for the todo REST service.
//!
//! # Overview
//! Builds [`HttpRequest`] values and parses [`HttpResponse`] values without
//! touching the network. The caller executes the actual HTTP round-trip with
//! whatever transport it prefers, which keeps this crate deterministic and
//! trivial to test.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the server crate; the end-to-end
//!   test catches schema drift between the two.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Todo, UpdateTodo};
