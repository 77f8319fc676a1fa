//! Plain-data HTTP request and response types.
//!
//! # Design
//! The client never performs I/O. It emits [`HttpRequest`] values and
//! accepts [`HttpResponse`] values, and the caller bridges the two with a
//! real transport. Everything is owned data with no lifetimes, so values
//! can be passed around, logged, or stored freely.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by the `TodoClient::build_*` methods. The caller executes it
/// against the network and hands the result back as an [`HttpResponse`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an [`HttpRequest`], then fed
/// to the matching `TodoClient::parse_*` method.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
