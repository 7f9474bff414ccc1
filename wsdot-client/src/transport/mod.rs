//! HTTP transport used by every client.
//!
//! The clients only ever issue two kinds of request: a GET whose body is
//! JSON, and (for the ELC) a form-encoded POST. [`Transport`] captures
//! exactly that, so tests can swap the network for [`MockTransport`].

mod http;
mod mock;

use futures::future::BoxFuture;

pub use http::ReqwestTransport;
pub use mock::{MockTransport, RecordedRequest};

/// Raw HTTP response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// A 200 response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport-level failure: connection refused, timeout, unreadable body.
///
/// Distinct from a non-success status, which is a valid [`HttpResponse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Form fields for a POST body, in the order they are sent.
pub type Form = Vec<(&'static str, String)>;

/// Issues HTTP requests on behalf of the clients.
pub trait Transport: Send + Sync {
    /// GET `url` and return the status and body.
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, TransportError>>;

    /// POST `form` to `url` as `application/x-www-form-urlencoded`.
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        form: Form,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>>;
}
