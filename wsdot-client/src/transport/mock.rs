//! In-memory transport for testing without network access.
//!
//! Serves canned responses keyed by URL path (query string ignored) and
//! records every request so tests can assert on what was sent.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::BoxFuture;

use super::{Form, HttpResponse, Transport, TransportError};

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedRequest {
    Get { url: String },
    PostForm { url: String, form: Form },
}

impl RecordedRequest {
    pub fn url(&self) -> &str {
        match self {
            RecordedRequest::Get { url } | RecordedRequest::PostForm { url, .. } => url,
        }
    }
}

#[derive(Default)]
struct MockState {
    routes: HashMap<String, Result<HttpResponse, TransportError>>,
    requests: Vec<RecordedRequest>,
}

/// Transport that serves responses from memory.
///
/// Cloning shares the route table and request log.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a 200 response with `body` for `path`, replacing any earlier route.
    pub fn respond_json(&self, path: impl Into<String>, body: impl Into<String>) {
        self.respond(path, HttpResponse::ok(body));
    }

    /// Serve `response` for `path`, replacing any earlier route.
    pub fn respond(&self, path: impl Into<String>, response: HttpResponse) {
        self.lock().routes.insert(path.into(), Ok(response));
    }

    /// Fail requests to `path` at the transport level.
    pub fn fail(&self, path: impl Into<String>, message: impl Into<String>) {
        self.lock()
            .routes
            .insert(path.into(), Err(TransportError::new(message)));
    }

    /// All requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// Number of requests whose path equals `path`.
    pub fn request_count(&self, path: &str) -> usize {
        self.lock()
            .requests
            .iter()
            .filter(|r| strip_query(r.url()) == path)
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn serve(&self, request: RecordedRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.lock();
        let path = strip_query(request.url()).to_string();
        state.requests.push(request);

        match state.routes.get(&path) {
            Some(result) => result.clone(),
            None => Ok(HttpResponse {
                status: 404,
                body: format!("no mock route for {path}"),
            }),
        }
    }
}

impl Transport for MockTransport {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        let result = self.serve(RecordedRequest::Get {
            url: url.to_string(),
        });
        Box::pin(async move { result })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        form: Form,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        let result = self.serve(RecordedRequest::PostForm {
            url: url.to_string(),
            form,
        });
        Box::pin(async move { result })
    }
}

fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_routes_ignoring_query() {
        let mock = MockTransport::new();
        mock.respond_json("http://api.test/things", "[1,2,3]");

        let response = mock.get("http://api.test/things?code=abc").await.unwrap();
        assert_eq!(response, HttpResponse::ok("[1,2,3]"));
        assert_eq!(mock.request_count("http://api.test/things"), 1);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let mock = MockTransport::new();
        let response = mock.get("http://api.test/missing").await.unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn failures_are_transport_errors() {
        let mock = MockTransport::new();
        mock.fail("http://api.test/down", "connection refused");

        let err = mock.get("http://api.test/down").await.unwrap_err();
        assert_eq!(err.message(), "connection refused");
    }

    #[tokio::test]
    async fn records_form_posts() {
        let mock = MockTransport::new();
        mock.respond_json("http://api.test/post", "[]");

        let form = vec![("f", "json".to_string())];
        mock.post_form("http://api.test/post", form.clone()).await.unwrap();

        assert_eq!(
            mock.requests(),
            vec![RecordedRequest::PostForm {
                url: "http://api.test/post".into(),
                form,
            }]
        );
    }

    #[tokio::test]
    async fn routes_can_be_replaced() {
        let mock = MockTransport::new();
        mock.respond_json("http://api.test/x", "1");
        mock.respond_json("http://api.test/x", "2");

        let response = mock.get("http://api.test/x").await.unwrap();
        assert_eq!(response.body, "2");
    }
}
