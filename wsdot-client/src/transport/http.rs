//! reqwest-backed transport.

use futures::future::BoxFuture;
use tracing::debug;

use super::{Form, HttpResponse, Transport, TransportError};

const USER_AGENT: &str = concat!("wsdot-client/", env!("CARGO_PKG_VERSION"));

/// Production transport using a shared `reqwest::Client`.
///
/// No timeout is set beyond reqwest's default.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh `reqwest::Client`.
    pub fn new() -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(to_transport_error)?;

        Ok(Self { http })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for ReqwestTransport {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            debug!(url, "GET");
            let response = self.http.get(url).send().await.map_err(to_transport_error)?;
            read_response(response).await
        })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        form: Form,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            debug!(url, fields = form.len(), "POST form");
            let response = self
                .http
                .post(url)
                .form(&form)
                .send()
                .await
                .map_err(to_transport_error)?;
            read_response(response).await
        })
    }
}

async fn read_response(response: reqwest::Response) -> Result<HttpResponse, TransportError> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(to_transport_error)?;
    Ok(HttpResponse { status, body })
}

fn to_transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::new(format!("request timeout: {err}"))
    } else if err.is_connect() {
        TransportError::new(format!("connection failed: {err}"))
    } else {
        TransportError::new(format!("request failed: {err}"))
    }
}
