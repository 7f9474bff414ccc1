//! Client error types.

use crate::domain::RouteIdError;
use crate::transport::TransportError;

/// How much of an undecodable body to keep in [`ClientError::DecodeFailed`].
pub(crate) const BODY_EXCERPT_CHARS: usize = 500;

/// Errors that can occur when talking to the Traffic, WSF or ELC services.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (network error, timeout, etc.)
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service answered with a non-success status
    #[error("request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    /// The response body was not the expected JSON shape
    #[error("failed to decode response: {message}")]
    DecodeFailed {
        message: String,
        body: Option<String>,
    },

    /// A request body could not be serialized
    #[error("failed to encode request: {0}")]
    EncodeFailed(String),

    /// A route name could not be turned into a route code
    #[error("invalid route: {0}")]
    RouteId(#[from] RouteIdError),
}

impl ClientError {
    pub(crate) fn decode(err: &serde_json::Error, body: &str) -> Self {
        ClientError::DecodeFailed {
            message: err.to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ClientError::RequestFailed {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(
            err.to_string(),
            "request failed with status 500: Internal Server Error"
        );

        let err = ClientError::from(TransportError::new("connection refused"));
        assert_eq!(err.to_string(), "transport error: connection refused");

        let err = ClientError::from(RouteIdError::MissingRouteName);
        assert_eq!(err.to_string(), "invalid route: missing route name");
    }

    #[test]
    fn decode_truncates_body() {
        let body = "x".repeat(2000);
        let json_err = serde_json::from_str::<u32>(&body).unwrap_err();

        match ClientError::decode(&json_err, &body) {
            ClientError::DecodeFailed { message, body } => {
                assert!(!message.is_empty());
                assert_eq!(body.unwrap().len(), BODY_EXCERPT_CHARS);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
