//! GET-and-decode primitive shared by all clients.

use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::transport::Transport;

/// GET `url` and decode the whole body as JSON into `T`.
///
/// Non-success statuses become [`ClientError::RequestFailed`] carrying the
/// body text; malformed bodies become [`ClientError::DecodeFailed`]. No
/// retries.
pub async fn fetch_json<T>(transport: &dyn Transport, url: &str) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    let response = transport.get(url).await?;

    if !response.is_success() {
        return Err(ClientError::RequestFailed {
            status: response.status,
            message: response.body,
        });
    }

    serde_json::from_str(&response.body).map_err(|e| ClientError::decode(&e, &response.body))
}
