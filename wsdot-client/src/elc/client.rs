//! ELC HTTP client.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::domain::LineSegment;
use crate::error::ClientError;
use crate::transport::Transport;

use super::batch::{build_batch, build_form, merge_results};
use super::types::{RouteLocation, RouteLocationRequest};

/// Default `Find Route Locations` endpoint of the ELC REST SOE.
const DEFAULT_URL: &str = "https://data.wsdot.wa.gov/arcgis/rest/services/Shared/ElcRestSOE/MapServer/exts/ElcRestSoe/Find%20Route%20Locations";

/// Configuration for the ELC client.
#[derive(Debug, Clone)]
pub struct ElcConfig {
    /// Full URL of the `Find Route Locations` operation
    pub url: String,
}

impl ElcConfig {
    /// Set a custom endpoint URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl Default for ElcConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
        }
    }
}

/// Client for the ELC `Find Route Locations` operation.
#[derive(Clone)]
pub struct ElcClient {
    transport: Arc<dyn Transport>,
    url: String,
}

impl ElcClient {
    pub fn new(config: ElcConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            url: config.url,
        }
    }

    /// Locate a batch of route segments in one request.
    ///
    /// The ELC omits locations it cannot find, so the result may be shorter
    /// than `requests`; use [`RouteLocation::id`] to match them up.
    pub async fn find_route_locations(
        &self,
        requests: &[RouteLocationRequest],
        reference_date: NaiveDate,
    ) -> Result<Vec<RouteLocation>, ClientError> {
        let form = build_form(requests, reference_date)?;
        let response = self.transport.post_form(&self.url, form).await?;

        if !response.is_success() {
            return Err(ClientError::RequestFailed {
                status: response.status,
                message: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| ClientError::decode(&e, &response.body))
    }

    /// Fill in the route location of every eligible segment the ELC can find.
    ///
    /// Uses today's date as the reference date. See [`ElcClient::enrich_as_of`].
    pub async fn enrich<S: LineSegment>(&self, segments: &mut [S]) -> Result<usize, ClientError> {
        self.enrich_as_of(segments, Local::now().date_naive()).await
    }

    /// Fill in route locations using the LRS as of `reference_date`.
    ///
    /// Segments are never removed or reordered; only the route location of
    /// segments the ELC answered for is written. If the ELC answers with a
    /// non-success status the whole batch is skipped and `Ok(0)` returned.
    /// Transport and decode failures propagate. Returns the number of
    /// segments updated.
    pub async fn enrich_as_of<S: LineSegment>(
        &self,
        segments: &mut [S],
        reference_date: NaiveDate,
    ) -> Result<usize, ClientError> {
        let batch = build_batch(segments);
        if batch.is_empty() {
            debug!(total = segments.len(), "no eligible segments to locate");
            return Ok(0);
        }

        let results = match self
            .find_route_locations(&batch.requests, reference_date)
            .await
        {
            Ok(results) => results,
            Err(ClientError::RequestFailed { status, message }) => {
                warn!(status, %message, "ELC request failed, skipping enrichment");
                return Ok(0);
            }
            Err(e) => return Err(e),
        };

        let located = results.len();
        let updated = merge_results(segments, &batch.positions, results);
        debug!(
            total = segments.len(),
            sent = batch.len(),
            located,
            updated,
            "enriched line segments"
        );

        Ok(updated)
    }
}
