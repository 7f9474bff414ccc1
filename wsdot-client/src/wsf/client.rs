//! WSF Terminals API client.
//!
//! Terminal data changes rarely, so responses are cached per endpoint and
//! invalidated when the API's cache flush date moves forward. Sailing space
//! changes minute to minute and is always fetched live.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::parse_wcf_date;
use crate::error::ClientError;
use crate::fetch::fetch_json;
use crate::transport::Transport;

use super::cache::{CacheConfig, FreshnessCache};
use super::types::Terminal;

/// Default root URL for the WSF Terminals API.
const DEFAULT_BASE_URL: &str = "http://www.wsdot.wa.gov/ferries/api/terminals/rest";

/// Endpoint that is never served from the cache.
pub const SAILING_SPACE_ENDPOINT: &str = "terminalsailingspace";

/// Kinds of terminal query, each backed by a `terminal<kind>` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalQueryType {
    Basics,
    Bulletins,
    Locations,
    SailingSpace,
    Transports,
    WaitTimes,
    Verbose,
}

impl TerminalQueryType {
    pub const ALL: [TerminalQueryType; 7] = [
        TerminalQueryType::Basics,
        TerminalQueryType::Bulletins,
        TerminalQueryType::Locations,
        TerminalQueryType::SailingSpace,
        TerminalQueryType::Transports,
        TerminalQueryType::WaitTimes,
        TerminalQueryType::Verbose,
    ];

    /// The API endpoint name, e.g. `terminalbasics`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            TerminalQueryType::Basics => "terminalbasics",
            TerminalQueryType::Bulletins => "terminalbulletins",
            TerminalQueryType::Locations => "terminallocations",
            TerminalQueryType::SailingSpace => SAILING_SPACE_ENDPOINT,
            TerminalQueryType::Transports => "terminaltransports",
            TerminalQueryType::WaitTimes => "terminalwaittimes",
            TerminalQueryType::Verbose => "terminalverbose",
        }
    }
}

impl fmt::Display for TerminalQueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// Configuration for the WSF client.
#[derive(Debug, Clone)]
pub struct WsfConfig {
    /// API access code
    pub access_code: String,
    /// Root URL for the Terminals API
    pub base_url: String,
    /// Response cache settings
    pub cache: CacheConfig,
}

impl WsfConfig {
    /// Create a new config with the given access code.
    pub fn new(access_code: impl Into<String>) -> Self {
        Self {
            access_code: access_code.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            cache: CacheConfig::default(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Client for the WSF Terminals API, with a flush-date gated cache.
///
/// The cache belongs to this instance; two clients never share entries.
/// Collection queries are cached by endpoint name. Single-terminal queries
/// are never stored, so they always go to the API.
pub struct WsfClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    access_code: String,
    cache: FreshnessCache,
}

impl WsfClient {
    pub fn new(config: WsfConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: config.base_url,
            access_code: config.access_code,
            cache: FreshnessCache::new(&config.cache),
        }
    }

    /// Fetch the upstream cache flush date, clearing the cache if it has
    /// advanced since the last check.
    pub async fn cache_flush_date(&self) -> Result<DateTime<FixedOffset>, ClientError> {
        let url = format!("{}/cacheflushdate", self.base_url);
        let raw: String = fetch_json(self.transport.as_ref(), &url).await?;
        let flush_date = parse_wcf_date(&raw).map_err(|e| ClientError::DecodeFailed {
            message: e.to_string(),
            body: Some(raw.clone()),
        })?;

        if self.cache.observe_flush_date(flush_date) {
            debug!(%flush_date, "WSF cache flushed");
        }
        Ok(flush_date)
    }

    /// All terminals, as seen by the given query.
    pub async fn query(&self, query_type: TerminalQueryType) -> Result<Vec<Terminal>, ClientError> {
        self.get(query_type.endpoint(), None).await
    }

    /// A single terminal, as seen by the given query.
    pub async fn query_terminal(
        &self,
        query_type: TerminalQueryType,
        terminal_id: i32,
    ) -> Result<Terminal, ClientError> {
        self.get(query_type.endpoint(), Some(terminal_id)).await
    }

    /// Fetch and decode an endpoint, consulting the cache where allowed.
    ///
    /// Unless `endpoint` is the sailing space endpoint (compared
    /// case-insensitively), the flush date is checked first, and a cached
    /// payload for `endpoint` is returned without further requests. If the
    /// flush date cannot be fetched the cache is bypassed for this call.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        terminal_id: Option<i32>,
    ) -> Result<T, ClientError> {
        let mut use_cache = !endpoint.eq_ignore_ascii_case(SAILING_SPACE_ENDPOINT);

        if use_cache && let Err(e) = self.cache_flush_date().await {
            warn!(error = %e, endpoint, "could not check cache flush date, treating cache as stale");
            use_cache = false;
        }

        // Single-terminal payloads would collide with the collection under
        // the endpoint-name key, so only collections are cached.
        let cache_key = match terminal_id {
            None if use_cache => Some(endpoint),
            _ => None,
        };

        if let Some(key) = cache_key
            && let Some(payload) = self.cache.get(key).await
        {
            debug!(endpoint, "WSF cache hit");
            return T::deserialize(&*payload).map_err(|e| ClientError::DecodeFailed {
                message: e.to_string(),
                body: None,
            });
        }

        let url = self.url(endpoint, terminal_id);
        debug!(endpoint, ?terminal_id, "querying WSF API");
        let payload: Value = fetch_json(self.transport.as_ref(), &url).await?;

        let decoded =
            T::deserialize(&payload).map_err(|e| ClientError::decode(&e, &payload.to_string()))?;

        if let Some(key) = cache_key {
            self.cache.insert(key, Arc::new(payload)).await;
        }

        Ok(decoded)
    }

    /// `<root>/<endpoint>[/<id>]?apiaccesscode=<code>`
    fn url(&self, endpoint: &str, terminal_id: Option<i32>) -> String {
        match terminal_id {
            Some(id) => format!(
                "{}/{}/{}?apiaccesscode={}",
                self.base_url, endpoint, id, self.access_code
            ),
            None => format!(
                "{}/{}?apiaccesscode={}",
                self.base_url, endpoint, self.access_code
            ),
        }
    }

    /// The response cache (for monitoring and tests).
    pub fn cache(&self) -> &FreshnessCache {
        &self.cache
    }
}
