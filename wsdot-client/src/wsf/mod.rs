//! Washington State Ferries (WSF) Terminals API client.
//!
//! Responses are cached per client and invalidated in bulk whenever the
//! API reports a newer cache flush date.

mod cache;
mod client;
mod types;

pub use cache::{CacheConfig, CachedPayload, FreshnessCache};
pub use client::{SAILING_SPACE_ENDPOINT, TerminalQueryType, WsfClient, WsfConfig};
pub use types::{Bulletin, DepartingSpace, Link, SpaceForArrivalTerminal, Terminal, WaitTime};
