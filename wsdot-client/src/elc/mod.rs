//! Enterprise Location Coordinator (ELC) client.
//!
//! The ELC converts a state route plus mileposts into map geometry. Line
//! segments from the Traffic API (alerts, commercial vehicle restrictions)
//! are located in a single batched `Find Route Locations` call and the
//! results merged back onto the originating records.

mod batch;
mod client;
mod types;

pub use batch::{Batch, OUTPUT_WKID, build_batch, merge_results, reference_date_param};
pub use client::{ElcClient, ElcConfig};
pub use types::{Geometry, RouteLocation, RouteLocationRequest, SpatialReference};
