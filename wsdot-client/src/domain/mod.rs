//! Domain types shared by the Traffic, WSF and ELC clients.
//!
//! Route codes are validated at construction, so code that receives a
//! [`RouteCode`] can send it to the ELC as-is.

mod location;
mod route;
pub mod wcf_date;

pub use location::{LineSegment, RoadwayLocation};
pub use route::{RouteCode, RouteIdError};
pub use wcf_date::{WcfDateError, parse_wcf_date};
