//! WSDOT Traveler Information client.
//!
//! Typed access to the WSDOT Traffic and WSF Terminals APIs, with optional
//! route geometry for alerts and restrictions located through the ELC, and
//! a flush-date gated cache for ferry terminal data.

pub mod domain;
pub mod elc;
pub mod error;
pub mod fetch;
pub mod traffic;
pub mod transport;
pub mod wsf;

pub use error::ClientError;
