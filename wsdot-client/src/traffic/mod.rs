//! WSDOT Traveler Information API client.

mod client;
mod types;

pub use client::{TrafficClient, TrafficConfig};
pub use types::{
    Alert, BorderCrossing, Camera, CvRestriction, FlowData, PassCondition, RestrictionType,
    TravelRestriction, TravelTimeRoute,
};
