//! Roadway positions and the line-segment capability.

use serde::{Deserialize, Serialize};

use crate::elc::RouteLocation;

/// A point on the roadway as reported by the Traveler Information API.
///
/// Every field may be absent; Traffic API records routinely omit them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoadwayLocation {
    /// Free-form road name (e.g., "005", "SR 520", "I-90").
    pub road_name: Option<String>,

    /// Milepost along the road.
    #[serde(rename = "MilePost")]
    pub milepost: Option<f64>,

    /// Direction of travel (e.g., "Northbound", "Both").
    pub direction: Option<String>,

    /// Human-readable description of the point.
    pub description: Option<String>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl RoadwayLocation {
    /// Road name, if present and not blank.
    pub fn road_name(&self) -> Option<&str> {
        self.road_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

/// A record with a start and end point along a state route.
///
/// Implemented by record kinds that can be enriched with geometry from
/// the ELC. The enricher is the only writer of the route location slot.
pub trait LineSegment {
    /// Where the segment begins.
    fn start_location(&self) -> Option<&RoadwayLocation>;

    /// Where the segment ends.
    fn end_location(&self) -> Option<&RoadwayLocation>;

    /// Route location resolved by the ELC, if any.
    fn route_location(&self) -> Option<&RouteLocation>;

    /// Writable slot for the resolved route location.
    fn route_location_mut(&mut self) -> &mut Option<RouteLocation>;
}

impl<T: LineSegment + ?Sized> LineSegment for Box<T> {
    fn start_location(&self) -> Option<&RoadwayLocation> {
        (**self).start_location()
    }

    fn end_location(&self) -> Option<&RoadwayLocation> {
        (**self).end_location()
    }

    fn route_location(&self) -> Option<&RouteLocation> {
        (**self).route_location()
    }

    fn route_location_mut(&mut self) -> &mut Option<RouteLocation> {
        (**self).route_location_mut()
    }
}
