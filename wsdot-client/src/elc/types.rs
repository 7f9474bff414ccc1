//! ELC (Enterprise Location Coordinator) request and response DTOs.
//!
//! Response types use `Option` throughout and ignore unknown members: the
//! ELC returns many ArmCalc diagnostics we do not model.

use serde::{Deserialize, Serialize};

use crate::domain::RouteCode;

/// One location in a `Find Route Locations` batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteLocationRequest {
    /// Batch index, echoed back on the matching result.
    pub id: usize,

    pub route: RouteCode,

    /// Start milepost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srmp: Option<f64>,

    /// End milepost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_srmp: Option<f64>,
}

/// Spatial reference of a geometry, by well-known ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialReference {
    pub wkid: Option<i32>,
}

/// An ArcGIS geometry: a point (`x`, `y`) or a polyline (`paths`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub x: Option<f64>,
    pub y: Option<f64>,

    /// Polyline parts, each a sequence of `[x, y]` (or `[x, y, m]`) points.
    pub paths: Option<Vec<Vec<Vec<f64>>>>,

    pub spatial_reference: Option<SpatialReference>,
}

/// A location on a state route as resolved by the ELC.
///
/// Attached to exactly one source record by the enricher and not modified
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteLocation {
    /// Batch index of the request this result answers.
    ///
    /// The ELC omits results for locations it cannot find, so results are
    /// matched to requests by this value rather than by position.
    pub id: Option<i64>,

    /// 3 to 11 character state route identifier.
    pub route: Option<String>,

    /// Start measure (ARM).
    pub arm: Option<f64>,
    pub srmp: Option<f64>,
    pub back: Option<bool>,
    pub decrease: Option<bool>,

    /// End measure (ARM) of a line segment.
    pub end_arm: Option<f64>,
    pub end_srmp: Option<f64>,
    pub end_back: Option<bool>,

    pub reference_date: Option<String>,
    pub response_date: Option<String>,
    pub end_reference_date: Option<String>,
    pub end_response_date: Option<String>,
    pub realignment_date: Option<String>,
    pub end_realign_date: Option<String>,

    pub arm_calc_return_code: Option<i32>,
    pub arm_calc_end_return_code: Option<i32>,
    pub arm_calc_return_message: Option<String>,
    pub arm_calc_end_return_message: Option<String>,

    /// Set when the location could not be found on the LRS.
    pub locating_error: Option<String>,

    /// The point or line on the route.
    pub route_geometry: Option<Geometry>,

    /// Input point, for nearest-route lookups.
    pub event_point: Option<Geometry>,
    pub distance: Option<f64>,
    pub angle: Option<f64>,
}
