//! Traveler Information API response DTOs.
//!
//! These map directly to the WCF JSON responses. Field names are
//! PascalCase on the wire; identifiers keep their `ID` spelling.
//! Dates arrive as `/Date(ms-0800)/` strings.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::domain::{LineSegment, RoadwayLocation, wcf_date};
use crate::elc::RouteLocation;

type WcfDate = Option<DateTime<FixedOffset>>;

/// A highway alert (incident, construction, closure).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Alert {
    #[serde(rename = "AlertID")]
    pub alert_id: i32,

    pub county: Option<String>,
    pub region: Option<String>,

    pub event_category: Option<String>,
    pub event_status: Option<String>,
    pub priority: Option<String>,

    pub headline_description: Option<String>,
    pub extended_description: Option<String>,

    pub start_roadway_location: Option<RoadwayLocation>,
    pub end_roadway_location: Option<RoadwayLocation>,

    #[serde(default, deserialize_with = "wcf_date::option")]
    pub start_time: WcfDate,
    #[serde(default, deserialize_with = "wcf_date::option")]
    pub end_time: WcfDate,
    #[serde(default, deserialize_with = "wcf_date::option")]
    pub last_updated_time: WcfDate,

    /// Geometry located by the ELC, when enrichment was requested.
    #[serde(default)]
    pub route_location: Option<RouteLocation>,
}

impl LineSegment for Alert {
    fn start_location(&self) -> Option<&RoadwayLocation> {
        self.start_roadway_location.as_ref()
    }

    fn end_location(&self) -> Option<&RoadwayLocation> {
        self.end_roadway_location.as_ref()
    }

    fn route_location(&self) -> Option<&RouteLocation> {
        self.route_location.as_ref()
    }

    fn route_location_mut(&mut self) -> &mut Option<RouteLocation> {
        &mut self.route_location
    }
}

/// Kind of commercial vehicle restriction.
///
/// WCF sends this as its ordinal (0, 1) unless configured for names;
/// both forms are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RestrictionType {
    BridgeRestriction,
    RoadRestriction,
}

impl<'de> Deserialize<'de> for RestrictionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Debug, Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Ordinal(u8),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Ordinal(0) => Ok(RestrictionType::BridgeRestriction),
            Raw::Ordinal(1) => Ok(RestrictionType::RoadRestriction),
            Raw::Name(name) if name == "BridgeRestriction" => Ok(RestrictionType::BridgeRestriction),
            Raw::Name(name) if name == "RoadRestriction" => Ok(RestrictionType::RoadRestriction),
            other => Err(de::Error::custom(format!(
                "unknown restriction type {other:?}"
            ))),
        }
    }
}

/// A commercial vehicle restriction on a state highway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CvRestriction {
    #[serde(rename = "StateRouteID")]
    pub state_route_id: Option<String>,
    pub state: Option<String>,

    pub restriction_type: Option<RestrictionType>,
    pub restriction_comment: Option<String>,
    pub vehicle_type: Option<String>,

    pub restriction_width_in_inches: Option<i32>,
    pub restriction_height_in_inches: Option<i32>,
    pub restriction_length_in_inches: Option<i32>,
    pub restriction_weight_in_pounds: Option<i32>,
    pub maximum_gross_vehicle_weight_in_pounds: Option<i32>,

    #[serde(default)]
    pub is_detour_available: bool,
    #[serde(default)]
    pub is_permanent_restriction: bool,
    #[serde(default)]
    pub is_exceptions_allowed: bool,
    #[serde(default)]
    pub is_warning: bool,

    #[serde(default, deserialize_with = "wcf_date::option")]
    pub date_posted: WcfDate,
    #[serde(default, deserialize_with = "wcf_date::option")]
    pub date_effective: WcfDate,
    #[serde(default, deserialize_with = "wcf_date::option")]
    pub date_expires: WcfDate,

    pub location_name: Option<String>,
    pub location_description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub bridge_name: Option<String>,
    pub bridge_number: Option<String>,

    pub start_roadway_location: Option<RoadwayLocation>,
    pub end_roadway_location: Option<RoadwayLocation>,

    /// Geometry located by the ELC, when enrichment was requested.
    #[serde(default)]
    pub route_location: Option<RouteLocation>,
}

impl LineSegment for CvRestriction {
    fn start_location(&self) -> Option<&RoadwayLocation> {
        self.start_roadway_location.as_ref()
    }

    fn end_location(&self) -> Option<&RoadwayLocation> {
        self.end_roadway_location.as_ref()
    }

    fn route_location(&self) -> Option<&RouteLocation> {
        self.route_location.as_ref()
    }

    fn route_location_mut(&mut self) -> &mut Option<RouteLocation> {
        &mut self.route_location
    }
}

/// Current wait time at a Canadian border crossing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BorderCrossing {
    pub crossing_name: Option<String>,
    pub border_crossing_location: Option<RoadwayLocation>,

    #[serde(default, deserialize_with = "wcf_date::option")]
    pub time: WcfDate,

    /// Minutes.
    pub wait_time: Option<i32>,
}

/// A traffic camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Camera {
    #[serde(rename = "CameraID")]
    pub camera_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub region: Option<String>,
    pub camera_location: Option<RoadwayLocation>,
    #[serde(rename = "ImageURL")]
    pub image_url: Option<String>,
    pub image_width: Option<i32>,
    pub image_height: Option<i32>,
    #[serde(default)]
    pub is_active: bool,
}

/// A restriction attached to a mountain pass report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TravelRestriction {
    pub restriction_text: Option<String>,
    pub travel_direction: Option<String>,
}

/// Conditions reported for a mountain pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PassCondition {
    pub mountain_pass_id: i32,
    pub mountain_pass_name: Option<String>,

    #[serde(default, deserialize_with = "wcf_date::option")]
    pub date_updated: WcfDate,

    pub elevation_in_feet: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub road_condition: Option<String>,
    pub weather_condition: Option<String>,
    pub temperature_in_fahrenheit: Option<i32>,
    #[serde(default)]
    pub travel_advisory_active: bool,
    pub restriction_one: Option<TravelRestriction>,
    pub restriction_two: Option<TravelRestriction>,
}

/// A reading from a traffic flow station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlowData {
    #[serde(rename = "FlowDataID")]
    pub flow_data_id: i32,

    /// 0 unknown, 1 wide open, 2 moderate, 3 heavy, 4 stop and go, 5 no data.
    pub flow_reading_value: Option<i32>,

    pub flow_station_location: Option<RoadwayLocation>,
    pub region: Option<String>,
    pub station_name: Option<String>,

    #[serde(default, deserialize_with = "wcf_date::option")]
    pub time: WcfDate,
}

/// Travel time for a popular route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TravelTimeRoute {
    #[serde(rename = "TravelTimeID")]
    pub travel_time_id: i32,
    pub name: Option<String>,
    pub description: Option<String>,

    /// Minutes.
    pub average_time: Option<i32>,
    /// Minutes.
    pub current_time: Option<i32>,
    /// Miles.
    pub distance: Option<f64>,

    pub start_point: Option<RoadwayLocation>,
    pub end_point: Option<RoadwayLocation>,

    #[serde(default, deserialize_with = "wcf_date::option")]
    pub time_updated: WcfDate,
}
