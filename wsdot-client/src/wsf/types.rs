//! WSF Terminals API response DTOs.
//!
//! Every terminal query returns the same `Terminal` shape with a different
//! subset of fields filled in, so most fields are optional.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::wcf_date;

/// A ferry terminal, as returned by any `terminal*` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Terminal {
    #[serde(rename = "TerminalID")]
    pub terminal_id: i32,
    #[serde(rename = "TerminalSubjectID", default)]
    pub terminal_subject_id: i32,
    #[serde(rename = "RegionID", default)]
    pub region_id: i32,
    pub terminal_name: Option<String>,
    pub terminal_abbrev: Option<String>,
    #[serde(default)]
    pub sort_seq: i32,

    // terminalbasics
    #[serde(default)]
    pub overhead_passenger_loading: bool,
    #[serde(default)]
    pub elevator: bool,
    #[serde(default)]
    pub waiting_room: bool,
    #[serde(default)]
    pub food_service: bool,
    #[serde(default)]
    pub restroom: bool,

    // terminallocations
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address_line_one: Option<String>,
    pub address_line_two: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub map_link: Option<String>,
    pub directions: Option<String>,

    // terminaltransports
    pub parking_info: Option<String>,
    pub airport_info: Option<String>,
    pub transit_links: Option<Vec<Link>>,

    pub bulletins: Option<Vec<Bulletin>>,
    pub wait_times: Option<Vec<WaitTime>>,

    // terminalsailingspace
    pub departing_spaces: Option<Vec<DepartingSpace>>,
}

/// A link to an external resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Link {
    #[serde(rename = "LinkURL")]
    pub link_url: Option<String>,
    pub link_name: Option<String>,
    pub sort_seq: Option<i32>,
}

/// A terminal bulletin (alert or notice).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bulletin {
    pub bulletin_title: Option<String>,
    pub bulletin_text: Option<String>,
    #[serde(default)]
    pub bulletin_sort_seq: i32,
    #[serde(default, deserialize_with = "wcf_date::option")]
    pub bulletin_last_updated: Option<DateTime<FixedOffset>>,
}

/// Wait-time notes for a route served by the terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WaitTime {
    #[serde(rename = "RouteID")]
    pub route_id: Option<i32>,
    pub route_name: Option<String>,
    pub wait_time_notes: Option<String>,
    #[serde(default, deserialize_with = "wcf_date::option")]
    pub wait_time_last_updated: Option<DateTime<FixedOffset>>,
}

/// Vehicle space on an upcoming departure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepartingSpace {
    #[serde(default, deserialize_with = "wcf_date::option")]
    pub departure: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub is_cancelled: bool,
    #[serde(rename = "VesselID")]
    pub vessel_id: Option<i32>,
    pub vessel_name: Option<String>,
    pub max_space_count: Option<i32>,
    pub space_for_arrival_terminals: Option<Vec<SpaceForArrivalTerminal>>,
}

/// Remaining space on a departure, for one arrival terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpaceForArrivalTerminal {
    #[serde(rename = "TerminalID")]
    pub terminal_id: i32,
    pub terminal_name: Option<String>,
    #[serde(default)]
    pub display_reservable_space: bool,
    pub reservable_space_count: Option<i32>,
    #[serde(default)]
    pub display_drive_up_space: bool,
    pub drive_up_space_count: Option<i32>,
    pub max_space_count: Option<i32>,
}
