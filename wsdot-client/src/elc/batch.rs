//! Building ELC batches from line segments and merging results back.
//!
//! Only eligible segments are sent: both ends present, a non-blank start
//! road name, and a route code derivable from the start name or, failing
//! that, the end name. Each gets a zero-based batch index in iteration
//! order; results are matched back through that index, never through the
//! segment's position in the caller's collection.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{LineSegment, RouteCode};
use crate::error::ClientError;
use crate::transport::Form;

use super::types::{RouteLocation, RouteLocationRequest};

/// WGS 84, the spatial reference requested for returned geometry.
pub const OUTPUT_WKID: u32 = 4326;

/// An ELC request batch and the segments it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Position in the caller's collection of each batch entry.
    /// `positions[i]` is the segment that request `i` describes.
    pub positions: Vec<usize>,

    pub requests: Vec<RouteLocationRequest>,
}

impl Batch {
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }
}

/// Select the eligible segments and assign batch indices.
pub fn build_batch<S: LineSegment>(segments: &[S]) -> Batch {
    let mut positions = Vec::new();
    let mut requests = Vec::new();

    for (position, segment) in segments.iter().enumerate() {
        let (Some(start), Some(end)) = (segment.start_location(), segment.end_location()) else {
            continue;
        };

        if start.road_name().is_none() {
            continue;
        }

        let Some(route) = RouteCode::normalize_lenient(start.road_name.as_deref())
            .or_else(|| RouteCode::normalize_lenient(end.road_name.as_deref()))
        else {
            debug!(
                position,
                start = ?start.road_name,
                end = ?end.road_name,
                "no usable route name, skipping segment"
            );
            continue;
        };

        requests.push(RouteLocationRequest {
            id: requests.len(),
            route,
            srmp: start.milepost,
            end_srmp: end.milepost,
        });
        positions.push(position);
    }

    Batch {
        positions,
        requests,
    }
}

/// Attach results to the segments they answer.
///
/// Results without an index, with an index outside the batch, or whose
/// segment is gone are skipped. If the ELC answers an index twice, the
/// first answer wins. Returns the number of segments updated.
pub fn merge_results<S: LineSegment>(
    segments: &mut [S],
    positions: &[usize],
    results: Vec<RouteLocation>,
) -> usize {
    let mut filled = vec![false; positions.len()];
    let mut updated = 0;

    for result in results {
        let Some(index) = result.id.and_then(|id| usize::try_from(id).ok()) else {
            continue;
        };

        let Some(&position) = positions.get(index) else {
            debug!(index, "result index outside batch, skipping");
            continue;
        };

        if filled[index] {
            continue;
        }

        let Some(segment) = segments.get_mut(position) else {
            continue;
        };

        *segment.route_location_mut() = Some(result);
        filled[index] = true;
        updated += 1;
    }

    updated
}

/// Format a date the way the ELC expects `referenceDate` (`M/D/YYYY`).
pub fn reference_date_param(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Form body for a `Find Route Locations` request.
pub fn build_form(
    requests: &[RouteLocationRequest],
    reference_date: NaiveDate,
) -> Result<Form, ClientError> {
    let locations =
        serde_json::to_string(requests).map_err(|e| ClientError::EncodeFailed(e.to_string()))?;

    Ok(vec![
        ("locations", locations),
        ("f", "json".to_string()),
        ("outSR", OUTPUT_WKID.to_string()),
        ("referenceDate", reference_date_param(reference_date)),
    ])
}
