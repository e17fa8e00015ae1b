//! Two-click distance measurement
//!
//! A [`MeasureSession`] collects up to two map clicks while measuring is
//! enabled. Once both are present it snaps them to the network, estimates
//! the road path between the snaps and reports the distance.

use crate::{GeoPoint, PathResult, Result, RoadNetwork, estimate_path, snap_to_network, utils};
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two raw query locations
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathQuery {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl PathQuery {
    pub fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Self { start, end }
    }
}

/// Result of measuring between two raw locations
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    /// The raw query
    pub query: PathQuery,
    /// Network vertex nearest to the query start
    pub start_snap: GeoPoint,
    /// Network vertex nearest to the query end
    pub end_snap: GeoPoint,
    /// Estimated road path between the snaps
    pub path: PathResult,
    /// Unrounded path length in kilometers
    pub distance_km: f64,
    /// Where the distance label goes: midpoint of the two raw clicks
    pub label_anchor: GeoPoint,
}

impl Measurement {
    /// Distance rounded to two decimals
    pub fn rounded_km(&self) -> f64 {
        utils::round_km(self.distance_km)
    }

    /// Display label, e.g. `"2.96 km"`
    pub fn label(&self) -> String {
        utils::format_km(self.distance_km)
    }
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl RoadNetwork {
    /// Snap both ends of `query`, estimate the path and measure it
    ///
    /// # Errors
    /// [`crate::NetworkError::NoNetworkAvailable`] when the network is empty.
    pub fn measure(&self, query: PathQuery) -> Result<Measurement> {
        let start_snap = snap_to_network(query.start, self)?;
        let end_snap = snap_to_network(query.end, self)?;
        let path = estimate_path(start_snap, end_snap, self);
        let distance_km = path.distance_km();

        Ok(Measurement {
            query,
            start_snap,
            end_snap,
            path,
            distance_km,
            label_anchor: query.start.midpoint(&query.end),
        })
    }
}

/// Measure a batch of queries in parallel
///
/// Results keep the order of `queries`.
pub fn estimate_many(queries: &[PathQuery], network: &RoadNetwork) -> Vec<Result<Measurement>> {
    #[cfg(feature = "profiling")]
    profiling::scope!("measure::estimate_many");

    queries.par_iter().map(|&q| network.measure(q)).collect()
}

/// Interactive measuring state: a toggle plus up to two selected points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasureSession {
    measuring: bool,
    points: Vec<GeoPoint>,
}

impl MeasureSession {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_measuring(&self) -> bool {
        self.measuring
    }

    /// Points selected so far, in click order
    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Flip measuring on or off; turning it off discards selected points
    pub fn toggle(&mut self) -> bool {
        if self.measuring {
            self.points.clear();
        }
        self.measuring = !self.measuring;
        self.measuring
    }

    /// Register a click. Returns `false` when the click is ignored, either
    /// because measuring is off or two points are already selected.
    pub fn select(&mut self, point: GeoPoint) -> bool {
        if !self.measuring || self.points.len() >= 2 {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Both points are selected
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.points.len() == 2
    }

    /// The pending query, once both points are selected
    pub fn query(&self) -> Option<PathQuery> {
        match self.points.as_slice() {
            [start, end] => Some(PathQuery::new(*start, *end)),
            _ => None,
        }
    }

    /// Measure the selected pair against `network`
    ///
    /// Returns `Ok(None)` until both points are selected.
    pub fn measurement(&self, network: &RoadNetwork) -> Result<Option<Measurement>> {
        self.query().map(|q| network.measure(q)).transpose()
    }
}
