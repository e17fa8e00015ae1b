//! Path estimation between two snapped network vertices
//!
//! The default strategy walks the network one segment at a time:
//!
//! 1. Start with `path = [start]` and `current = start`.
//! 2. Take the lowest-id unconsumed segment with a vertex within tolerance of
//!    `current`, mark it consumed and append each of its vertices not yet in
//!    the path. `current` becomes the last appended vertex.
//! 3. Stop in `Found` once the consumed segment contains the end vertex, or
//!    in `Exhausted` when no unconsumed segment touches `current`.
//!
//! An exhausted walk is closed with a straight line to the end vertex, so the
//! caller always gets a path back.

use crate::{GeoPoint, RoadNetwork, TraversalStrategy, distance};
use fixedbitset::FixedBitSet;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// State of a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TraversalState {
    Searching,
    /// The path reaches the end vertex along the network
    Found,
    /// No further progress was possible; the path ends in a straight-line closure
    Exhausted,
}

/// Estimated path between two network vertices
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathResult {
    /// Ordered vertices, starting at the start vertex
    pub points: Vec<GeoPoint>,
    /// Terminal state of the traversal
    pub state: TraversalState,
    /// Number of segments the traversal ran along
    pub segments_consumed: usize,
}

impl PathResult {
    /// True when the path follows the network all the way to the end vertex
    #[inline]
    pub fn is_connected(&self) -> bool {
        self.state == TraversalState::Found
    }

    /// Great-circle length of the path in kilometers
    pub fn distance_km(&self) -> f64 {
        distance::path_distance_km(&self.points)
    }

    /// Straight-line fallback path
    fn closure(start: GeoPoint, end: GeoPoint) -> Self {
        Self {
            points: vec![start, end],
            state: TraversalState::Exhausted,
            segments_consumed: 0,
        }
    }
}

/// Estimate a path from `start` to `end` through `network`
///
/// Both points are expected to be network vertices, normally the output of
/// [`crate::snap_to_network`]. Never fails: a broken chain yields a path
/// ending in a straight-line closure with state [`TraversalState::Exhausted`].
pub fn estimate_path(start: GeoPoint, end: GeoPoint, network: &RoadNetwork) -> PathResult {
    #[cfg(feature = "profiling")]
    profiling::scope!("traversal::estimate_path");

    let result = match network.config().strategy {
        TraversalStrategy::SegmentWalk => SegmentWalk::new(start, end, network).run(),
        TraversalStrategy::ShortestHops => shortest_hops(start, end, network),
    };

    tracing::debug!(
        "Path {start} -> {end}: {:?} after {} segments, {} points",
        result.state,
        result.segments_consumed,
        result.points.len()
    );

    result
}

/// Working state of the greedy segment walk
struct SegmentWalk<'a> {
    network: &'a RoadNetwork,
    end: GeoPoint,
    tolerance: f64,
    path: Vec<GeoPoint>,
    consumed: FixedBitSet,
    current: GeoPoint,
    state: TraversalState,
    /// Segments left to consume; bounds the number of steps
    remaining: usize,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl<'a> SegmentWalk<'a> {
    fn new(start: GeoPoint, end: GeoPoint, network: &'a RoadNetwork) -> Self {
        Self {
            network,
            end,
            tolerance: network.tolerance(),
            path: vec![start],
            consumed: FixedBitSet::with_capacity(network.len()),
            current: start,
            state: TraversalState::Searching,
            remaining: network.non_empty_segment_count(),
        }
    }

    fn run(mut self) -> PathResult {
        while self.state == TraversalState::Searching {
            self.step();
        }

        if self.state == TraversalState::Exhausted {
            self.path.push(self.end);
        }

        PathResult {
            points: self.path,
            state: self.state,
            segments_consumed: self.consumed.count_ones(..),
        }
    }

    fn step(&mut self) {
        if self.remaining == 0 {
            self.state = TraversalState::Exhausted;
            return;
        }

        let segments = self.network.segments();
        let Some(id) = self.network.index().first_unconsumed(
            &self.current,
            segments,
            &self.consumed,
            self.tolerance,
        ) else {
            self.state = TraversalState::Exhausted;
            return;
        };

        self.consumed.insert(id);
        self.remaining -= 1;

        let mut reached_end = false;
        for &vertex in &segments[id].points {
            if vertex.approx_eq(&self.end, self.tolerance) {
                reached_end = true;
            }
            if !self.in_path(&vertex) {
                self.path.push(vertex);
                self.current = vertex;
            }
        }

        if reached_end {
            self.state = TraversalState::Found;
        }
    }

    fn in_path(&self, vertex: &GeoPoint) -> bool {
        self.path
            .iter()
            .any(|p| p.approx_eq(vertex, self.tolerance))
    }
}

fn shortest_hops(start: GeoPoint, end: GeoPoint, network: &RoadNetwork) -> PathResult {
    match network.graph().shortest_hops(&start, &end) {
        Some(hops) => {
            let mut points = hops.points;
            // Report the caller's endpoints exactly, not their merged representatives
            if let Some(last) = points.last_mut() {
                *last = end;
            }
            if let Some(first) = points.first_mut() {
                *first = start;
            }
            PathResult {
                points,
                state: TraversalState::Found,
                segments_consumed: hops.segments,
            }
        }
        None => PathResult::closure(start, end),
    }
}
