//! Uniform grid over network vertices
//!
//! Cells are `tolerance` degrees wide, so two points that are equal within
//! tolerance on both axes always fall in the same or an adjacent cell. A
//! lookup therefore only has to inspect the 3x3 neighbourhood of a point and
//! confirm each candidate with the exact tolerance test.

use crate::{GeoPoint, RoadSegment, SegmentId};
use fixedbitset::FixedBitSet;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Integer cell coordinates (latitude row, longitude column)
pub(crate) type CellKey = (i64, i64);

#[inline]
pub(crate) fn cell_of(point: &GeoPoint, cell_size: f64) -> CellKey {
    (
        (point.lat() / cell_size).floor() as i64,
        (point.lng() / cell_size).floor() as i64,
    )
}

/// The cell of `point` and its eight neighbours
#[inline]
pub(crate) fn neighbourhood(point: &GeoPoint, cell_size: f64) -> impl Iterator<Item = CellKey> {
    let (row, col) = cell_of(point, cell_size);
    (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| (row + dr, col + dc)))
}

/// Maps grid cells to the segments owning a vertex inside them
#[derive(Debug, Clone)]
pub(crate) struct VertexIndex {
    cell_size: f64,
    /// Segment ids per cell, ascending and without duplicates
    cells: HashMap<CellKey, SmallVec<[SegmentId; 4]>>,
}

impl VertexIndex {
    pub(crate) fn build(segments: &[RoadSegment], cell_size: f64) -> Self {
        let mut cells: HashMap<CellKey, SmallVec<[SegmentId; 4]>> = HashMap::new();

        for (id, segment) in segments.iter().enumerate() {
            for point in &segment.points {
                let ids = cells.entry(cell_of(point, cell_size)).or_default();
                // Segments are visited in id order, so a repeat can only be the last entry
                if ids.last() != Some(&id) {
                    ids.push(id);
                }
            }
        }

        Self { cell_size, cells }
    }

    /// Lowest-id segment not in `consumed` with a vertex within `tolerance` of `point`
    ///
    /// Equivalent to scanning every segment in order and stopping at the first
    /// match, without touching segments far from `point`.
    pub(crate) fn first_unconsumed(
        &self,
        point: &GeoPoint,
        segments: &[RoadSegment],
        consumed: &FixedBitSet,
        tolerance: f64,
    ) -> Option<SegmentId> {
        let mut best: Option<SegmentId> = None;

        for key in neighbourhood(point, self.cell_size) {
            let Some(ids) = self.cells.get(&key) else {
                continue;
            };
            for &id in ids {
                if best.is_some_and(|b| id >= b) {
                    break;
                }
                if consumed.contains(id) {
                    continue;
                }
                if segments[id].touches(point, tolerance) {
                    best = Some(id);
                    break;
                }
            }
        }

        best
    }

    /// Number of occupied cells
    #[cfg(test)]
    pub(crate) fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
