//! RoadNetwork - immutable container for road segments and their indices
//!
//! A network is built once from a list of segments and never mutated
//! afterwards, so it can be shared freely between threads answering
//! independent queries.

use crate::graph::RoadGraph;
use crate::index::VertexIndex;
use crate::{GeoPoint, NetworkError, Result, RoadSegment, SegmentId, utils};

use geo::{BoundingRect, MultiPoint, Point, Rect};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the estimator walks from the start snap to the end snap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TraversalStrategy {
    /// Greedy segment-by-segment walk, first touching segment wins
    #[default]
    SegmentWalk,
    /// Breadth-first search over the vertex adjacency graph
    ShortestHops,
}

/// Configuration for path estimation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EstimatorConfig {
    /// Coordinate-equality tolerance in degrees, shared by every point comparison.
    /// Default: 1e-4 (about 11 m)
    pub tolerance: f64,
    /// Traversal strategy. Default: [`TraversalStrategy::SegmentWalk`]
    pub strategy: TraversalStrategy,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            tolerance: utils::DEFAULT_TOLERANCE_DEG,
            strategy: TraversalStrategy::SegmentWalk,
        }
    }
}

impl EstimatorConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(NetworkError::InvalidConfig(format!(
                "tolerance must be a positive finite number of degrees, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Summary statistics about a network
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkInfo {
    /// Number of segments, including empty ones
    pub segment_count: usize,
    /// Number of vertices across all segments
    pub vertex_count: usize,
    /// Sum of segment lengths in kilometers
    pub total_length_km: f64,
    /// Bounding box in WGS84 (x = longitude, y = latitude), `None` when empty
    pub bounding_box: Option<Rect<f64>>,
}

/// A fixed road network with precomputed lookup structures
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    /// Segments in iteration order
    segments: Vec<RoadSegment>,
    /// Configuration settings
    config: EstimatorConfig,
    /// Grid from cells to the segments touching them
    index: VertexIndex,
    /// Vertex adjacency graph for the breadth-first strategy
    graph: RoadGraph,
    /// Cached statistics (computed once)
    info: NetworkInfo,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl RoadNetwork {
    /// Create a network with the default configuration
    pub fn new(segments: Vec<RoadSegment>) -> Self {
        Self::build(segments, EstimatorConfig::default())
    }

    /// Create a network with a custom configuration
    pub fn with_config(segments: Vec<RoadSegment>, config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(segments, config))
    }

    fn build(segments: Vec<RoadSegment>, config: EstimatorConfig) -> Self {
        #[cfg(feature = "profiling")]
        profiling::scope!("network::build");

        for (id, segment) in segments.iter().enumerate() {
            if segment.is_empty() {
                tracing::warn!("Road segment {id} has no vertices and will be skipped");
            }
        }

        let index = VertexIndex::build(&segments, config.tolerance);
        let graph = RoadGraph::build(&segments, config.tolerance);
        let info = Self::compute_info(&segments);

        tracing::debug!(
            "Built road network: {} segments, {} vertices, {} graph nodes",
            info.segment_count,
            info.vertex_count,
            graph.node_count()
        );

        Self {
            segments,
            config,
            index,
            graph,
            info,
        }
    }

    fn compute_info(segments: &[RoadSegment]) -> NetworkInfo {
        let points: Vec<Point<f64>> = segments
            .iter()
            .flat_map(|s| s.points.iter().map(|&p| Point::from(p)))
            .collect();

        NetworkInfo {
            segment_count: segments.len(),
            vertex_count: points.len(),
            total_length_km: segments.iter().map(RoadSegment::length_km).sum(),
            bounding_box: MultiPoint::new(points).bounding_rect(),
        }
    }

    /// All segments in iteration order
    #[inline]
    pub fn segments(&self) -> &[RoadSegment] {
        &self.segments
    }

    /// Get a segment by id
    #[inline]
    pub fn segment(&self, id: SegmentId) -> Option<&RoadSegment> {
        self.segments.get(id)
    }

    /// Every vertex in segment-then-point order, with its owning segment
    pub fn vertices(&self) -> impl Iterator<Item = (SegmentId, GeoPoint)> + '_ {
        self.segments
            .iter()
            .enumerate()
            .flat_map(|(id, s)| s.points.iter().map(move |&p| (id, p)))
    }

    #[inline]
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.config.tolerance
    }

    /// Get network statistics
    ///
    /// This is O(1) as all values are cached.
    #[inline]
    pub fn info(&self) -> &NetworkInfo {
        &self.info
    }

    /// Number of segments, including empty ones
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when there is no vertex to snap to
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.info.vertex_count == 0
    }

    /// Number of segments that have at least one vertex
    pub fn non_empty_segment_count(&self) -> usize {
        self.segments.iter().filter(|s| !s.is_empty()).count()
    }

    #[inline]
    pub(crate) fn index(&self) -> &VertexIndex {
        &self.index
    }

    #[inline]
    pub(crate) fn graph(&self) -> &RoadGraph {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_segment_network() -> RoadNetwork {
        RoadNetwork::new(vec![
            RoadSegment::from_coords(&[(28.60, 77.20), (28.61, 77.21)], 30),
            RoadSegment::from_coords(&[(28.61, 77.21), (28.62, 77.22)], 80),
        ])
    }

    #[test]
    fn test_config_default() {
        let config = EstimatorConfig::default();
        assert_eq!(config.tolerance, 1e-4);
        assert_eq!(config.strategy, TraversalStrategy::SegmentWalk);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        for tolerance in [0.0, -1e-4, f64::NAN, f64::INFINITY] {
            let config = EstimatorConfig {
                tolerance,
                ..Default::default()
            };
            assert!(matches!(
                RoadNetwork::with_config(Vec::new(), config),
                Err(NetworkError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_info() {
        let network = two_segment_network();
        let info = network.info();
        assert_eq!(info.segment_count, 2);
        assert_eq!(info.vertex_count, 4);
        assert!(info.total_length_km > 2.0 && info.total_length_km < 4.0);

        let bbox = info.bounding_box.unwrap();
        assert!((bbox.min().y - 28.60).abs() < 1e-12);
        assert!((bbox.max().x - 77.22).abs() < 1e-12);
    }

    #[test]
    fn test_empty_network() {
        let network = RoadNetwork::new(Vec::new());
        assert!(network.is_empty());
        assert_eq!(network.len(), 0);
        assert!(network.info().bounding_box.is_none());

        // Segments without vertices still count as nothing to snap to
        let network = RoadNetwork::new(vec![RoadSegment::new(Vec::new(), 50)]);
        assert!(network.is_empty());
        assert_eq!(network.len(), 1);
        assert_eq!(network.non_empty_segment_count(), 0);
    }

    #[test]
    fn test_vertices_order() {
        let network = two_segment_network();
        let ids: Vec<SegmentId> = network.vertices().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![0, 0, 1, 1]);
        assert_eq!(
            network.vertices().nth(2).map(|(_, p)| p),
            Some(GeoPoint::new(28.61, 77.21))
        );
    }

    #[test]
    fn test_network_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RoadNetwork>();
    }
}
