//! Vertex adjacency graph for breadth-first path search
//!
//! Vertices that are equal within tolerance collapse into one graph node.
//! Consecutive vertices of a segment are joined by an edge carrying the
//! segment id.

use crate::index::{CellKey, cell_of, neighbourhood};
use crate::{GeoPoint, RoadSegment, SegmentId};
use petgraph::graph::{NodeIndex, UnGraph};
use smallvec::SmallVec;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone)]
pub(crate) struct RoadGraph {
    graph: UnGraph<GeoPoint, SegmentId>,
    /// Graph nodes per grid cell, for tolerance lookups
    cells: HashMap<CellKey, SmallVec<[NodeIndex; 2]>>,
    tolerance: f64,
}

/// Vertex path found by [`RoadGraph::shortest_hops`]
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HopPath {
    pub(crate) points: Vec<GeoPoint>,
    /// Distinct segments the path runs along
    pub(crate) segments: usize,
}

impl RoadGraph {
    pub(crate) fn build(segments: &[RoadSegment], tolerance: f64) -> Self {
        let mut graph = Self {
            graph: UnGraph::default(),
            cells: HashMap::new(),
            tolerance,
        };

        for (id, segment) in segments.iter().enumerate() {
            let mut previous: Option<NodeIndex> = None;
            for point in &segment.points {
                let node = graph.node_for(*point);
                match previous {
                    Some(prev) if prev != node => {
                        graph.graph.update_edge(prev, node, id);
                    }
                    _ => {}
                }
                previous = Some(node);
            }
        }

        graph
    }

    /// Existing node within tolerance of `point`, or a new one
    fn node_for(&mut self, point: GeoPoint) -> NodeIndex {
        if let Some(node) = self.locate(&point) {
            return node;
        }
        let node = self.graph.add_node(point);
        self.cells
            .entry(cell_of(&point, self.tolerance))
            .or_default()
            .push(node);
        node
    }

    /// Lowest-index node within tolerance of `point`
    pub(crate) fn locate(&self, point: &GeoPoint) -> Option<NodeIndex> {
        neighbourhood(point, self.tolerance)
            .filter_map(|key| self.cells.get(&key))
            .flatten()
            .copied()
            .filter(|&node| self.graph[node].approx_eq(point, self.tolerance))
            .min()
    }

    pub(crate) fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Fewest-hop vertex path from `start` to `end`
    ///
    /// Neighbours are expanded in ascending node order, so among equally
    /// short paths the one through earlier-seen vertices wins. Returns `None`
    /// when either endpoint is off the graph or the two lie on disconnected
    /// components.
    pub(crate) fn shortest_hops(&self, start: &GeoPoint, end: &GeoPoint) -> Option<HopPath> {
        let source = self.locate(start)?;
        let target = self.locate(end)?;

        let mut predecessor: Vec<Option<NodeIndex>> = vec![None; self.graph.node_count()];
        let mut visited = vec![false; self.graph.node_count()];
        let mut queue = VecDeque::from([source]);
        visited[source.index()] = true;

        while let Some(node) = queue.pop_front() {
            if node == target {
                break;
            }
            let mut next: SmallVec<[NodeIndex; 8]> = self.graph.neighbors(node).collect();
            next.sort_unstable();
            for neighbour in next {
                if !visited[neighbour.index()] {
                    visited[neighbour.index()] = true;
                    predecessor[neighbour.index()] = Some(node);
                    queue.push_back(neighbour);
                }
            }
        }

        if !visited[target.index()] {
            return None;
        }

        let mut nodes = vec![target];
        let mut cursor = target;
        while let Some(prev) = predecessor[cursor.index()] {
            nodes.push(prev);
            cursor = prev;
        }
        nodes.reverse();

        let mut segment_ids: SmallVec<[SegmentId; 8]> = nodes
            .windows(2)
            .filter_map(|pair| self.graph.find_edge(pair[0], pair[1]))
            .map(|edge| self.graph[edge])
            .collect();
        segment_ids.sort_unstable();
        segment_ids.dedup();

        Some(HopPath {
            points: nodes.into_iter().map(|n| self.graph[n]).collect(),
            segments: segment_ids.len(),
        })
    }
}
