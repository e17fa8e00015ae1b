//! CitySense Library - Road-Network Distance Estimation
//!
//! This library snaps arbitrary map locations onto a fixed road network,
//! infers a path between two snapped vertices and measures it along the
//! great circle. It also carries the demo data and synthetic sensor
//! readings the CitySense dashboard draws as map layers.
//!
//! # Architecture
//!
//! - **[`RoadNetwork`]**: Immutable segment collection with a vertex grid and adjacency graph
//! - **[`snap_to_network`]**: Nearest-vertex snap (squared coordinate distance, first wins ties)
//! - **[`estimate_path`]**: Segment walk or breadth-first search, straight-line closure on failure
//! - **[`path_distance_km`]**: Haversine accumulation over a path
//! - **[`MeasureSession`]**: Two-click measuring state on top of the estimator
//!
//! # Example
//! ```ignore
//! let network = RoadNetwork::delhi();
//! let m = network.measure(PathQuery::new(click_a, click_b))?;
//! println!("{}", m.label());
//! ```

pub mod demo;
mod distance;
mod graph;
mod index;
mod measure;
mod network;
mod point;
mod segment;
pub mod sensors;
mod snap;
mod traversal;
pub mod utils;

// Public API exports
pub use distance::path_distance_km;
pub use measure::{MeasureSession, Measurement, PathQuery, estimate_many};
pub use network::{EstimatorConfig, NetworkInfo, RoadNetwork, TraversalStrategy};
pub use point::GeoPoint;
pub use segment::{HygieneLevel, RoadSegment, SegmentId};
pub use snap::snap_to_network;
pub use traversal::{PathResult, TraversalState, estimate_path};

/// Error types for network operations
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("No road network available to snap to")]
    NoNetworkAvailable,

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
