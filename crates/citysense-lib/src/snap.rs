//! Nearest-vertex snapping

use crate::{GeoPoint, NetworkError, Result, RoadNetwork, utils};

/// Snap `point` to the closest vertex of `network`
///
/// Closeness is squared Euclidean distance in coordinate space, not
/// geodesic distance. Vertices are visited segment by segment in order and
/// only a strictly smaller distance replaces the current best, so the first
/// vertex wins ties. The returned point is always an exact network vertex.
///
/// # Errors
/// [`NetworkError::NoNetworkAvailable`] when the network has no vertices.
pub fn snap_to_network(point: GeoPoint, network: &RoadNetwork) -> Result<GeoPoint> {
    let mut nearest: Option<(f64, GeoPoint)> = None;

    for (_, vertex) in network.vertices() {
        let d = utils::squared_coordinate_distance(point, vertex);
        // Malformed vertices (NaN or infinite coordinates) are skipped
        if !d.is_finite() {
            continue;
        }
        match nearest {
            Some((best, _)) if d < best => nearest = Some((d, vertex)),
            Some(_) => {}
            None => nearest = Some((d, vertex)),
        }
    }

    nearest
        .map(|(_, vertex)| vertex)
        .ok_or(NetworkError::NoNetworkAvailable)
}

impl RoadNetwork {
    /// Snap `point` to this network, see [`snap_to_network`]
    pub fn snap(&self, point: GeoPoint) -> Result<GeoPoint> {
        snap_to_network(point, self)
    }
}
