//! Distance accumulation along a path

use crate::{GeoPoint, utils};

/// Sum of great-circle distances between consecutive points, in kilometers
///
/// Paths with fewer than two points have length 0. The result is not
/// rounded; use [`utils::round_km`] for display.
pub fn path_distance_km(path: &[GeoPoint]) -> f64 {
    // `sum` over no legs yields -0.0
    path.windows(2)
        .map(|pair| utils::haversine_km(pair[0], pair[1]))
        .fold(0.0, |total, leg| total + leg)
}
