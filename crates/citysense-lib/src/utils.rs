//! Utility functions for geodesic distances and presentation rounding

use crate::GeoPoint;

/// Mean Earth radius in kilometers used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default coordinate-equality tolerance in degrees (about 11 m)
pub const DEFAULT_TOLERANCE_DEG: f64 = 1e-4;

/// Great-circle distance between two points in kilometers (haversine)
#[inline(always)]
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let delta_lat = (b.lat() - a.lat()).to_radians();
    let delta_lng = (b.lng() - a.lng()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Squared Euclidean distance in raw coordinate space
///
/// Cheap stand-in for geodesic distance when only an ordering is needed
/// over a small region.
#[inline(always)]
pub fn squared_coordinate_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = a.lat() - b.lat();
    let d_lng = a.lng() - b.lng();
    d_lat * d_lat + d_lng * d_lng
}

/// Round a distance to two decimals for display
#[inline]
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// Format a distance as a `"x.xx km"` label
pub fn format_km(km: f64) -> String {
    format!("{km:.2} km")
}
