//! Geographic point type
//!
//! `GeoPoint` is the coordinate currency of the crate. It is stored as
//! latitude/longitude in degrees and converts to and from `geo` types
//! (x = longitude, y = latitude) at the edges.

use crate::{NetworkError, Result, utils};
use geo::{Coord, Point};
use std::fmt;
use std::str::FromStr;

/// An immutable latitude/longitude pair in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(f64, f64)", into = "(f64, f64)")
)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Create a point without validation
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Create a point, rejecting non-finite coordinates
    pub fn try_new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(NetworkError::InvalidCoordinate(format!(
                "non-finite coordinate ({lat}, {lng})"
            )));
        }
        Ok(Self { lat, lng })
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Per-axis equality within `tolerance` degrees
    #[inline]
    pub fn approx_eq(&self, other: &GeoPoint, tolerance: f64) -> bool {
        (self.lat - other.lat).abs() < tolerance && (self.lng - other.lng).abs() < tolerance
    }

    /// Great-circle distance to `other` in kilometers
    #[inline]
    pub fn haversine_km(&self, other: &GeoPoint) -> f64 {
        utils::haversine_km(*self, *other)
    }

    /// Arithmetic midpoint in coordinate space
    pub fn midpoint(&self, other: &GeoPoint) -> GeoPoint {
        GeoPoint::new((self.lat + other.lat) / 2.0, (self.lng + other.lng) / 2.0)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

/// Parses `"lat,lng"`
impl FromStr for GeoPoint {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s.split_once(',').ok_or_else(|| {
            NetworkError::InvalidCoordinate(format!("expected LAT,LNG but got '{s}'"))
        })?;
        let parse = |value: &str| {
            value.trim().parse::<f64>().map_err(|e| {
                NetworkError::InvalidCoordinate(format!("'{}': {e}", value.trim()))
            })
        };
        GeoPoint::try_new(parse(lat)?, parse(lng)?)
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = NetworkError;

    fn try_from((lat, lng): (f64, f64)) -> Result<Self> {
        GeoPoint::try_new(lat, lng)
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.lat, point.lng)
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Point::new(point.lng, point.lat)
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        Coord {
            x: point.lng,
            y: point.lat,
        }
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(point: Point<f64>) -> Self {
        GeoPoint::new(point.y(), point.x())
    }
}
