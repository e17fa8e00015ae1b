//! Road segment structures

use crate::{GeoPoint, distance};

/// Position of a segment inside its network, in iteration order
pub type SegmentId = usize;

/// One road stretch: an ordered vertex chain plus its hygiene score
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadSegment {
    /// Ordered vertices of the road stretch
    pub points: Vec<GeoPoint>,
    /// Road hygiene score (0-100), not used by path estimation
    pub hygiene: u8,
}

/// Display class for a hygiene score
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HygieneLevel {
    Poor,
    Fair,
    Good,
}

impl HygieneLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..40 => HygieneLevel::Poor,
            40..70 => HygieneLevel::Fair,
            _ => HygieneLevel::Good,
        }
    }

    /// Map layer colour used by the dashboard
    pub fn color(&self) -> &'static str {
        match self {
            HygieneLevel::Poor => "#ff0000",
            HygieneLevel::Fair => "#ffa500",
            HygieneLevel::Good => "#00ff00",
        }
    }
}

impl RoadSegment {
    pub fn new(points: Vec<GeoPoint>, hygiene: u8) -> Self {
        Self { points, hygiene }
    }

    /// Build a segment from `(lat, lng)` pairs
    pub fn from_coords(coords: &[(f64, f64)], hygiene: u8) -> Self {
        Self {
            points: coords
                .iter()
                .map(|&(lat, lng)| GeoPoint::new(lat, lng))
                .collect(),
            hygiene,
        }
    }

    /// Check if this segment has no vertices
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of vertices
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether any vertex lies within `tolerance` of `point`
    #[inline]
    pub fn touches(&self, point: &GeoPoint, tolerance: f64) -> bool {
        self.points.iter().any(|p| p.approx_eq(point, tolerance))
    }

    pub fn hygiene_level(&self) -> HygieneLevel {
        HygieneLevel::from_score(self.hygiene)
    }

    /// Length along the vertex chain in kilometers
    pub fn length_km(&self) -> f64 {
        distance::path_distance_km(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hygiene_thresholds() {
        assert_eq!(HygieneLevel::from_score(0), HygieneLevel::Poor);
        assert_eq!(HygieneLevel::from_score(39), HygieneLevel::Poor);
        assert_eq!(HygieneLevel::from_score(40), HygieneLevel::Fair);
        assert_eq!(HygieneLevel::from_score(69), HygieneLevel::Fair);
        assert_eq!(HygieneLevel::from_score(70), HygieneLevel::Good);
        assert_eq!(HygieneLevel::from_score(100), HygieneLevel::Good);
    }

    #[test]
    fn test_touches() {
        let segment = RoadSegment::from_coords(&[(28.60, 77.20), (28.61, 77.21)], 50);
        assert!(segment.touches(&GeoPoint::new(28.61, 77.21), 1e-4));
        assert!(segment.touches(&GeoPoint::new(28.61005, 77.20995), 1e-4));
        assert!(!segment.touches(&GeoPoint::new(28.62, 77.22), 1e-4));
    }

    #[test]
    fn test_empty_segment() {
        let segment = RoadSegment::new(Vec::new(), 10);
        assert!(segment.is_empty());
        assert_eq!(segment.len(), 0);
        assert!(!segment.touches(&GeoPoint::new(0.0, 0.0), 1e-4));
        assert_eq!(segment.length_km(), 0.0);
    }

    #[test]
    fn test_length_km() {
        let segment = RoadSegment::from_coords(&[(28.60, 77.20), (28.61, 77.21)], 50);
        let expected = GeoPoint::new(28.60, 77.20).haversine_km(&GeoPoint::new(28.61, 77.21));
        assert!((segment.length_km() - expected).abs() < 1e-12);
    }
}
