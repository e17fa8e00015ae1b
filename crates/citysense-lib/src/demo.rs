//! Built-in Delhi demo data: road network and water-logging risk areas

use crate::{GeoPoint, RoadNetwork, RoadSegment};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Map centre used by the dashboard
pub const DELHI_CENTER: GeoPoint = GeoPoint::new(28.6139, 77.2090);

/// Rectangular lat/lng bounds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.south..=self.north).contains(&point.lat())
            && (self.west..=self.east).contains(&point.lng())
    }
}

/// Area covered by synthetic sensor readings
pub const DELHI_BOUNDS: Bounds = Bounds {
    north: 28.88,
    south: 28.40,
    east: 77.35,
    west: 76.85,
};

/// A circular zone at risk of water logging
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WaterLoggingArea {
    pub center: GeoPoint,
    /// Radius in meters
    pub radius_m: f64,
    /// Risk in percent
    pub severity: u8,
}

const WATER_LOGGING: [(f64, f64, f64, u8); 15] = [
    (28.6139, 77.2090, 600.0, 85),
    (28.6250, 77.1950, 550.0, 70),
    (28.5950, 77.2250, 650.0, 90),
    (28.6350, 77.2300, 500.0, 60),
    (28.5900, 77.1900, 700.0, 95),
    (28.6280, 77.2180, 620.0, 80),
    (28.6050, 77.2350, 580.0, 75),
    (28.6450, 77.2000, 640.0, 88),
    (28.6000, 77.2050, 530.0, 65),
    (28.6300, 77.2450, 670.0, 92),
    (28.5850, 77.2150, 590.0, 78),
    (28.6200, 77.1850, 610.0, 83),
    (28.6380, 77.2100, 560.0, 72),
    (28.5950, 77.2450, 680.0, 87),
    (28.6100, 77.1800, 630.0, 91),
];

/// The fixed water-logging risk areas
pub fn water_logging_areas() -> Vec<WaterLoggingArea> {
    WATER_LOGGING
        .iter()
        .map(|&(lat, lng, radius_m, severity)| WaterLoggingArea {
            center: GeoPoint::new(lat, lng),
            radius_m,
            severity,
        })
        .collect()
}

type SegmentRow = ([(f64, f64); 3], u8);

const DELHI_ROADS: [SegmentRow; 40] = [
    // North-south corridor
    ([(28.6139, 77.2090), (28.6189, 77.2140), (28.6239, 77.2190)], 20),
    ([(28.6239, 77.2190), (28.6289, 77.2240), (28.6339, 77.2290)], 45),
    ([(28.6339, 77.2290), (28.6389, 77.2340), (28.6439, 77.2390)], 30),
    ([(28.6050, 77.2050), (28.6100, 77.2100), (28.6150, 77.2150)], 50),
    ([(28.6150, 77.2150), (28.6200, 77.2200), (28.6250, 77.2250)], 65),
    ([(28.6100, 77.2000), (28.6150, 77.2050), (28.6200, 77.2100)], 70),
    ([(28.6200, 77.2100), (28.6250, 77.2150), (28.6300, 77.2200)], 35),
    ([(28.6300, 77.2200), (28.6350, 77.2250), (28.6400, 77.2300)], 85),
    ([(28.6050, 77.2150), (28.6100, 77.2200), (28.6150, 77.2250)], 55),
    ([(28.6400, 77.2350), (28.6450, 77.2400), (28.6500, 77.2450)], 25),
    // East-west connections
    ([(28.6189, 77.2140), (28.6139, 77.2190), (28.6089, 77.2240)], 85),
    ([(28.6289, 77.2240), (28.6239, 77.2290), (28.6189, 77.2340)], 75),
    ([(28.6389, 77.2340), (28.6339, 77.2390), (28.6289, 77.2440)], 60),
    ([(28.6150, 77.2050), (28.6100, 77.2100), (28.6050, 77.2150)], 40),
    ([(28.6250, 77.2150), (28.6200, 77.2200), (28.6150, 77.2250)], 90),
    ([(28.6350, 77.2250), (28.6300, 77.2300), (28.6250, 77.2350)], 50),
    ([(28.6100, 77.2200), (28.6050, 77.2250), (28.6000, 77.2300)], 80),
    ([(28.6200, 77.2300), (28.6150, 77.2350), (28.6100, 77.2400)], 30),
    ([(28.6400, 77.2400), (28.6350, 77.2450), (28.6300, 77.2500)], 45),
    ([(28.6300, 77.2100), (28.6250, 77.2150), (28.6200, 77.2200)], 95),
    // Diagonals
    ([(28.6139, 77.2190), (28.6189, 77.2240), (28.6239, 77.2290)], 90),
    ([(28.6239, 77.2290), (28.6289, 77.2340), (28.6339, 77.2390)], 40),
    ([(28.6089, 77.2240), (28.6139, 77.2290), (28.6189, 77.2340)], 70),
    ([(28.6050, 77.2100), (28.6100, 77.2150), (28.6150, 77.2200)], 55),
    ([(28.6350, 77.2300), (28.6400, 77.2350), (28.6450, 77.2400)], 25),
    ([(28.6150, 77.2050), (28.6200, 77.2100), (28.6250, 77.2150)], 60),
    ([(28.6250, 77.2200), (28.6300, 77.2250), (28.6350, 77.2300)], 85),
    ([(28.6100, 77.2250), (28.6150, 77.2300), (28.6200, 77.2350)], 35),
    ([(28.6300, 77.2350), (28.6350, 77.2400), (28.6400, 77.2450)], 75),
    ([(28.6050, 77.2150), (28.6100, 77.2200), (28.6150, 77.2250)], 45),
    // Cross connections
    ([(28.6150, 77.2200), (28.6200, 77.2250), (28.6250, 77.2300)], 95),
    ([(28.6250, 77.2300), (28.6300, 77.2350), (28.6350, 77.2400)], 40),
    ([(28.6100, 77.2250), (28.6150, 77.2300), (28.6200, 77.2350)], 75),
    ([(28.6200, 77.2100), (28.6250, 77.2150), (28.6300, 77.2200)], 60),
    ([(28.6300, 77.2250), (28.6350, 77.2300), (28.6400, 77.2350)], 50),
    // Periphery
    ([(28.6100, 77.2100), (28.6150, 77.2150), (28.6200, 77.2200)], 65),
    ([(28.6400, 77.2400), (28.6350, 77.2450), (28.6300, 77.2500)], 30),
    ([(28.6000, 77.2050), (28.6050, 77.2100), (28.6100, 77.2150)], 80),
    ([(28.6450, 77.2300), (28.6500, 77.2350), (28.6550, 77.2400)], 20),
    ([(28.6050, 77.2350), (28.6100, 77.2400), (28.6150, 77.2450)], 70),
];

/// The 40 built-in Delhi road segments, in dashboard order
pub fn delhi_road_segments() -> Vec<RoadSegment> {
    DELHI_ROADS
        .iter()
        .map(|(coords, hygiene)| RoadSegment::from_coords(coords, *hygiene))
        .collect()
}

impl RoadNetwork {
    /// Network over the built-in Delhi road segments, default configuration
    pub fn delhi() -> Self {
        RoadNetwork::new(delhi_road_segments())
    }
}
