//! Synthetic urban sensor readings
//!
//! Readings are drawn uniformly inside the city bounds. The air quality
//! index gets a boost near the centre and in two fixed hot-spot quadrants,
//! which is what gives the dashboard heatmap its shape.

use crate::GeoPoint;
use crate::demo::{Bounds, DELHI_BOUNDS, DELHI_CENTER};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest AQI value a reading can carry
pub const MAX_AQI: u16 = 500;

/// Readings closer than this (in degrees) to the centre get the central boost
const CENTER_RADIUS_DEG: f64 = 0.05;

/// One synthetic sensor reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorReading {
    pub location: GeoPoint,
    /// Air quality index
    pub aqi: u16,
    /// Road hygiene score (0-100)
    pub hygiene: u8,
}

/// Legend band of an AQI value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AqiBand {
    Good,
    Moderate,
    Unhealthy,
    Hazardous,
}

impl AqiBand {
    pub fn from_aqi(aqi: u16) -> Self {
        match aqi {
            0..=100 => AqiBand::Good,
            101..=200 => AqiBand::Moderate,
            201..=300 => AqiBand::Unhealthy,
            _ => AqiBand::Hazardous,
        }
    }
}

impl SensorReading {
    /// Heatmap weight, see [`heat_intensity`]
    pub fn intensity(&self) -> f64 {
        heat_intensity(self.aqi)
    }

    pub fn band(&self) -> AqiBand {
        AqiBand::from_aqi(self.aqi)
    }
}

/// Log-scaled heatmap weight of an AQI value, clamped to `[0.1, 1.0]`
pub fn heat_intensity(aqi: u16) -> f64 {
    let log_intensity = f64::from(aqi.max(1)).ln() / f64::from(MAX_AQI).ln();
    log_intensity.clamp(0.1, 1.0)
}

/// Apply the location-dependent AQI boost to a base value
pub fn boosted_aqi(base: u16, location: &GeoPoint) -> u16 {
    let d_lat = location.lat() - DELHI_CENTER.lat();
    let d_lng = location.lng() - DELHI_CENTER.lng();
    let from_center = (d_lat * d_lat + d_lng * d_lng).sqrt();

    if from_center < CENTER_RADIUS_DEG {
        base.saturating_add(200).min(MAX_AQI)
    } else if location.lat() > 28.65 && location.lng() > 77.25 {
        base.saturating_add(150).min(450)
    } else if location.lat() < 28.50 && location.lng() < 77.10 {
        base.saturating_add(175).min(475)
    } else {
        base
    }
}

/// Seedable generator of synthetic readings
#[derive(Debug, Clone)]
pub struct SensorGenerator {
    bounds: Bounds,
    rng: StdRng,
}

impl SensorGenerator {
    /// Generator over the Delhi bounds with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            bounds: DELHI_BOUNDS,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator over the Delhi bounds seeded from the OS
    pub fn from_entropy() -> Self {
        Self {
            bounds: DELHI_BOUNDS,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Draw a single reading
    pub fn reading(&mut self) -> SensorReading {
        let Bounds {
            north,
            south,
            east,
            west,
        } = self.bounds;
        let lat = south + self.rng.r#gen::<f64>() * (north - south);
        let lng = west + self.rng.r#gen::<f64>() * (east - west);
        let location = GeoPoint::new(lat, lng);

        let base = self.rng.gen_range(50..250);
        let hygiene = self.rng.gen_range(20..100);

        SensorReading {
            location,
            aqi: boosted_aqi(base, &location),
            hygiene,
        }
    }

    /// Draw `count` readings
    pub fn generate(&mut self, count: usize) -> Vec<SensorReading> {
        let readings: Vec<SensorReading> = (0..count).map(|_| self.reading()).collect();
        tracing::debug!("Generated {} synthetic sensor readings", readings.len());
        readings
    }
}
