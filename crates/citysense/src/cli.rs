use citysense_lib::{GeoPoint, TraversalStrategy, utils};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// CitySense - snap, route and measure along a city road network
pub struct Settings {
    /// JSON file with road segments (`[{"points": [[lat, lng], ...], "hygiene": n}]`).
    /// Uses the built-in Delhi network when omitted
    #[clap(short, long, value_name = "FILE", global = true)]
    pub network: Option<PathBuf>,

    /// Coordinate-equality tolerance in degrees
    #[clap(long, default_value_t = utils::DEFAULT_TOLERANCE_DEG, global = true)]
    pub tolerance: f64,

    /// Path traversal strategy
    #[clap(long, value_enum, default_value_t = Strategy::SegmentWalk, global = true)]
    pub strategy: Strategy,

    /// Print machine-readable JSON instead of text
    #[clap(long, default_value = "false", global = true)]
    pub json: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Snap a location to the nearest network vertex
    Snap {
        /// Location as LAT,LNG
        #[clap(allow_hyphen_values = true)]
        point: GeoPoint,
    },

    /// Measure the road distance between two locations
    Measure {
        /// Start location as LAT,LNG
        #[clap(allow_hyphen_values = true)]
        from: GeoPoint,
        /// End location as LAT,LNG
        #[clap(allow_hyphen_values = true)]
        to: GeoPoint,
    },

    /// Show network statistics
    Info,

    /// Generate synthetic sensor readings
    Sensors {
        /// Number of readings
        #[clap(short, long, default_value = "500")]
        count: usize,

        /// RNG seed for reproducible output
        #[clap(short, long)]
        seed: Option<u64>,
    },

    /// List the built-in water-logging risk areas
    WaterLogging,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    SegmentWalk,
    ShortestHops,
}

impl From<Strategy> for TraversalStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::SegmentWalk => TraversalStrategy::SegmentWalk,
            Strategy::ShortestHops => TraversalStrategy::ShortestHops,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_measure() {
        let settings =
            Settings::try_parse_from(["citysense", "measure", "28.60,77.20", "28.62,77.22"])
                .unwrap();
        assert_eq!(settings.strategy, Strategy::SegmentWalk);
        assert_eq!(settings.tolerance, 1e-4);
        assert!(!settings.json);
        match settings.command {
            Command::Measure { from, to } => {
                assert_eq!(from, GeoPoint::new(28.60, 77.20));
                assert_eq!(to, GeoPoint::new(28.62, 77.22));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let settings = Settings::try_parse_from([
            "citysense",
            "snap",
            "-33.86,151.2",
            "--strategy",
            "shortest-hops",
            "--tolerance",
            "0.001",
            "--json",
        ])
        .unwrap();
        assert_eq!(settings.strategy, Strategy::ShortestHops);
        assert_eq!(settings.tolerance, 0.001);
        assert!(settings.json);
        assert!(matches!(settings.command, Command::Snap { point } if point.lat() < 0.0));
    }

    #[test]
    fn test_sensors_defaults() {
        let settings = Settings::try_parse_from(["citysense", "sensors"]).unwrap();
        match settings.command {
            Command::Sensors { count, seed } => {
                assert_eq!(count, 500);
                assert_eq!(seed, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_coordinate() {
        assert!(Settings::try_parse_from(["citysense", "snap", "north"]).is_err());
        assert!(Settings::try_parse_from(["citysense", "measure", "28.6,77.2"]).is_err());
    }
}
