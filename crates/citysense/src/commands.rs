//! Command execution

use crate::cli::{Command, Settings};
use crate::error::{CliError, Result};
use citysense_lib::demo::{self, WaterLoggingArea};
use citysense_lib::sensors::{AqiBand, SensorGenerator, SensorReading};
use citysense_lib::{
    EstimatorConfig, GeoPoint, NetworkInfo, PathQuery, RoadNetwork, RoadSegment,
    utils,
};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Load the network selected by `settings`
pub fn load_network(settings: &Settings) -> Result<RoadNetwork> {
    let config = EstimatorConfig {
        tolerance: settings.tolerance,
        strategy: settings.strategy.into(),
    };

    let segments = match &settings.network {
        Some(path) => read_segments(path)?,
        None => demo::delhi_road_segments(),
    };

    let network = RoadNetwork::with_config(segments, config)?;
    tracing::info!(
        "Loaded road network with {} segments ({} vertices)",
        network.info().segment_count,
        network.info().vertex_count
    );
    Ok(network)
}

fn read_segments(path: &Path) -> Result<Vec<RoadSegment>> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::NetworkFile {
        path: path.display().to_string(),
        source,
    })
}

/// Run the selected command, writing results to `out`
pub fn run(settings: &Settings, out: &mut impl Write) -> Result<()> {
    match &settings.command {
        Command::Snap { point } => {
            let network = load_network(settings)?;
            let snapped = network.snap(*point)?;
            if settings.json {
                write_json(out, &SnapOutput {
                    query: *point,
                    snapped,
                    offset_km: point.haversine_km(&snapped),
                })?;
            } else {
                writeln!(
                    out,
                    "{point} -> {snapped} ({} away)",
                    utils::format_km(point.haversine_km(&snapped))
                )?;
            }
        }
        Command::Measure { from, to } => {
            let network = load_network(settings)?;
            let measurement = network.measure(PathQuery::new(*from, *to))?;
            if !measurement.path.is_connected() {
                tracing::warn!(
                    "No road connection between {} and {}, closing with a straight line",
                    measurement.start_snap,
                    measurement.end_snap
                );
            }
            if settings.json {
                write_json(out, &measurement)?;
            } else {
                writeln!(out, "Distance: {}", measurement.label())?;
                writeln!(out, "State:    {:?}", measurement.path.state)?;
                writeln!(out, "Path:")?;
                for point in &measurement.path.points {
                    writeln!(out, "  {point}")?;
                }
            }
        }
        Command::Info => {
            let network = load_network(settings)?;
            let info = network.info();
            if settings.json {
                write_json(out, info)?;
            } else {
                write_info(out, info)?;
            }
        }
        Command::Sensors { count, seed } => {
            let mut generator = match seed {
                Some(seed) => SensorGenerator::seeded(*seed),
                None => SensorGenerator::from_entropy(),
            };
            let readings = generator.generate(*count);
            if settings.json {
                write_json(out, &readings)?;
            } else {
                write_sensor_summary(out, &readings)?;
            }
        }
        Command::WaterLogging => {
            let areas = demo::water_logging_areas();
            if settings.json {
                write_json(out, &areas)?;
            } else {
                write_water_logging(out, &areas)?;
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct SnapOutput {
    query: GeoPoint,
    snapped: GeoPoint,
    offset_km: f64,
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_info(out: &mut impl Write, info: &NetworkInfo) -> Result<()> {
    writeln!(out, "Segments:     {}", info.segment_count)?;
    writeln!(out, "Vertices:     {}", info.vertex_count)?;
    writeln!(out, "Total length: {}", utils::format_km(info.total_length_km))?;
    match info.bounding_box {
        Some(bbox) => writeln!(
            out,
            "Bounds:       {:.4},{:.4} .. {:.4},{:.4}",
            bbox.min().y,
            bbox.min().x,
            bbox.max().y,
            bbox.max().x
        )?,
        None => writeln!(out, "Bounds:       (empty network)")?,
    }
    Ok(())
}

fn write_sensor_summary(out: &mut impl Write, readings: &[SensorReading]) -> Result<()> {
    writeln!(out, "Readings: {}", readings.len())?;
    if readings.is_empty() {
        return Ok(());
    }

    let mean_aqi =
        readings.iter().map(|r| f64::from(r.aqi)).sum::<f64>() / readings.len() as f64;
    writeln!(out, "Mean AQI: {mean_aqi:.1}")?;

    for band in [
        AqiBand::Good,
        AqiBand::Moderate,
        AqiBand::Unhealthy,
        AqiBand::Hazardous,
    ] {
        let n = readings.iter().filter(|r| r.band() == band).count();
        writeln!(out, "  {:<10} {n}", format!("{band:?}"))?;
    }
    Ok(())
}

fn write_water_logging(out: &mut impl Write, areas: &[WaterLoggingArea]) -> Result<()> {
    for area in areas {
        writeln!(
            out,
            "{}  radius {:>4.0} m  risk {}%",
            area.center, area.radius_m, area.severity
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use citysense_lib::NetworkError;
    use clap::Parser;

    fn run_args(args: &[&str]) -> Result<String> {
        let settings = Settings::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run(&settings, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_measure_text() {
        let output =
            run_args(&["citysense", "measure", "28.6139,77.2090", "28.6339,77.2290"]).unwrap();
        assert!(output.starts_with("Distance: "));
        assert!(output.contains("Found"));
    }

    #[test]
    fn test_measure_json() {
        let output = run_args(&[
            "citysense",
            "--json",
            "measure",
            "28.6139,77.2090",
            "28.6339,77.2290",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["path"]["state"], "found");
        assert_eq!(value["path"]["points"][0][0], 28.6139);
        assert!(value["distance_km"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_info_on_delhi() {
        let output = run_args(&["citysense", "info"]).unwrap();
        assert!(output.contains("Segments:     40"));
        assert!(output.contains("Vertices:     120"));
    }

    #[test]
    fn test_sensors_json_is_reproducible() {
        let args = ["citysense", "--json", "sensors", "--count", "5", "--seed", "1"];
        let a = run_args(&args).unwrap();
        let b = run_args(&args).unwrap();
        assert_eq!(a, b);
        let value: serde_json::Value = serde_json::from_str(&a).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_water_logging_lists_all_areas() {
        let output = run_args(&["citysense", "water-logging"]).unwrap();
        assert_eq!(output.lines().count(), 15);
    }

    #[test]
    fn test_missing_network_file() {
        let result = run_args(&[
            "citysense",
            "--network",
            "/nonexistent/citysense-network.json",
            "info",
        ]);
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_network_from_file() {
        let path = std::env::temp_dir().join(format!("citysense-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[
                {"points": [[0.0, 0.0], [0.0, 0.01]], "hygiene": 80},
                {"points": [[0.0, 0.01], [0.01, 0.01]], "hygiene": 20}
            ]"#,
        )
        .unwrap();

        let settings = Settings::try_parse_from([
            "citysense",
            "--network",
            path.to_str().unwrap(),
            "measure",
            "0,0",
            "0.01,0.01",
        ])
        .unwrap();
        let network = load_network(&settings).unwrap();
        assert_eq!(network.info().segment_count, 2);

        let mut out = Vec::new();
        run(&settings, &mut out).unwrap();
        std::fs::remove_file(&path).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Found"));
        assert_eq!(output.lines().filter(|l| l.starts_with("  ")).count(), 3);
    }

    #[test]
    fn test_malformed_network_file() {
        let path =
            std::env::temp_dir().join(format!("citysense-bad-{}.json", std::process::id()));
        std::fs::write(&path, "not json").unwrap();
        let settings =
            Settings::try_parse_from(["citysense", "--network", path.to_str().unwrap(), "info"])
                .unwrap();
        let result = load_network(&settings);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(CliError::NetworkFile { .. })));
    }

    #[test]
    fn test_invalid_tolerance() {
        let result = run_args(&["citysense", "--tolerance", "0", "info"]);
        assert!(matches!(
            result,
            Err(CliError::Network(NetworkError::InvalidConfig(_)))
        ));
    }
}
