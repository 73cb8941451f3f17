//! Loading driver configuration from disk.
use std::io::Write;

use flock::{ConfigError, NeighbourPolicy, SimulationConfig};
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write config");
    file
}

#[test]
fn loads_partial_config_over_defaults() {
    let file = write_config(
        r#"{
            "spawn": { "count": 12 },
            "terrain_size": 33,
            "sea_level": 2.0,
            "neighbour_policy": "include_self"
        }"#,
    );
    let config = SimulationConfig::load(file.path()).expect("valid config");
    assert_eq!(config.spawn.count, 12);
    assert_eq!(config.spawn.position_half_range, 5.0);
    assert_eq!(config.terrain_size, 33);
    assert_eq!(config.sea_level(), 2.0);
    assert_eq!(config.neighbour_policy, NeighbourPolicy::IncludeSelf);
    assert_eq!(config.ticks, SimulationConfig::default().ticks);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");
    match SimulationConfig::load(&path) {
        Err(err @ ConfigError::Io { .. }) => {
            assert!(err.to_string().contains("absent.json"), "{err}");
        }
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn invalid_values_are_rejected_after_parsing() {
    let file = write_config(r#"{ "dt": 0.0 }"#);
    assert!(matches!(
        SimulationConfig::load(file.path()),
        Err(ConfigError::Invalid { field: "dt", .. })
    ));
}
