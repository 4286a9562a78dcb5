//! Report schema lock tests.
//!
//! Proves:
//! 1. `report_bytes` output parses back to JSON carrying the schema id, grid
//!    geometry and one run per strategy in reporting order
//! 2. Per-run counters agree with the run's own event log
//! 3. The bytes are compact with keys sorted, so reparsing and re-rendering is
//!    byte-identical
//! 4. The digest basis carries no `elapsed_ms` at any depth

use serde_json::Value;

use fogpath_harness::config::RunConfig;
use fogpath_harness::report::{
    comparison_report, digest_basis, report_bytes, session_report, COMPARISON_REPORT_SCHEMA,
    SESSION_REPORT_SCHEMA,
};
use fogpath_harness::runner::{run_comparison, ComparisonRun};
use fogpath_kernel::digest::grid_digest;
use fogpath_kernel::grid::{Cell, Grid};
use fogpath_search::policy::{ObservationModel, Strategy};

fn detour_grid() -> Grid {
    Grid::from_picture(
        "
        .....#....
        .##......#
        ..........
        ",
    )
    .unwrap()
}

fn free_space_comparison(grid: &Grid) -> ComparisonRun {
    let config = RunConfig {
        observation: Some(ObservationModel::FreeSpace),
        ..RunConfig::default()
    };
    run_comparison(grid, Cell::new(0, 0), Cell::new(0, 9), &config).unwrap()
}

fn parsed(report: &Value) -> (Vec<u8>, Value) {
    let bytes = report_bytes(report).unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (bytes, value)
}

fn contains_key(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => map.contains_key(key) || map.values().any(|v| contains_key(v, key)),
        Value::Array(items) => items.iter().any(|v| contains_key(v, key)),
        _ => false,
    }
}

#[test]
fn comparison_report_schema_fields() {
    let grid = detour_grid();
    let cmp = free_space_comparison(&grid);
    let (_, report) = parsed(&comparison_report(&grid, &cmp));

    assert_eq!(report["schema_version"], COMPARISON_REPORT_SCHEMA);
    assert_eq!(report["grid_digest"], grid_digest(&grid).as_str());
    assert_eq!(report["rows"], 3);
    assert_eq!(report["cols"], 10);
    assert_eq!(report["start"], serde_json::json!([0, 0]));
    assert_eq!(report["goal"], serde_json::json!([0, 9]));

    let labels: Vec<&str> = report["runs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["strategy"].as_str().unwrap())
        .collect();
    let expected: Vec<&str> = Strategy::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, expected);
}

#[test]
fn run_counters_match_event_log() {
    let grid = detour_grid();
    let cmp = free_space_comparison(&grid);
    let (_, report) = parsed(&comparison_report(&grid, &cmp));

    for run in report["runs"].as_array().unwrap() {
        let label = run["strategy"].as_str().unwrap();
        let events = run["events"].as_array().unwrap();
        let blocked = events.iter().filter(|e| e["kind"] == "blocked_step").count();
        assert_eq!(run["replans"].as_u64(), Some(blocked as u64), "{label}");
        assert_eq!(run["status"], "reached", "{label}");
        assert_eq!(
            run["path_length"].as_u64(),
            run["steps"].as_u64().map(|s| s + 1),
            "{label}"
        );
        assert_eq!(events.last().unwrap()["kind"], "goal_reached", "{label}");
        assert!(run["elapsed_ms"].is_u64(), "{label}");
    }
}

#[test]
fn rendered_bytes_are_compact_and_sorted() {
    let grid = detour_grid();
    let cmp = free_space_comparison(&grid);
    let (bytes, report) = parsed(&comparison_report(&grid, &cmp));

    assert!(!bytes.contains(&b' ') && !bytes.contains(&b'\n'));
    assert!(bytes.starts_with(br#"{"cols":10,"goal":[0,9],"grid_digest":"sha256:"#));
    assert_eq!(report_bytes(&report).unwrap(), bytes);
}

#[test]
fn session_report_schema_fields() {
    let grid = detour_grid();
    let cmp = free_space_comparison(&grid);
    let run = cmp.get(Strategy::Adaptive).unwrap();
    let (_, report) = parsed(&session_report(&grid, run));

    assert_eq!(report["schema_version"], SESSION_REPORT_SCHEMA);
    assert_eq!(report["strategy"], "adaptive");
    assert_eq!(report["start"], serde_json::json!([0, 0]));
    assert!(report["corrections"].is_u64());
}

#[test]
fn digest_basis_has_no_timing() {
    let grid = detour_grid();
    let cmp = free_space_comparison(&grid);
    let report = comparison_report(&grid, &cmp);
    assert!(contains_key(&report, "elapsed_ms"));

    let (_, basis) = parsed(&digest_basis(&report));
    assert!(!contains_key(&basis, "elapsed_ms"));
    assert_eq!(basis["runs"].as_array().unwrap().len(), 4);
}
