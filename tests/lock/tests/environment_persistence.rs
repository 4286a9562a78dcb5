//! Environment persistence lock tests.
//!
//! Proves:
//! 1. Generated environments survive a save/load cycle unchanged
//! 2. Comparisons on reloaded grids report the same digest as on the originals
//! 3. Saved grid files are plain `0`/`1` text, one row per line
//! 4. Reload order follows the environment index past ten files, so
//!    `run_environment(&loaded[i].grid, i, ..)` reproduces environment `i`

use fogpath_harness::config::RunConfig;
use fogpath_harness::grid_file::{load_environments, load_grid, save_environments};
use fogpath_harness::maze::generate_environments;
use fogpath_harness::report::{comparison_report, report_digest};
use fogpath_harness::runner::run_environment;
use fogpath_kernel::digest::grid_digest;

fn small_config() -> RunConfig {
    RunConfig {
        grid_size: Some(17),
        environments: Some(5),
        seed: Some(9),
        ..RunConfig::default()
    }
}

#[test]
fn environments_round_trip_through_directory() {
    let dir = tempfile::tempdir().unwrap();
    let grids = generate_environments(&small_config()).unwrap();
    save_environments(dir.path(), &grids).unwrap();

    let loaded = load_environments(dir.path()).unwrap();
    assert_eq!(loaded.len(), grids.len());
    for (original, reloaded) in grids.iter().zip(&loaded) {
        assert_eq!(grid_digest(&reloaded.grid), grid_digest(original));
    }
}

#[test]
fn reload_order_follows_environment_index() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig {
        grid_size: Some(9),
        environments: Some(12),
        ..small_config()
    };
    let grids = generate_environments(&config).unwrap();
    save_environments(dir.path(), &grids).unwrap();

    let loaded = load_environments(dir.path()).unwrap();
    assert_eq!(loaded.len(), 12);
    for (i, original) in grids.iter().enumerate() {
        assert_eq!(
            loaded[i].file_name,
            format!("grid_{i}.txt"),
            "loaded[{i}] came from {}",
            loaded[i].file_name
        );
        assert_eq!(&loaded[i].grid, original);

        let (Ok(a), Ok(b)) = (
            run_environment(original, i, &config),
            run_environment(&loaded[i].grid, i, &config),
        ) else {
            continue;
        };
        assert_eq!((a.start, a.goal), (b.start, b.goal), "environment {i}");
    }
}

#[test]
fn reloaded_grids_plan_identically() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config();
    let grids = generate_environments(&config).unwrap();
    let paths = save_environments(dir.path(), &grids).unwrap();

    for (i, (grid, path)) in grids.iter().zip(&paths).enumerate() {
        let reloaded = load_grid(path).unwrap();
        let Ok(a) = run_environment(grid, i, &config) else {
            continue;
        };
        let b = run_environment(&reloaded, i, &config).unwrap();
        assert_eq!(
            report_digest(&comparison_report(grid, &a)).unwrap(),
            report_digest(&comparison_report(&reloaded, &b)).unwrap()
        );
    }
}

#[test]
fn saved_files_are_binary_text() {
    let dir = tempfile::tempdir().unwrap();
    let grids = generate_environments(&small_config()).unwrap();
    let paths = save_environments(dir.path(), &grids[..1]).unwrap();
    let text = std::fs::read_to_string(&paths[0]).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 17);
    for line in lines {
        let tokens: Vec<&str> = line.split(' ').collect();
        assert_eq!(tokens.len(), 17);
        assert!(tokens.iter().all(|t| *t == "0" || *t == "1"));
    }
}
