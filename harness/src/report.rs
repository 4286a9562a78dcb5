//! Session and comparison reports.
//!
//! Reports are `serde_json` values rendered through [`canonical_json_bytes`].
//! Each report has a digest basis: the same value with the wall-clock field
//! (`elapsed_ms`) removed, so two runs that planned identically have the
//! same report digest no matter how long they took.

use serde_json::{json, Value};

use fogpath_kernel::digest::{canonical_hash, grid_digest, path_digest, ContentHash};
use fogpath_kernel::grid::{Cell, Grid};
use fogpath_search::events::SessionEvent;

use crate::canon::canonical_json_bytes;
use crate::error::HarnessError;
use crate::runner::{ComparisonRun, StrategyRun};

/// Domain prefix for report digests.
pub const DOMAIN_REPORT: &[u8] = b"FOGPATH::REPORT::V1\0";

pub const SESSION_REPORT_SCHEMA: &str = "session_report.v1";
pub const COMPARISON_REPORT_SCHEMA: &str = "comparison_report.v1";

const ELAPSED_FIELD: &str = "elapsed_ms";

fn cell_json(cell: Cell) -> Value {
    json!([cell.row, cell.col])
}

fn event_json(event: &SessionEvent) -> Value {
    let mut v = match *event {
        SessionEvent::SeedSearch {
            run,
            expansions,
            learned,
        } => json!({"run": run, "expansions": expansions, "learned": learned}),
        SessionEvent::Planned {
            from,
            route_len,
            expansions,
        } => json!({"from": cell_json(from), "route_len": route_len, "expansions": expansions}),
        SessionEvent::BlockedStep { at, replan_from } => {
            json!({"at": cell_json(at), "replan_from": cell_json(replan_from)})
        }
        SessionEvent::GoalReached { steps } => json!({"steps": steps}),
        SessionEvent::NoPath { from, expansions } => {
            json!({"from": cell_json(from), "expansions": expansions})
        }
    };
    v["kind"] = json!(event.kind());
    v
}

/// Body of one session report, without schema or grid fields.
fn run_body(run: &StrategyRun) -> Value {
    let o = &run.outcome;
    json!({
        "strategy": o.strategy.label(),
        "status": o.status.label(),
        "path_length": o.realized_path.len(),
        "steps": o.steps(),
        "path_digest": path_digest(&o.realized_path).as_str(),
        "replans": o.replans,
        "searches": o.searches.len(),
        "expansions": o.total_expansions(),
        "observed_cells": o.observed_cells,
        "corrections": o.corrections,
        "events": o.events.iter().map(event_json).collect::<Vec<_>>(),
        ELAPSED_FIELD: run.elapsed_ms(),
    })
}

/// `session_report.v1` for one timed session on `grid`.
#[must_use]
pub fn session_report(grid: &Grid, run: &StrategyRun) -> Value {
    let o = &run.outcome;
    let mut v = run_body(run);
    v["schema_version"] = json!(SESSION_REPORT_SCHEMA);
    v["grid_digest"] = json!(grid_digest(grid).as_str());
    v["start"] = o.realized_path.first().map_or(Value::Null, |&c| cell_json(c));
    v
}

/// `comparison_report.v1` for all strategies on `grid`.
#[must_use]
pub fn comparison_report(grid: &Grid, comparison: &ComparisonRun) -> Value {
    json!({
        "schema_version": COMPARISON_REPORT_SCHEMA,
        "grid_digest": grid_digest(grid).as_str(),
        "rows": grid.rows(),
        "cols": grid.cols(),
        "start": cell_json(comparison.start),
        "goal": cell_json(comparison.goal),
        "runs": comparison.runs.iter().map(run_body).collect::<Vec<_>>(),
    })
}

/// Canonical bytes of a report.
///
/// # Errors
///
/// Returns [`HarnessError::Canon`] if the report holds a non-integer number.
pub fn report_bytes(report: &Value) -> Result<Vec<u8>, HarnessError> {
    Ok(canonical_json_bytes(report)?)
}

/// The report with every `elapsed_ms` field removed, at any depth.
#[must_use]
pub fn digest_basis(report: &Value) -> Value {
    match report {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(k, _)| k.as_str() != ELAPSED_FIELD)
                .map(|(k, v)| (k.clone(), digest_basis(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(digest_basis).collect()),
        other => other.clone(),
    }
}

/// Digest of a report's timing-free basis.
///
/// # Errors
///
/// Same as [`report_bytes`].
pub fn report_digest(report: &Value) -> Result<ContentHash, HarnessError> {
    let bytes = report_bytes(&digest_basis(report))?;
    Ok(canonical_hash(DOMAIN_REPORT, &bytes))
}

/// One human-readable line per run.
#[must_use]
pub fn summary_line(run: &StrategyRun) -> String {
    let o = &run.outcome;
    if o.is_success() {
        format!(
            "{}: path length {}, {} replans, {} expansions, time {:.3} s",
            o.strategy.label(),
            o.realized_path.len(),
            o.replans,
            o.total_expansions(),
            run.elapsed.as_secs_f64()
        )
    } else {
        format!(
            "{}: no path found after {} steps, time {:.3} s",
            o.strategy.label(),
            o.steps(),
            run.elapsed.as_secs_f64()
        )
    }
}
