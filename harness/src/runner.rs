//! Harness runner: drives planning sessions on concrete grids.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig::validate() → select_endpoints()
//!   → [ReplanningSession::run() × strategy], each timed
//!   → ComparisonRun
//! ```
//!
//! The runner owns no planning logic; it only builds policies from the
//! config, times sessions and collects outcomes.

use std::time::{Duration, Instant};

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fogpath_kernel::grid::{Cell, Grid};
use fogpath_search::policy::Strategy;
use fogpath_search::replan::{run_session, SessionOutcome};

use crate::config::RunConfig;
use crate::error::HarnessError;
use crate::maze::select_endpoints;

/// Mixed into the base seed so endpoint draws never share a stream with
/// maze generation for the same environment.
const ENDPOINT_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// One timed session.
#[derive(Debug, Clone)]
pub struct StrategyRun {
    pub outcome: SessionOutcome,
    pub elapsed: Duration,
}

impl StrategyRun {
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.outcome.strategy
    }

    /// Elapsed wall time in whole milliseconds, saturating.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

/// All strategies run on the same grid and endpoints.
#[derive(Debug, Clone)]
pub struct ComparisonRun {
    pub start: Cell,
    pub goal: Cell,
    /// One run per strategy, in [`Strategy::ALL`] order.
    pub runs: Vec<StrategyRun>,
}

impl ComparisonRun {
    #[must_use]
    pub fn get(&self, strategy: Strategy) -> Option<&StrategyRun> {
        self.runs.iter().find(|r| r.strategy() == strategy)
    }
}

/// Run one strategy from `start` to `goal` and time it.
///
/// # Errors
///
/// Returns [`HarnessError::Search`] if the session rejects its inputs
/// (endpoints out of bounds, blocked or equal; invalid policy).
pub fn run_strategy(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    strategy: Strategy,
    config: &RunConfig,
) -> Result<StrategyRun, HarnessError> {
    let policy = config.policy_for(strategy);
    let began = Instant::now();
    let outcome = run_session(grid, start, goal, policy)?;
    let elapsed = began.elapsed();
    info!(
        "{}: {} in {} steps, {} replans, {} expansions, {:.3} s",
        strategy.label(),
        outcome.status.label(),
        outcome.steps(),
        outcome.replans,
        outcome.total_expansions(),
        elapsed.as_secs_f64()
    );
    Ok(StrategyRun { outcome, elapsed })
}

/// Run every strategy on the same grid and endpoints.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidConfig`] if the config does not validate,
/// and the [`run_strategy`] errors for the first failing strategy.
pub fn run_comparison(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    config: &RunConfig,
) -> Result<ComparisonRun, HarnessError> {
    config.validate()?;
    let runs = Strategy::ALL
        .iter()
        .map(|&strategy| run_strategy(grid, start, goal, strategy, config))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ComparisonRun { start, goal, runs })
}

/// Pick endpoints for environment `index` from the config seed and run the
/// comparison on them.
///
/// # Errors
///
/// Returns [`HarnessError::NoOpenCells`] if endpoints cannot be chosen, and
/// the [`run_comparison`] errors otherwise.
pub fn run_environment(
    grid: &Grid,
    index: usize,
    config: &RunConfig,
) -> Result<ComparisonRun, HarnessError> {
    let mut rng = endpoint_rng(config.seed(), index);
    let (start, goal) = select_endpoints(grid, &mut rng)?;
    info!("environment {index}: start {start}, goal {goal}");
    run_comparison(grid, start, goal, config)
}

/// RNG for endpoint selection in environment `index`.
#[must_use]
pub fn endpoint_rng(seed: u64, index: usize) -> StdRng {
    let index = u64::try_from(index).unwrap_or(u64::MAX);
    StdRng::seed_from_u64((seed ^ ENDPOINT_SEED_SALT).wrapping_add(index))
}
