//! Replanning driver: repeated searches interleaved with walking.
//!
//! Each iteration plans a route from the agent's position to the goal over
//! what is currently known, then walks it cell by cell. Walking into a cell
//! that is blocked in the ground truth abandons the rest of the route and
//! starts the next iteration from the last open position. A session ends
//! when the agent stands on the goal or a search finds no path.
//!
//! All four strategies share this loop. They differ only in which heuristic
//! the search uses and in which direction it runs.

use log::{debug, info, warn};

use fogpath_kernel::grid::{Cell, Grid};
use fogpath_kernel::visibility::VisibilityMap;

use crate::error::SearchError;
use crate::events::SessionEvent;
use crate::heuristic::{AdaptiveHeuristic, CorrectionTable, Heuristic, Manhattan};
use crate::policy::{ReplanPolicy, Strategy};
use crate::search::{search, SearchOptions, SearchResult, SearchStats};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// The agent reached the goal.
    Reached,
    /// A search found no path under the knowledge available at that point.
    NoPath,
}

impl SessionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Reached => "reached",
            Self::NoPath => "no_path",
        }
    }
}

/// Everything a finished session produced.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub strategy: Strategy,
    pub status: SessionStatus,
    /// Cells the agent actually stood on, starting with the start cell.
    /// On failure this is the segment walked before the search gave up.
    pub realized_path: Vec<Cell>,
    pub events: Vec<SessionEvent>,
    /// Stats of every search run, in order (seed searches included).
    pub searches: Vec<SearchStats>,
    /// Number of times a blocked step forced a new search.
    pub replans: u64,
    pub observed_cells: usize,
    /// Adaptive corrections held at the end of the session (0 otherwise).
    pub corrections: usize,
}

impl SessionOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == SessionStatus::Reached
    }

    /// Moves made by the agent (`realized_path.len() - 1`).
    #[must_use]
    pub fn steps(&self) -> usize {
        self.realized_path.len().saturating_sub(1)
    }

    #[must_use]
    pub fn total_expansions(&self) -> u64 {
        self.searches.iter().map(|s| s.expansions).sum()
    }
}

/// Result of walking one planned route.
enum Walk {
    Arrived,
    Blocked,
}

/// One planning session: owns the agent position, the visibility map and
/// (for the adaptive strategy) the correction table for its lifetime.
#[derive(Debug)]
pub struct ReplanningSession<'g> {
    grid: &'g Grid,
    start: Cell,
    goal: Cell,
    policy: ReplanPolicy,
    visibility: VisibilityMap,
    adaptive: AdaptiveHeuristic,
    position: Cell,
    realized_path: Vec<Cell>,
    events: Vec<SessionEvent>,
    searches: Vec<SearchStats>,
    replans: u64,
    seeded: bool,
    status: Option<SessionStatus>,
}

impl<'g> ReplanningSession<'g> {
    /// Start a session with fresh visibility seeded around start and goal.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidStartOrGoal`] if start or goal is out of
    /// bounds or blocked, or if they are equal; and
    /// [`SearchError::UnsupportedPolicy`] if the policy does not validate.
    pub fn new(
        grid: &'g Grid,
        start: Cell,
        goal: Cell,
        policy: ReplanPolicy,
    ) -> Result<Self, SearchError> {
        policy.validate()?;
        for (cell, role) in [(start, "start"), (goal, "goal")] {
            if !grid.contains(cell) {
                return Err(SearchError::invalid(
                    cell,
                    format!("{role} outside {}x{} grid", grid.rows(), grid.cols()),
                ));
            }
            if grid.is_blocked(cell) {
                return Err(SearchError::invalid(cell, format!("{role} is blocked")));
            }
        }
        if start == goal {
            return Err(SearchError::invalid(start, "start and goal are the same cell"));
        }

        Ok(Self {
            grid,
            start,
            goal,
            policy,
            visibility: VisibilityMap::initialize(grid, start, goal),
            adaptive: AdaptiveHeuristic::new(),
            position: start,
            realized_path: vec![start],
            events: Vec::new(),
            searches: Vec::new(),
            replans: 0,
            seeded: false,
            status: None,
        })
    }

    /// Continue from corrections learned elsewhere instead of an empty table.
    /// Corrections for a different goal are ignored by lookups and replaced
    /// on the first learning update.
    #[must_use]
    pub fn with_corrections(mut self, table: CorrectionTable) -> Self {
        self.adaptive = AdaptiveHeuristic::with_table(table);
        self
    }

    #[must_use]
    pub fn position(&self) -> Cell {
        self.position
    }

    #[must_use]
    pub fn visibility(&self) -> &VisibilityMap {
        &self.visibility
    }

    #[must_use]
    pub fn corrections(&self) -> &CorrectionTable {
        self.adaptive.table()
    }

    #[must_use]
    pub fn realized_path(&self) -> &[Cell] {
        &self.realized_path
    }

    #[must_use]
    pub fn status(&self) -> Option<SessionStatus> {
        self.status
    }

    /// Run iterations until the session ends.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchError`] from the underlying searches. Endpoints are
    /// validated at construction and the agent only stands on open cells,
    /// so this does not happen for a session built with [`Self::new`].
    pub fn run(mut self) -> Result<SessionOutcome, SearchError> {
        while self.iterate()?.is_none() {}
        Ok(self.finish())
    }

    /// Run one plan-and-walk iteration. Returns the final status once the
    /// session has ended; further calls are no-ops.
    ///
    /// # Errors
    ///
    /// Same as [`Self::run`].
    pub fn iterate(&mut self) -> Result<Option<SessionStatus>, SearchError> {
        if self.status.is_some() {
            return Ok(self.status);
        }
        if self.policy.strategy == Strategy::Adaptive && !self.seeded {
            self.seeded = true;
            if !self.seed_corrections()? {
                return Ok(self.status);
            }
        }

        let Some(route) = self.plan()? else {
            return Ok(self.status);
        };
        match self.walk(&route) {
            Walk::Arrived => {
                let steps = self.realized_path.len() - 1;
                info!(
                    "{}: goal {} reached in {steps} steps after {} replans",
                    self.policy.strategy, self.goal, self.replans
                );
                self.events.push(SessionEvent::GoalReached { steps });
                self.status = Some(SessionStatus::Reached);
            }
            Walk::Blocked => self.replans += 1,
        }
        Ok(self.status)
    }

    fn options(&self) -> SearchOptions {
        SearchOptions {
            tie_break: self.policy.strategy.tie_break(),
            observation: self.policy.observation,
        }
    }

    fn run_search(&mut self, from: Cell, to: Cell) -> Result<SearchResult, SearchError> {
        let options = self.options();
        let heuristic: &dyn Heuristic = match self.policy.strategy {
            Strategy::Adaptive => &self.adaptive,
            Strategy::ForwardHighG | Strategy::ForwardLowG | Strategy::Backward => &Manhattan,
        };
        let result = search(self.grid, &mut self.visibility, from, to, heuristic, options)?;
        self.searches.push(result.stats);
        Ok(result)
    }

    /// Adaptive only: search from the start to learn corrections before
    /// moving. Returns `false` (and ends the session) if a seed search
    /// finds no path.
    fn seed_corrections(&mut self) -> Result<bool, SearchError> {
        for run in 0..self.policy.adaptive_seed_runs {
            let result = self.run_search(self.start, self.goal)?;
            let Some(goal_g) = result.goal_g else {
                self.fail(result.stats.expansions);
                return Ok(false);
            };
            let learned = self
                .adaptive
                .table_mut()
                .learn(self.goal, goal_g, &result.closed);
            debug!(
                "adaptive seed run {run}: {} expansions, {learned} corrections",
                result.stats.expansions
            );
            self.events.push(SessionEvent::SeedSearch {
                run,
                expansions: result.stats.expansions,
                learned,
            });
        }
        Ok(true)
    }

    /// Plan a route from the current position, in walking order, ending at
    /// the goal. `None` ends the session with [`SessionStatus::NoPath`].
    fn plan(&mut self) -> Result<Option<Vec<Cell>>, SearchError> {
        let from = self.position;
        let (result, route) = if self.policy.strategy == Strategy::Backward {
            let result = self.run_search(self.goal, from)?;
            // The search path runs goal -> agent, excluding the goal. Walk it
            // back: drop the agent's own cell and finish on the goal.
            let route = result.path.clone().map(|path| {
                let mut route: Vec<Cell> = path.into_iter().rev().skip(1).collect();
                route.push(self.goal);
                route
            });
            (result, route)
        } else {
            let result = self.run_search(from, self.goal)?;
            let route = result.path.clone();
            (result, route)
        };

        let Some(route) = route else {
            self.fail(result.stats.expansions);
            return Ok(None);
        };

        if self.policy.strategy == Strategy::Adaptive {
            if let Some(goal_g) = result.goal_g {
                self.adaptive
                    .table_mut()
                    .learn(self.goal, goal_g, &result.closed);
            }
        }

        debug!(
            "{}: planned {} cells from {from} ({} expansions)",
            self.policy.strategy,
            route.len(),
            result.stats.expansions
        );
        self.events.push(SessionEvent::Planned {
            from,
            route_len: route.len(),
            expansions: result.stats.expansions,
        });
        Ok(Some(route))
    }

    fn walk(&mut self, route: &[Cell]) -> Walk {
        for &step in route {
            if self.grid.is_blocked(step) {
                self.visibility.observe(step);
                debug!(
                    "{}: blocked cell at {step}, re-planning from {}",
                    self.policy.strategy, self.position
                );
                self.events.push(SessionEvent::BlockedStep {
                    at: step,
                    replan_from: self.position,
                });
                return Walk::Blocked;
            }
            self.visibility.observe(step);
            self.realized_path.push(step);
            self.position = step;
            self.visibility.reveal(step);
            if step == self.goal {
                return Walk::Arrived;
            }
        }
        // Routes always end on the goal.
        Walk::Blocked
    }

    fn fail(&mut self, expansions: u64) {
        warn!(
            "{}: no path from {} to {} under current knowledge",
            self.policy.strategy, self.position, self.goal
        );
        self.events.push(SessionEvent::NoPath {
            from: self.position,
            expansions,
        });
        self.status = Some(SessionStatus::NoPath);
    }

    fn finish(self) -> SessionOutcome {
        SessionOutcome {
            strategy: self.policy.strategy,
            status: self.status.unwrap_or(SessionStatus::NoPath),
            realized_path: self.realized_path,
            events: self.events,
            searches: self.searches,
            replans: self.replans,
            observed_cells: self.visibility.observed_count(),
            corrections: self.adaptive.table().len(),
        }
    }
}

/// Run a complete session.
///
/// # Errors
///
/// Same as [`ReplanningSession::new`] and [`ReplanningSession::run`].
pub fn run_session(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    policy: ReplanPolicy,
) -> Result<SessionOutcome, SearchError> {
    ReplanningSession::new(grid, start, goal, policy)?.run()
}
