//! Single-shot A* over the currently known grid.

use log::trace;

use fogpath_kernel::grid::{Cell, Grid};
use fogpath_kernel::visibility::VisibilityMap;

use crate::error::SearchError;
use crate::frontier::OpenList;
use crate::heuristic::Heuristic;
use crate::node::NodeTable;
use crate::policy::{ObservationModel, TieBreak};

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search goal was popped from the frontier.
    GoalReached,
    /// The frontier emptied first: no path under current knowledge.
    FrontierExhausted,
    /// `pop` returned nothing although the frontier reported non-empty.
    FrontierInvariantViolation,
}

impl TerminationReason {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::FrontierInvariantViolation => "frontier_invariant_violation",
        }
    }
}

/// Knobs for one search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub tie_break: TieBreak,
    pub observation: ObservationModel,
}

/// An expanded (closed) cell and its final g-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosedNode {
    pub cell: Cell,
    pub g: u32,
}

/// Counters for one search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    pub expansions: u64,
    pub pushes: u64,
    /// Popped entries discarded because the cell was closed or had a better g.
    pub stale_pops: u64,
    pub frontier_high_water: u64,
}

/// Outcome of one search invocation.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Path excluding the search start and ending at the search goal.
    /// `Some(vec![])` when start == goal; `None` when no path exists.
    pub path: Option<Vec<Cell>>,
    pub termination_reason: TerminationReason,
    /// Closed cells in expansion order.
    pub closed: Vec<ClosedNode>,
    /// g-score of the goal when reached.
    pub goal_g: Option<u32>,
    pub stats: SearchStats,
}

impl SearchResult {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination_reason == TerminationReason::GoalReached
    }
}

fn validate_endpoint(grid: &Grid, cell: Cell, role: &str) -> Result<(), SearchError> {
    if !grid.contains(cell) {
        return Err(SearchError::invalid(
            cell,
            format!(
                "{role} outside {}x{} grid",
                grid.rows(),
                grid.cols()
            ),
        ));
    }
    if grid.is_blocked(cell) {
        return Err(SearchError::invalid(cell, format!("{role} is blocked")));
    }
    Ok(())
}

/// Whether the search may step onto `cell` given what is known.
fn is_traversable(
    grid: &Grid,
    visibility: &VisibilityMap,
    cell: Cell,
    observation: ObservationModel,
) -> bool {
    match observation {
        ObservationModel::RevealOnExpand => visibility.is_observed(cell) && grid.is_open(cell),
        ObservationModel::FreeSpace => !visibility.is_observed(cell) || grid.is_open(cell),
    }
}

/// Run A* from `start` to `goal`.
///
/// Under [`ObservationModel::RevealOnExpand`] every expansion reveals the
/// neighbourhood of the expanded cell, so `visibility` grows as a side
/// effect. Under [`ObservationModel::FreeSpace`] it is only read.
///
/// # Errors
///
/// Returns [`SearchError::InvalidStartOrGoal`] if either endpoint is out of
/// bounds or blocked in the ground truth.
pub fn search(
    grid: &Grid,
    visibility: &mut VisibilityMap,
    start: Cell,
    goal: Cell,
    heuristic: &dyn Heuristic,
    options: SearchOptions,
) -> Result<SearchResult, SearchError> {
    validate_endpoint(grid, start, "start")?;
    validate_endpoint(grid, goal, "goal")?;

    let mut stats = SearchStats::default();
    if start == goal {
        return Ok(SearchResult {
            path: Some(Vec::new()),
            termination_reason: TerminationReason::GoalReached,
            closed: Vec::new(),
            goal_g: Some(0),
            stats,
        });
    }

    let mut table = NodeTable::new(grid);
    let mut open = OpenList::new(options.tie_break);
    let mut closed = Vec::new();

    table.seed(start);
    open.push(heuristic.estimate(start, goal), 0, start);
    stats.pushes += 1;

    let termination_reason = loop {
        if open.is_empty() {
            break TerminationReason::FrontierExhausted;
        }
        let Some(entry) = open.pop() else {
            break TerminationReason::FrontierInvariantViolation;
        };
        let current = entry.cell;
        let Some(g) = table.g(current) else {
            break TerminationReason::FrontierInvariantViolation;
        };
        if table.is_closed(current) || entry.g > g {
            stats.stale_pops += 1;
            continue;
        }
        if current == goal {
            break TerminationReason::GoalReached;
        }

        table.close(current);
        closed.push(ClosedNode { cell: current, g });
        stats.expansions += 1;
        if options.observation == ObservationModel::RevealOnExpand {
            visibility.reveal(current);
        }

        for next in grid.neighbors(current) {
            if !is_traversable(grid, visibility, next, options.observation) {
                continue;
            }
            let tentative = g + 1;
            if table.relax(next, current, tentative) {
                let f = tentative.saturating_add(heuristic.estimate(next, goal));
                open.push(f, tentative, next);
                stats.pushes += 1;
            }
        }
    };
    stats.frontier_high_water = open.high_water();

    let (path, goal_g) = if termination_reason == TerminationReason::GoalReached {
        (Some(table.reconstruct(goal)), table.g(goal))
    } else {
        (None, None)
    };

    trace!(
        "search {start} -> {goal}: {} after {} expansions ({} pushes, {} stale)",
        termination_reason.label(),
        stats.expansions,
        stats.pushes,
        stats.stale_pops
    );

    Ok(SearchResult {
        path,
        termination_reason,
        closed,
        goal_g,
        stats,
    })
}
