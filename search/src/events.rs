//! Session event log.
//!
//! Every planning session records what it did, in order: each search it
//! ran, each blocked cell it walked into, and how it ended. The log is the
//! audit trail reports are rendered from; it never feeds back into planning.

use fogpath_kernel::grid::Cell;

/// One entry in a session's event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Adaptive seeding search from the start (path discarded).
    SeedSearch {
        run: u32,
        expansions: u64,
        learned: usize,
    },
    /// A search produced a route for the agent to walk.
    Planned {
        from: Cell,
        route_len: usize,
        expansions: u64,
    },
    /// The next step of the route was blocked in the ground truth.
    BlockedStep { at: Cell, replan_from: Cell },
    /// The agent stood on the goal.
    GoalReached { steps: usize },
    /// A search from `from` found no path under current knowledge.
    NoPath { from: Cell, expansions: u64 },
}

impl SessionEvent {
    /// Stable identifier used in rendered reports.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SeedSearch { .. } => "seed_search",
            Self::Planned { .. } => "planned",
            Self::BlockedStep { .. } => "blocked_step",
            Self::GoalReached { .. } => "goal_reached",
            Self::NoPath { .. } => "no_path",
        }
    }

    /// Whether this event ends a session.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GoalReached { .. } | Self::NoPath { .. })
    }
}
