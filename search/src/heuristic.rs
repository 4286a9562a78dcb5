//! Heuristic providers: static Manhattan distance and the adaptive
//! correction table.
//!
//! Adaptive corrections are owned by the caller ([`AdaptiveHeuristic`]) and
//! passed into each search explicitly. Nothing here is process-global.

use std::collections::BTreeMap;

use fogpath_kernel::grid::Cell;

use crate::search::ClosedNode;

/// Distance-to-goal estimate used to order the frontier.
pub trait Heuristic {
    fn estimate(&self, cell: Cell, goal: Cell) -> u32;
}

/// Manhattan distance. Admissible and consistent for 4-connected unit-cost
/// movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, cell: Cell, goal: Cell) -> u32 {
        cell.manhattan(goal)
    }
}

/// Learned distance estimates towards one goal.
///
/// Entries are keyed by cell and are only valid for the goal they were
/// learned against; queries for any other goal fall back to Manhattan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionTable {
    goal: Option<Cell>,
    corrections: BTreeMap<Cell, u32>,
}

impl CorrectionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Goal the current corrections were learned against.
    #[must_use]
    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }

    /// Learned estimate for `cell` towards `goal`, if any.
    #[must_use]
    pub fn get(&self, cell: Cell, goal: Cell) -> Option<u32> {
        if self.goal != Some(goal) {
            return None;
        }
        self.corrections.get(&cell).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.corrections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }

    /// Iterate corrections in row-major cell order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.corrections.iter().map(|(&c, &h)| (c, h))
    }

    pub fn clear(&mut self) {
        self.goal = None;
        self.corrections.clear();
    }

    /// Apply `h(c) = g(goal) - g(c)` to every closed cell of a completed
    /// search. Switching to a different goal drops the old corrections.
    /// Returns the number of cells updated.
    pub fn learn(&mut self, goal: Cell, goal_g: u32, closed: &[ClosedNode]) -> usize {
        if self.goal != Some(goal) {
            self.corrections.clear();
            self.goal = Some(goal);
        }
        for node in closed {
            self.corrections
                .insert(node.cell, goal_g.saturating_sub(node.g));
        }
        closed.len()
    }
}

/// Adaptive heuristic: learned correction when one exists, else Manhattan.
#[derive(Debug, Clone, Default)]
pub struct AdaptiveHeuristic {
    table: CorrectionTable,
}

impl AdaptiveHeuristic {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_table(table: CorrectionTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub fn table(&self) -> &CorrectionTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut CorrectionTable {
        &mut self.table
    }

    #[must_use]
    pub fn into_table(self) -> CorrectionTable {
        self.table
    }
}

impl Heuristic for AdaptiveHeuristic {
    fn estimate(&self, cell: Cell, goal: Cell) -> u32 {
        self.table
            .get(cell, goal)
            .unwrap_or_else(|| cell.manhattan(goal))
    }
}
