//! Per-search node bookkeeping and the frontier ordering key.

use std::cmp::Ordering;

use fogpath_kernel::grid::{Cell, Grid};

use crate::policy::TieBreak;

/// The frontier ordering key: `(f, g, cell)`.
///
/// Lower `f` first. On an `f` tie the [`TieBreak`] decides whether larger
/// or smaller `g` wins. Remaining ties fall to row-major cell order, so
/// extraction order is total and reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f: u32,
    pub g: u32,
    pub cell: Cell,
    pub tie_break: TieBreak,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_g = match self.tie_break {
            TieBreak::HighG => other.g.cmp(&self.g),
            TieBreak::LowG => self.g.cmp(&other.g),
        };
        self.f
            .cmp(&other.f)
            .then(by_g)
            .then(self.cell.cmp(&other.cell))
    }
}

/// Sentinel for "no g-score recorded" (infinite cost).
const UNSEEN: u32 = u32::MAX;

/// Dense g-score / predecessor / closed tables sized to the grid.
///
/// Created per search invocation and dropped when it returns.
#[derive(Debug)]
pub struct NodeTable {
    cols: usize,
    g: Vec<u32>,
    predecessor: Vec<Option<Cell>>,
    closed: Vec<bool>,
}

impl NodeTable {
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        Self {
            cols: grid.cols(),
            g: vec![UNSEEN; grid.len()],
            predecessor: vec![None; grid.len()],
            closed: vec![false; grid.len()],
        }
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    /// Recorded g-score, `None` while undiscovered.
    #[must_use]
    pub fn g(&self, cell: Cell) -> Option<u32> {
        let g = self.g[self.index(cell)];
        (g != UNSEEN).then_some(g)
    }

    /// Record the search start (g = 0, no predecessor).
    pub fn seed(&mut self, cell: Cell) {
        let i = self.index(cell);
        self.g[i] = 0;
        self.predecessor[i] = None;
    }

    /// Record `g` via `from` if it strictly improves on the current score.
    /// Returns whether the record changed.
    pub fn relax(&mut self, cell: Cell, from: Cell, g: u32) -> bool {
        let i = self.index(cell);
        if g >= self.g[i] {
            return false;
        }
        self.g[i] = g;
        self.predecessor[i] = Some(from);
        true
    }

    #[must_use]
    pub fn predecessor(&self, cell: Cell) -> Option<Cell> {
        self.predecessor[self.index(cell)]
    }

    #[must_use]
    pub fn is_closed(&self, cell: Cell) -> bool {
        self.closed[self.index(cell)]
    }

    pub fn close(&mut self, cell: Cell) {
        let i = self.index(cell);
        self.closed[i] = true;
    }

    /// Walk predecessors back from `goal` and return the path in forward
    /// order, excluding the search start and including `goal`.
    #[must_use]
    pub fn reconstruct(&self, goal: Cell) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut current = goal;
        while let Some(prev) = self.predecessor(current) {
            path.push(current);
            current = prev;
        }
        path.reverse();
        path
    }
}
