//! Fog-of-war knowledge: which cells have been directly observed.
//!
//! The map only ever grows. No method un-observes a cell, so any sequence of
//! calls within a session is monotone in [`VisibilityMap::observed_count`].

use crate::grid::{Cell, Grid, DIRECTIONS};

/// Dense observed/unobserved flags with the same dimensions as a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityMap {
    rows: usize,
    cols: usize,
    observed: Vec<bool>,
    count: usize,
}

impl VisibilityMap {
    /// Nothing observed.
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            observed: vec![false; grid.len()],
            count: 0,
        }
    }

    /// Everything observed. Used for full-knowledge searches.
    #[must_use]
    pub fn fully_observed(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            observed: vec![true; grid.len()],
            count: grid.len(),
        }
    }

    /// Fresh session knowledge: start and goal observed, and both of their
    /// radius-2 neighbourhoods revealed.
    #[must_use]
    pub fn initialize(grid: &Grid, start: Cell, goal: Cell) -> Self {
        let mut map = Self::new(grid);
        map.observe(start);
        map.observe(goal);
        map.reveal(start);
        map.reveal(goal);
        map
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        (cell.row < self.rows && cell.col < self.cols).then(|| cell.row * self.cols + cell.col)
    }

    /// Mark one cell observed. Returns `true` if it was not observed before.
    /// Out-of-bounds cells are ignored.
    pub fn observe(&mut self, cell: Cell) -> bool {
        let Some(i) = self.index_of(cell) else {
            return false;
        };
        if self.observed[i] {
            return false;
        }
        self.observed[i] = true;
        self.count += 1;
        true
    }

    /// Observe `cell`, its cardinal neighbours, and their cardinal
    /// neighbours, clipped to bounds: the 13-cell Manhattan diamond of
    /// radius 2.
    ///
    /// Returns the number of newly observed cells; repeated reveals of an
    /// already observed neighbourhood return 0.
    pub fn reveal(&mut self, cell: Cell) -> usize {
        let mut fresh = usize::from(self.observe(cell));
        for &(dr, dc) in &DIRECTIONS {
            let Some(near) = self.step(cell, dr, dc) else {
                continue;
            };
            fresh += usize::from(self.observe(near));
            for &(dr2, dc2) in &DIRECTIONS {
                if let Some(far) = self.step(near, dr2, dc2) {
                    fresh += usize::from(self.observe(far));
                }
            }
        }
        fresh
    }

    fn step(&self, cell: Cell, dr: isize, dc: isize) -> Option<Cell> {
        let row = cell.row.checked_add_signed(dr)?;
        let col = cell.col.checked_add_signed(dc)?;
        (row < self.rows && col < self.cols).then_some(Cell::new(row, col))
    }

    /// `false` for unobserved and out-of-bounds cells.
    #[must_use]
    pub fn is_observed(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some_and(|i| self.observed[i])
    }

    /// Number of observed cells.
    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.count
    }

    /// Whether every cell observed here is also observed in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.observed.len() == other.observed.len()
            && self
                .observed
                .iter()
                .zip(&other.observed)
                .all(|(&a, &b)| !a || b)
    }
}
