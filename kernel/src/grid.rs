//! Ground-truth occupancy grid and cell coordinates.
//!
//! The grid is immutable once built. Planners read it, never write it:
//! everything an agent learns about the world lives in
//! [`crate::visibility::VisibilityMap`], not here.

use std::fmt;

/// Integer grid coordinate `(row, col)`.
///
/// Ordering is row-major (`row` first, then `col`). The frontier uses this
/// ordering as its final tie-break term, so it must stay total and stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// 4-connected (Manhattan) distance between two cells.
    #[must_use]
    pub fn manhattan(self, other: Self) -> u32 {
        let d = self.row.abs_diff(other.row) + self.col.abs_diff(other.col);
        u32::try_from(d).unwrap_or(u32::MAX)
    }

    /// Whether `other` is exactly one cardinal unit step away.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Open,
    Blocked,
}

impl CellState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Cardinal unit steps in expansion order: right, down, left, up.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Typed failure for grid construction and text decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or a row with no cells.
    Empty,
    /// A row whose length differs from the first row.
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A token that is not an occupancy value (1-based line and column).
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no cells"),
            Self::Ragged {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} has {actual} cells, expected {expected} (grid must be rectangular)"
            ),
            Self::InvalidToken {
                line,
                column,
                token,
            } => write!(f, "invalid cell token {token:?} at line {line}, column {column}"),
        }
    }
}

impl std::error::Error for GridError {}

/// Immutable rectangular occupancy grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// An all-open grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] if either dimension is zero.
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Open; rows * cols],
        })
    }

    /// Build from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] for no rows / empty rows and
    /// [`GridError::Ragged`] when row lengths differ.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Build from an ASCII picture: `#` is blocked, anything else is open.
    ///
    /// Lines are trimmed; blank lines are skipped. Handy for small fixtures.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::from_rows`].
    pub fn from_picture(picture: &str) -> Result<Self, GridError> {
        let rows = picture
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.chars()
                    .map(|c| {
                        if c == '#' {
                            CellState::Blocked
                        } else {
                            CellState::Open
                        }
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Row-major index of an in-bounds cell.
    #[must_use]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.cols + cell.col)
    }

    /// Inverse of [`Grid::index_of`].
    #[must_use]
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.cols, index % self.cols)
    }

    /// State of `cell`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<CellState> {
        self.index_of(cell).map(|i| self.cells[i])
    }

    /// `true` only for in-bounds open cells.
    #[must_use]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(CellState::is_open)
    }

    /// `true` only for in-bounds blocked cells.
    #[must_use]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.get(cell) == Some(CellState::Blocked)
    }

    /// In-bounds cardinal neighbours of `cell`, in [`DIRECTIONS`] order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let row = cell.row.checked_add_signed(dr)?;
            let col = cell.col.checked_add_signed(dc)?;
            let next = Cell::new(row, col);
            self.contains(next).then_some(next)
        })
    }

    /// All open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_open())
            .map(|(i, _)| self.cell_at(i))
    }

    /// Row-major iterator over `(cell, state)`.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &s)| (self.cell_at(i), s))
    }
}
