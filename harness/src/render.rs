//! Text overlay of a path on a grid.
//!
//! `#` blocked, `.` open, `*` path, `S` start, `G` goal. One line per row,
//! newline-terminated. Endpoints win over path marks.

use std::collections::BTreeSet;

use fogpath_kernel::grid::{Cell, Grid};

/// Render `path` over `grid` with whichever of `start` and `goal` are given.
#[must_use]
pub fn render_overlay(
    grid: &Grid,
    path: &[Cell],
    start: Option<Cell>,
    goal: Option<Cell>,
) -> String {
    let on_path: BTreeSet<Cell> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for (cell, state) in grid.iter() {
        let mark = if start == Some(cell) {
            'S'
        } else if goal == Some(cell) {
            'G'
        } else if on_path.contains(&cell) {
            '*'
        } else if state.is_open() {
            '.'
        } else {
            '#'
        };
        out.push(mark);
        if cell.col + 1 == grid.cols() {
            out.push('\n');
        }
    }
    out
}

/// Render a realized path, taking the endpoints from its ends. An empty
/// path renders the bare grid.
#[must_use]
pub fn render_path(grid: &Grid, path: &[Cell]) -> String {
    render_overlay(grid, path, path.first().copied(), path.last().copied())
}
