//! Plain-text grid codec.
//!
//! One row per line, cells separated by whitespace, `0` for open and `1` for
//! blocked. Decoding also accepts numeric spellings such as `0.0` / `1.0`
//! and `1.000000000000000000e+00`, which is what float-typed grid dumps
//! contain. Blank lines are skipped.

use crate::grid::{CellState, Grid, GridError};

/// Decode a grid from text.
///
/// # Errors
///
/// Returns [`GridError::InvalidToken`] for a token that is not a 0/1 value,
/// and the [`Grid::from_rows`] errors for empty or ragged input.
pub fn decode_grid(text: &str) -> Result<Grid, GridError> {
    let mut rows = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(col_idx, token)| {
                parse_token(token).ok_or_else(|| GridError::InvalidToken {
                    line: line_idx + 1,
                    column: col_idx + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    Grid::from_rows(rows)
}

fn parse_token(token: &str) -> Option<CellState> {
    match token {
        "0" => return Some(CellState::Open),
        "1" => return Some(CellState::Blocked),
        _ => {}
    }
    let value: f64 = token.parse().ok()?;
    if value.abs() < f64::EPSILON {
        Some(CellState::Open)
    } else if (value - 1.0).abs() < f64::EPSILON {
        Some(CellState::Blocked)
    } else {
        None
    }
}

/// Encode a grid as text, newline-terminated.
#[must_use]
pub fn encode_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() * 2);
    for (cell, state) in grid.iter() {
        if cell.col > 0 {
            out.push(' ');
        }
        out.push(if state.is_open() { '0' } else { '1' });
        if cell.col + 1 == grid.cols() {
            out.push('\n');
        }
    }
    out
}
