//! Seeded maze generation and endpoint selection.
//!
//! Mazes are carved by a randomized depth-first walk over an all-blocked
//! grid. Each newly visited neighbour is blocked with the configured
//! probability; otherwise it is opened and the walk continues from it.
//! Every cell is visited exactly once, so the carve always terminates.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use fogpath_kernel::grid::{Cell, CellState, Grid};

use crate::config::RunConfig;
use crate::error::HarnessError;

/// Carve a `rows x cols` maze with `rng`.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidConfig`] if `block_probability` is outside
/// `[0, 1)` and [`HarnessError::Grid`] for a zero dimension.
pub fn generate_maze<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    block_probability: f64,
    rng: &mut R,
) -> Result<Grid, HarnessError> {
    if !(0.0..1.0).contains(&block_probability) {
        return Err(HarnessError::InvalidConfig {
            detail: format!("block_probability must be in [0, 1), got {block_probability}"),
        });
    }
    // Validates the dimensions; the carve below writes into its own buffer.
    let shape = Grid::open(rows, cols)?;

    let mut cells = vec![vec![CellState::Blocked; cols]; rows];
    let mut visited = vec![vec![false; cols]; rows];

    let origin = Cell::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
    cells[origin.row][origin.col] = CellState::Open;
    visited[origin.row][origin.col] = true;
    let mut stack = vec![origin];

    while let Some(&current) = stack.last() {
        let unvisited: Vec<Cell> = shape
            .neighbors(current)
            .filter(|n| !visited[n.row][n.col])
            .collect();
        let Some(&next) = unvisited.choose(rng) else {
            stack.pop();
            continue;
        };
        visited[next.row][next.col] = true;
        if rng.gen::<f64>() >= block_probability {
            cells[next.row][next.col] = CellState::Open;
            stack.push(next);
        }
    }

    Ok(Grid::from_rows(cells)?)
}

/// Generate `config.environments()` square mazes. Environment `i` uses seed
/// `config.seed() + i`, so any single environment can be regenerated alone.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidConfig`] if the config does not validate.
pub fn generate_environments(config: &RunConfig) -> Result<Vec<Grid>, HarnessError> {
    config.validate()?;
    let size = config.grid_size();
    (0..config.environments())
        .map(|i| {
            let mut rng = environment_rng(config.seed(), i);
            let grid = generate_maze(size, size, config.block_probability(), &mut rng)?;
            debug!(
                "environment {i}: {size}x{size}, {} open cells",
                grid.open_cells().count()
            );
            Ok(grid)
        })
        .collect()
}

/// RNG for environment `index` under base seed `seed`.
#[must_use]
pub fn environment_rng(seed: u64, index: usize) -> StdRng {
    let index = u64::try_from(index).unwrap_or(u64::MAX);
    StdRng::seed_from_u64(seed.wrapping_add(index))
}

/// Pick distinct uniformly random open cells for start and goal.
///
/// # Errors
///
/// Returns [`HarnessError::NoOpenCells`] if the grid has fewer than two open
/// cells.
pub fn select_endpoints<R: Rng + ?Sized>(
    grid: &Grid,
    rng: &mut R,
) -> Result<(Cell, Cell), HarnessError> {
    let open: Vec<Cell> = grid.open_cells().collect();
    if open.len() < 2 {
        return Err(HarnessError::NoOpenCells { open: open.len() });
    }
    let s = rng.gen_range(0..open.len());
    // Draw from the remaining cells; skip over the start's slot.
    let mut g = rng.gen_range(0..open.len() - 1);
    if g >= s {
        g += 1;
    }
    Ok((open[s], open[g]))
}
