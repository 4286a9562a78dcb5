//! Shared helpers for fogpath benchmark suites.

use rand::rngs::StdRng;
use rand::SeedableRng;

use fogpath_harness::maze::{generate_maze, select_endpoints};
use fogpath_kernel::grid::{Cell, Grid};
use fogpath_kernel::visibility::VisibilityMap;
use fogpath_search::heuristic::Manhattan;
use fogpath_search::search::{search, SearchOptions};

/// A grid with endpoints known to be connected.
pub struct MazeCase {
    pub name: String,
    pub grid: Grid,
    pub start: Cell,
    pub goal: Cell,
}

/// Whether `goal` is reachable from `start` with full knowledge.
#[must_use]
pub fn is_reachable(grid: &Grid, start: Cell, goal: Cell) -> bool {
    let mut vis = VisibilityMap::fully_observed(grid);
    search(grid, &mut vis, start, goal, &Manhattan, SearchOptions::default())
        .is_ok_and(|r| r.path.is_some())
}

/// First seeded `size x size` maze at or after `seed` whose random endpoints
/// are connected, trying at most 64 seeds.
///
/// # Panics
///
/// Panics if no connected case is found. Benchmark setup failures are fatal.
#[must_use]
pub fn connected_maze(size: usize, seed: u64) -> MazeCase {
    for s in seed..seed + 64 {
        let mut rng = StdRng::seed_from_u64(s);
        let grid = generate_maze(size, size, 0.3, &mut rng).expect("maze generation");
        let Ok((start, goal)) = select_endpoints(&grid, &mut rng) else {
            continue;
        };
        if is_reachable(&grid, start, goal) {
            return MazeCase {
                name: format!("maze{size}/seed{s}"),
                grid,
                start,
                goal,
            };
        }
    }
    panic!("no connected {size}x{size} maze within 64 seeds of {seed}");
}

/// All-open `size x size` grid, corner to corner.
///
/// # Panics
///
/// Panics if `size` is zero.
#[must_use]
pub fn open_case(size: usize) -> MazeCase {
    MazeCase {
        name: format!("open{size}"),
        grid: Grid::open(size, size).expect("non-empty grid"),
        start: Cell::new(0, 0),
        goal: Cell::new(size - 1, size - 1),
    }
}
