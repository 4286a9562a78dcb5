//! Fog-driven replanning lock tests.
//!
//! Proves:
//! 1. A hidden obstacle on the first route forces a replan, and the realized
//!    path is strictly longer than the full-visibility optimum yet reaches the goal
//! 2. Adaptive corrections never exceed the true remaining distance
//! 3. Corrections are scoped to one goal and can be handed to a new session

use rand::rngs::StdRng;
use rand::SeedableRng;

use fogpath_harness::maze::{generate_maze, select_endpoints};
use fogpath_kernel::grid::{Cell, Grid};
use fogpath_search::events::SessionEvent;
use fogpath_search::heuristic::CorrectionTable;
use fogpath_search::policy::{ObservationModel, ReplanPolicy, Strategy};
use fogpath_search::replan::{run_session, ReplanningSession, SessionStatus};
use lock_tests::oracle::{assert_realized_path, bfs_distance, distances_to};

/// Row 2 looks like a straight corridor to the goal, but (2, 6) is blocked
/// and too far from both endpoints to be seen at the start. The only way
/// round is back to column 0 and along row 0.
fn dead_end_corridor() -> Grid {
    Grid::from_picture(
        "
        ..........
        .########.
        ......#...
        ",
    )
    .unwrap()
}

#[test]
fn hidden_block_forces_longer_detour() {
    let grid = dead_end_corridor();
    let start = Cell::new(2, 0);
    let goal = Cell::new(2, 9);
    let optimum = bfs_distance(&grid, start, goal).unwrap();
    assert_eq!(optimum, 13);

    for strategy in Strategy::ALL {
        let policy = ReplanPolicy::for_strategy(strategy).with_observation(ObservationModel::FreeSpace);
        let outcome = run_session(&grid, start, goal, policy).unwrap();
        assert_eq!(outcome.status, SessionStatus::Reached, "{strategy}");
        assert_realized_path(&grid, start, goal, &outcome.realized_path);
        assert!(
            outcome.steps() > optimum as usize,
            "{strategy}: {} steps is not longer than the optimum",
            outcome.steps()
        );
        assert!(outcome.replans >= 1);
        let first_block = outcome.events.iter().find_map(|e| match e {
            SessionEvent::BlockedStep { at, .. } => Some(*at),
            _ => None,
        });
        assert_eq!(first_block, Some(Cell::new(2, 6)), "{strategy}");
    }
}

#[test]
fn same_corridor_without_fog_surprises_is_optimal() {
    let grid = dead_end_corridor();
    let start = Cell::new(2, 0);
    let goal = Cell::new(2, 9);
    for strategy in Strategy::ALL {
        let outcome = run_session(&grid, start, goal, ReplanPolicy::for_strategy(strategy)).unwrap();
        assert_eq!(outcome.steps(), 13, "{strategy}");
        assert_eq!(outcome.replans, 0);
    }
}

fn assert_admissible(grid: &Grid, goal: Cell, table: &CorrectionTable) {
    let truth = distances_to(grid, goal);
    for (cell, h) in table.iter() {
        if let Some(d) = grid.index_of(cell).and_then(|i| truth[i]) {
            assert!(h <= d, "correction {h} at {cell} exceeds true distance {d}");
        }
    }
}

#[test]
fn adaptive_corrections_are_admissible() {
    for seed in 0..15u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = generate_maze(21, 21, 0.3, &mut rng).unwrap();
        let (start, goal) = select_endpoints(&grid, &mut rng).unwrap();
        for observation in [ObservationModel::RevealOnExpand, ObservationModel::FreeSpace] {
            let policy = ReplanPolicy {
                strategy: Strategy::Adaptive,
                observation,
                adaptive_seed_runs: 2,
            };
            let mut session = ReplanningSession::new(&grid, start, goal, policy).unwrap();
            while session.iterate().unwrap().is_none() {
                assert_admissible(&grid, goal, session.corrections());
            }
            assert_admissible(&grid, goal, session.corrections());
            if session.status() == Some(SessionStatus::Reached) {
                assert!(!session.corrections().is_empty());
            }
        }
    }
}

#[test]
fn corrections_carry_over_for_the_same_goal() {
    let grid = dead_end_corridor();
    let start = Cell::new(2, 0);
    let goal = Cell::new(2, 9);
    let policy = ReplanPolicy::for_strategy(Strategy::Adaptive);

    let mut first = ReplanningSession::new(&grid, start, goal, policy).unwrap();
    while first.iterate().unwrap().is_none() {}
    let learned = first.corrections().clone();
    assert_eq!(learned.goal(), Some(goal));
    assert!(!learned.is_empty());

    let second = ReplanningSession::new(&grid, Cell::new(0, 0), goal, policy)
        .unwrap()
        .with_corrections(learned.clone());
    assert_eq!(second.corrections(), &learned);
    let outcome = second.run().unwrap();
    assert_eq!(outcome.status, SessionStatus::Reached);
    assert_eq!(outcome.steps(), 11);
}

#[test]
fn corrections_for_another_goal_are_replaced() {
    let grid = Grid::open(6, 6).unwrap();
    let policy = ReplanPolicy::for_strategy(Strategy::Adaptive);

    let mut first = ReplanningSession::new(&grid, Cell::new(0, 0), Cell::new(5, 5), policy).unwrap();
    while first.iterate().unwrap().is_none() {}
    let old = first.corrections().clone();

    let new_goal = Cell::new(0, 5);
    let mut second = ReplanningSession::new(&grid, Cell::new(5, 0), new_goal, policy)
        .unwrap()
        .with_corrections(old);
    while second.iterate().unwrap().is_none() {}
    assert_eq!(second.corrections().goal(), Some(new_goal));
    assert_admissible(&grid, new_goal, second.corrections());
}
