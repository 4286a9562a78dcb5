//! Fogpath Search: deterministic incremental A* under fog of war.
//!
//! This crate is the planning core. It depends only on `fogpath_kernel`.
//!
//! # Crate dependency graph
//!
//! ```text
//! fogpath_kernel  ←  fogpath_search  ←  fogpath_harness
//! (grid, fog)        (A*, replanning)    (mazes, files, reports)
//! ```
//!
//! # Key types
//!
//! - [`frontier::OpenList`] -- binary min-heap with an explicit tie-break key
//! - [`search::search`] -- one A* run over the currently known grid
//! - [`heuristic::Heuristic`] -- Manhattan and adaptive (learned) estimates
//! - [`replan::ReplanningSession`] -- the repeated plan/walk loop
//! - [`policy::ReplanPolicy`] -- strategy and observation model for a session

#![forbid(unsafe_code)]

pub mod error;
pub mod events;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod replan;
pub mod search;
