//! Fogpath Kernel: ground truth and knowledge carriers for grid planning.
//!
//! # API Surface
//!
//! - [`grid::Grid`] -- immutable occupancy grid, indexed by [`grid::Cell`]
//! - [`visibility::VisibilityMap`] -- monotone fog-of-war knowledge
//! - [`codec`] -- plain-text grid encoding
//! - [`digest`] -- domain-separated SHA-256 digests of paths and grids
//!
//! # Module Dependency Direction
//!
//! `grid` ← `visibility`, `codec`, `digest`
//!
//! The kernel knows nothing about search. Planners read the grid and grow
//! the visibility map; they never mutate ground truth.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codec;
pub mod digest;
pub mod grid;
pub mod visibility;
