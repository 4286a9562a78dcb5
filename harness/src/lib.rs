//! Fogpath Harness: everything around the planning core.
//!
//! The harness builds worlds (seeded mazes), moves them to and from disk,
//! picks endpoints, times planning sessions and renders what they did.
//! It does NOT plan. Every path comes from `fogpath_search`.
//!
//! # Modules
//!
//! - [`maze`] -- seeded depth-first maze carving and endpoint selection
//! - [`grid_file`] -- `grid_<i>.txt` persistence
//! - [`runner`] -- timed strategy runs and all-strategy comparisons
//! - [`report`] -- canonical JSON reports and summary lines
//! - [`render`] -- text overlay of a path on a grid
//! - [`config`] -- run configuration with optional overrides

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod config;
pub mod error;
pub mod grid_file;
pub mod maze;
pub mod render;
pub mod report;
pub mod runner;
