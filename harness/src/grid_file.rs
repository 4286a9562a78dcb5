//! Grid files on disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   grid_0.txt     one row per line, `0` open / `1` blocked
//!   grid_1.txt
//!   ...
//! ```
//!
//! Loading picks up every file whose name starts with `grid` and ends with
//! `.txt`. Files named `grid_<i>.txt` come first, in numeric order of `i`, so
//! `loaded[i]` is the grid saved as environment `i`. Any other matching
//! names follow in byte order. Other files are ignored.

use std::path::{Path, PathBuf};

use log::{debug, info};

use fogpath_kernel::codec::{decode_grid, encode_grid};
use fogpath_kernel::grid::Grid;

use crate::error::HarnessError;

const GRID_PREFIX: &str = "grid";
const GRID_SUFFIX: &str = ".txt";

/// Write one grid as text.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] if the file cannot be written.
pub fn save_grid(path: &Path, grid: &Grid) -> Result<(), HarnessError> {
    std::fs::write(path, encode_grid(grid)).map_err(|e| HarnessError::io(path, &e))
}

/// Read one grid from text.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] if the file cannot be read and
/// [`HarnessError::GridDecode`] if its content is not a grid.
pub fn load_grid(path: &Path) -> Result<Grid, HarnessError> {
    let text = std::fs::read_to_string(path).map_err(|e| HarnessError::io(path, &e))?;
    decode_grid(&text).map_err(|source| HarnessError::GridDecode {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `grids` into `dir` as `grid_<i>.txt`, creating `dir` if needed.
/// Returns the written paths in index order.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] on the first failed directory or file write.
pub fn save_environments(dir: &Path, grids: &[Grid]) -> Result<Vec<PathBuf>, HarnessError> {
    std::fs::create_dir_all(dir).map_err(|e| HarnessError::io(dir, &e))?;
    let mut written = Vec::with_capacity(grids.len());
    for (i, grid) in grids.iter().enumerate() {
        let path = dir.join(format!("{GRID_PREFIX}_{i}{GRID_SUFFIX}"));
        save_grid(&path, grid)?;
        written.push(path);
    }
    info!("saved {} environments to {}", written.len(), dir.display());
    Ok(written)
}

/// A grid loaded from a directory, with the file name it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedGrid {
    pub file_name: String,
    pub grid: Grid,
}

/// Environment index of a `grid_<i>.txt` file name.
fn environment_index(name: &str) -> Option<u64> {
    name.strip_prefix(GRID_PREFIX)?
        .strip_prefix('_')?
        .strip_suffix(GRID_SUFFIX)?
        .parse()
        .ok()
}

/// Load every `grid*.txt` file in `dir`, indexed files first by index.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] if the directory cannot be listed,
/// [`HarnessError::NoGridFiles`] if nothing matches, and the
/// [`load_grid`] errors for the first unreadable file.
pub fn load_environments(dir: &Path) -> Result<Vec<LoadedGrid>, HarnessError> {
    let entries = std::fs::read_dir(dir).map_err(|e| HarnessError::io(dir, &e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| HarnessError::io(dir, &e))?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        let is_file = entry.file_type().is_ok_and(|t| t.is_file());
        if is_file && name.starts_with(GRID_PREFIX) && name.ends_with(GRID_SUFFIX) {
            names.push(name);
        }
    }
    if names.is_empty() {
        return Err(HarnessError::NoGridFiles {
            dir: dir.to_path_buf(),
        });
    }
    names.sort_by_cached_key(|name| {
        let index = environment_index(name);
        (index.is_none(), index, name.clone())
    });

    names
        .into_iter()
        .map(|file_name| {
            let grid = load_grid(&dir.join(&file_name))?;
            debug!("loaded {file_name}: {}x{}", grid.rows(), grid.cols());
            Ok(LoadedGrid { file_name, grid })
        })
        .collect()
}
