//! Typed harness errors.

use std::path::PathBuf;

use fogpath_kernel::grid::GridError;
use fogpath_search::error::SearchError;

use crate::canon::CanonError;

/// Failure in a harness operation (files, configuration, endpoint
/// selection, or the planning session it drives).
#[derive(Debug)]
pub enum HarnessError {
    /// I/O failure on `path`.
    Io { path: PathBuf, detail: String },
    /// A grid file could not be decoded.
    GridDecode { path: PathBuf, source: GridError },
    /// A grid could not be built.
    Grid(GridError),
    /// The planning core rejected its inputs.
    Search(SearchError),
    /// A configuration value outside its valid range.
    InvalidConfig { detail: String },
    /// Fewer than two open cells: no distinct start and goal exist.
    NoOpenCells { open: usize },
    /// A directory contained no `grid*.txt` files.
    NoGridFiles { dir: PathBuf },
    /// A report could not be rendered as canonical JSON.
    Canon(CanonError),
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "I/O error on {}: {detail}", path.display()),
            Self::GridDecode { path, source } => {
                write!(f, "cannot decode grid {}: {source}", path.display())
            }
            Self::Grid(e) => write!(f, "grid error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::InvalidConfig { detail } => write!(f, "invalid configuration: {detail}"),
            Self::NoOpenCells { open } => {
                write!(f, "grid has {open} open cells, need at least 2")
            }
            Self::NoGridFiles { dir } => write!(f, "no grid files found in {}", dir.display()),
            Self::Canon(e) => write!(f, "report encoding failed: {e}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GridDecode { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Canon(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for HarnessError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for HarnessError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CanonError> for HarnessError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

impl HarnessError {
    pub(crate) fn io(path: impl Into<PathBuf>, e: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            detail: e.to_string(),
        }
    }
}
