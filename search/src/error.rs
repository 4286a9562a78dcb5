//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only: a precondition the
//! caller must prevent. "No path under current knowledge" is not an error;
//! it is reported through [`crate::search::TerminationReason`] and
//! [`crate::replan::SessionStatus`].

use fogpath_kernel::grid::Cell;

/// Typed failure for pre-flight validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal is out of bounds, on a blocked cell, or start == goal
    /// where a non-empty route is required.
    InvalidStartOrGoal { cell: Cell, detail: String },
    /// A policy option combination that cannot be run.
    UnsupportedPolicy { detail: String },
}

impl SearchError {
    pub(crate) fn invalid(cell: Cell, detail: impl Into<String>) -> Self {
        Self::InvalidStartOrGoal {
            cell,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStartOrGoal { cell, detail } => {
                write!(f, "invalid start or goal at {cell}: {detail}")
            }
            Self::UnsupportedPolicy { detail } => write!(f, "unsupported policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
