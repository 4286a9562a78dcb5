//! Planning policy types.

use std::fmt;

use crate::error::SearchError;

/// Frontier ordering among equal f-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TieBreak {
    /// Larger g first (closer to the search goal).
    #[default]
    HighG,
    /// Smaller g first.
    LowG,
}

/// How the single-shot search decides that a neighbour is traversable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObservationModel {
    /// Expanding a node reveals its neighbourhood; a neighbour is traversable
    /// only if it is observed and open in the ground truth.
    #[default]
    RevealOnExpand,
    /// Expansion reveals nothing. Unobserved cells are assumed open, observed
    /// cells use the ground truth. Obstacles surface only when the agent
    /// walks into them.
    FreeSpace,
}

impl ObservationModel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RevealOnExpand => "reveal_on_expand",
            Self::FreeSpace => "free_space",
        }
    }
}

/// The four replanning strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Plan start→goal, larger g first on ties.
    #[default]
    ForwardHighG,
    /// Plan start→goal, smaller g first on ties.
    ForwardLowG,
    /// Plan goal→agent (larger g first on ties) and walk the result reversed.
    Backward,
    /// Plan start→goal with learned heuristic corrections.
    Adaptive,
}

impl Strategy {
    /// All strategies in reporting order.
    pub const ALL: [Self; 4] = [
        Self::ForwardHighG,
        Self::ForwardLowG,
        Self::Backward,
        Self::Adaptive,
    ];

    /// Stable identifier used in reports and fixtures.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ForwardHighG => "forward_high_g",
            Self::ForwardLowG => "forward_low_g",
            Self::Backward => "backward",
            Self::Adaptive => "adaptive",
        }
    }

    /// Inverse of [`Strategy::label`].
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Tie-break used by every search this strategy runs.
    #[must_use]
    pub fn tie_break(self) -> TieBreak {
        match self {
            Self::ForwardLowG => TieBreak::LowG,
            Self::ForwardHighG | Self::Backward | Self::Adaptive => TieBreak::HighG,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Configuration for one planning session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplanPolicy {
    pub strategy: Strategy,
    pub observation: ObservationModel,
    /// Adaptive only: searches from the start that seed corrections before
    /// the agent moves. Must be at least 1.
    pub adaptive_seed_runs: u32,
}

impl ReplanPolicy {
    /// Default policy for `strategy`.
    #[must_use]
    pub fn for_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_observation(mut self, observation: ObservationModel) -> Self {
        self.observation = observation;
        self
    }

    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedPolicy`] if the adaptive strategy
    /// is configured with zero seed runs.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.strategy == Strategy::Adaptive && self.adaptive_seed_runs == 0 {
            return Err(SearchError::UnsupportedPolicy {
                detail: "adaptive strategy requires adaptive_seed_runs >= 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for ReplanPolicy {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            observation: ObservationModel::default(),
            adaptive_seed_runs: 1,
        }
    }
}
