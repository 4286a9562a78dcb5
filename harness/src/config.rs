//! Run configuration: optional overrides on top of fixed defaults.
//!
//! Every field is `None` by default and resolves to the matching
//! `DEFAULT_*` constant, so tests can override one knob without restating
//! the rest.

use fogpath_search::policy::{ObservationModel, ReplanPolicy, Strategy};

use crate::error::HarnessError;

/// Side length of generated grids.
pub const DEFAULT_GRID_SIZE: usize = 101;
/// Number of environments generated per batch.
pub const DEFAULT_ENVIRONMENTS: usize = 50;
/// Probability that a newly carved maze cell is blocked.
pub const DEFAULT_BLOCK_PROBABILITY: f64 = 0.3;
/// Base seed for maze generation and endpoint selection.
pub const DEFAULT_SEED: u64 = 0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    /// Generated grids are `grid_size x grid_size`.
    pub grid_size: Option<usize>,
    pub environments: Option<usize>,
    pub block_probability: Option<f64>,
    pub seed: Option<u64>,
    /// Observation model for every session. `None` uses the policy default.
    pub observation: Option<ObservationModel>,
    /// Adaptive seeding runs. `None` uses the policy default.
    pub adaptive_seed_runs: Option<u32>,
}

impl RunConfig {
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size.unwrap_or(DEFAULT_GRID_SIZE)
    }

    #[must_use]
    pub fn environments(&self) -> usize {
        self.environments.unwrap_or(DEFAULT_ENVIRONMENTS)
    }

    #[must_use]
    pub fn block_probability(&self) -> f64 {
        self.block_probability.unwrap_or(DEFAULT_BLOCK_PROBABILITY)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Session policy for `strategy` with this config's overrides applied.
    #[must_use]
    pub fn policy_for(&self, strategy: Strategy) -> ReplanPolicy {
        let mut policy = ReplanPolicy::for_strategy(strategy);
        if let Some(observation) = self.observation {
            policy.observation = observation;
        }
        if let Some(runs) = self.adaptive_seed_runs {
            policy.adaptive_seed_runs = runs;
        }
        policy
    }

    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] for a zero grid size or a block
    /// probability outside `[0, 1)`, and forwards policy validation failures.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.grid_size() == 0 {
            return Err(HarnessError::InvalidConfig {
                detail: "grid_size must be at least 1".into(),
            });
        }
        let p = self.block_probability();
        if !(0.0..1.0).contains(&p) {
            return Err(HarnessError::InvalidConfig {
                detail: format!("block_probability must be in [0, 1), got {p}"),
            });
        }
        for strategy in Strategy::ALL {
            self.policy_for(strategy).validate()?;
        }
        Ok(())
    }
}
