//! Experiment configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PercolationError, Result};
use crate::experiment::PercolationExperiment;

/// Parameters of a percolation experiment.
///
/// `seed = None` draws the generator seed from OS entropy.
///
/// # Examples
/// ```
/// use u_percolation::ExperimentConfig;
///
/// let config = ExperimentConfig { size: 10, trials: 20, seed: Some(7) };
/// let exp = config.run().unwrap();
/// assert_eq!(exp.trials(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub size: i64,
    pub trials: i64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ExperimentConfig {
    /// Checks that `size` and `trials` are positive.
    pub fn validate(&self) -> Result<()> {
        if self.size <= 0 {
            return Err(PercolationError::InvalidArgument(format!(
                "grid size must be positive, got {}",
                self.size
            )));
        }
        if self.trials <= 0 {
            return Err(PercolationError::InvalidArgument(format!(
                "trial count must be positive, got {}",
                self.trials
            )));
        }
        Ok(())
    }

    /// Validates the configuration and runs the experiment.
    pub fn run(&self) -> Result<PercolationExperiment> {
        self.validate()?;
        match self.seed {
            Some(seed) => PercolationExperiment::with_seed(self.size, self.trials, seed),
            None => PercolationExperiment::new(self.size, self.trials),
        }
    }
}
