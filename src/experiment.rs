//! Monte Carlo estimation of the percolation threshold.
//!
//! Each trial opens uniformly random sites on a fresh
//! [`PercolationGrid`] until it percolates and records the fraction of
//! sites that were open at that moment. Trials run serially and share no
//! state beyond the random generator.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PercolationError, Result};
use crate::grid::PercolationGrid;
use crate::random::{create_rng, entropy_rng, random_site};
use crate::stats;

/// z-score of the two-sided 95% normal confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Runs one trial on a fresh n-by-n grid and returns the open fraction
/// at the moment the grid first percolates.
///
/// # Errors
/// [`PercolationError::InvalidArgument`] if `n <= 0`.
pub fn run_trial<R: Rng + ?Sized>(n: i64, rng: &mut R) -> Result<f64> {
    let mut grid = PercolationGrid::new(n)?;
    while !grid.percolates() {
        let (row, col) = random_site(n, rng);
        grid.open(row, col)?;
    }
    Ok(grid.open_fraction())
}

/// Repeated percolation trials and their sample statistics.
///
/// # Examples
/// ```
/// use u_percolation::PercolationExperiment;
///
/// let exp = PercolationExperiment::with_seed(5, 30, 42).unwrap();
/// let mean = exp.mean();
/// assert!(mean > 0.0 && mean < 1.0);
/// assert!(exp.confidence_lo() <= mean && mean <= exp.confidence_hi());
/// ```
#[derive(Debug, Clone)]
pub struct PercolationExperiment {
    size: usize,
    samples: Vec<f64>,
}

impl PercolationExperiment {
    /// Runs `trials` trials on n-by-n grids with an entropy-seeded generator.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `n <= 0` or `trials <= 0`.
    pub fn new(n: i64, trials: i64) -> Result<Self> {
        Self::with_rng(n, trials, &mut entropy_rng())
    }

    /// Like [`new`](Self::new) but reproducible for a given `seed`.
    pub fn with_seed(n: i64, trials: i64, seed: u64) -> Result<Self> {
        Self::with_rng(n, trials, &mut create_rng(seed))
    }

    /// Runs the trials drawing sites from `rng`.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `n <= 0` or `trials <= 0`.
    pub fn with_rng<R: Rng + ?Sized>(n: i64, trials: i64, rng: &mut R) -> Result<Self> {
        if n <= 0 || trials <= 0 {
            return Err(PercolationError::InvalidArgument(format!(
                "grid size and trial count must be positive, got n = {n}, trials = {trials}"
            )));
        }
        let trials = usize::try_from(trials).map_err(|_| {
            PercolationError::InvalidArgument(format!("trial count {trials} is too large"))
        })?;

        let mut samples = Vec::with_capacity(trials);
        for trial in 0..trials {
            let threshold = run_trial(n, rng)?;
            debug!(trial, threshold, "trial percolated");
            samples.push(threshold);
        }

        let experiment = Self {
            size: n as usize,
            samples,
        };
        info!(
            size = experiment.size,
            trials,
            mean = experiment.mean(),
            "experiment finished"
        );
        Ok(experiment)
    }

    /// Grid dimension n used by every trial.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of trials run.
    pub fn trials(&self) -> usize {
        self.samples.len()
    }

    /// Per-trial open fractions, in trial order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        stats::mean(&self.samples).unwrap_or(f64::NAN)
    }

    /// Sample standard deviation of the threshold (n − 1 denominator).
    ///
    /// NaN when only one trial was run.
    pub fn stddev(&self) -> f64 {
        stats::std_dev(&self.samples).unwrap_or(f64::NAN)
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    /// `(confidence_lo, confidence_hi)`.
    pub fn confidence_interval(&self) -> (f64, f64) {
        (self.confidence_lo(), self.confidence_hi())
    }

    /// Snapshot of the aggregate statistics.
    pub fn summary(&self) -> ExperimentSummary {
        let (confidence_lo, confidence_hi) = self.confidence_interval();
        ExperimentSummary {
            size: self.size,
            trials: self.trials(),
            mean: self.mean(),
            stddev: self.stddev(),
            confidence_lo,
            confidence_hi,
        }
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }
}

/// Aggregate result of a [`PercolationExperiment`].
///
/// `stddev` and the interval bounds are NaN for a single trial, which
/// serde_json writes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    pub size: usize,
    pub trials: usize,
    pub mean: f64,
    pub stddev: f64,
    pub confidence_lo: f64,
    pub confidence_hi: f64,
}

// ============================================================================
// Tests
// ============================================================================
