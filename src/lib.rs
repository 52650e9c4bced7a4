//! # u-percolation
//!
//! Monte Carlo estimation of the site-percolation threshold of an
//! n-by-n grid.
//!
//! The model ([`PercolationGrid`]) keeps a union-find over the grid's
//! sites and stores open/top/bottom flags at each component's root, so
//! percolation is detected incrementally as sites open. The experiment
//! driver ([`PercolationExperiment`]) repeats randomized trials and
//! reports the mean, standard deviation, and 95% confidence interval of
//! the observed thresholds.
//!
//! ## Modules
//!
//! - [`collections`] — Weighted union-find with path compression
//! - [`grid`] — The percolation model
//! - [`experiment`] — Repeated trials and their statistics
//! - [`stats`] — Numerically stable descriptive statistics
//! - [`random`] — Seeded RNG construction and site draws
//! - [`config`] — Experiment parameters
//!
//! ## Design Philosophy
//!
//! - **Root-only flags**: component status is read and written only at
//!   union-find roots
//! - **Explicit randomness**: generators are passed in or seeded, never global
//! - **Property-based testing**: grid behaviour checked against flood fill via proptest

pub mod collections;
pub mod config;
pub mod error;
pub mod experiment;
pub mod grid;
pub mod random;
pub mod stats;

pub use config::ExperimentConfig;
pub use error::{PercolationError, Result};
pub use experiment::{ExperimentSummary, PercolationExperiment};
pub use grid::{PercolationGrid, SiteStatus};
