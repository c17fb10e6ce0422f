//! # Error Types
//!
//! This module defines the error taxonomy for the clustering library. All
//! validation happens up front: the numeric cores are pure transforms with no
//! external resources to retry, so errors are raised before computation starts
//! rather than caught mid-run.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genetic_kmeans::error::{ClusteringError, Result};
//!
//! fn validate_k(k: usize) -> Result<()> {
//!     if k == 0 {
//!         return Err(ClusteringError::InvalidConfiguration(
//!             "k must be at least 1".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while clustering.
///
/// This enum provides specific error variants for the failure scenarios of
/// both the K-Means engine and the genetic search layered on top of it.
#[derive(Error, Debug)]
pub enum ClusteringError {
    /// Error that occurs when an invalid configuration is provided
    /// (zero cluster count, empty population, `k_min > k_max`, ...).
    #[error("Configuration error: {0}")]
    InvalidConfiguration(String),

    /// Error that occurs when the dataset cannot be clustered
    /// (empty, or points of inconsistent dimension).
    #[error("Dataset error: {0}")]
    InvalidDataset(String),

    /// Error that occurs when the K-Means loop hits its iteration cap
    /// before the centroids stop moving.
    #[error("K-Means did not converge within {epochs} epochs")]
    NonConvergence {
        /// Number of assignment/update iterations executed before giving up.
        epochs: usize,
    },

    /// Error that occurs when a fitness calculation produces an unusable
    /// value.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),
}

/// A specialized Result type for clustering operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `ClusteringError`.
pub type Result<T> = std::result::Result<T, ClusteringError>;
