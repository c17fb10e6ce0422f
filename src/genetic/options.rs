//! # GeneticKMeansConfig
//!
//! The `GeneticKMeansConfig` struct carries the parameters of the genetic
//! search: how many genomes to keep per generation, how many generations to
//! run, and the cluster-count range `[k_min, k_max]` the search explores.
//!
//! ## Example
//!
//! ```rust
//! use genetic_kmeans::genetic::GeneticKMeansConfig;
//!
//! let config = GeneticKMeansConfig::builder()
//!     .population_size(20)
//!     .num_generations(50)
//!     .k_range(2, 6)
//!     .build();
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{ClusteringError, Result};
use crate::kmeans::DEFAULT_MAX_ITERATIONS;

/// Configuration options for the genetic K-Means search.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct GeneticKMeansConfig {
    population_size: usize,
    num_generations: usize,
    k_min: usize,
    k_max: usize,
    /// Per-centroid-slot probability of replacement during mutation.
    mutation_rate: f64,
    /// Iteration cap forwarded to every inner K-Means run.
    max_kmeans_iterations: usize,
    /// Minimum number of genomes to evaluate in parallel.
    parallel_threshold: usize,
}

impl GeneticKMeansConfig {
    pub fn new(
        population_size: usize,
        num_generations: usize,
        k_min: usize,
        k_max: usize,
    ) -> Self {
        Self {
            population_size,
            num_generations,
            k_min,
            k_max,
            ..Default::default()
        }
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn k_min(&self) -> usize {
        self.k_min
    }

    pub fn k_max(&self) -> usize {
        self.k_max
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn max_kmeans_iterations(&self) -> usize {
        self.max_kmeans_iterations
    }

    /// Returns the minimum number of genomes to evaluate in parallel.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Sets the per-slot mutation probability.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the iteration cap for the inner K-Means runs.
    pub fn with_max_kmeans_iterations(mut self, max_iterations: usize) -> Self {
        self.max_kmeans_iterations = max_iterations;
        self
    }

    /// Sets the parallel evaluation threshold.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Checks that the configuration describes a runnable search.
    ///
    /// # Errors
    ///
    /// Returns [`ClusteringError::InvalidConfiguration`] if the population is
    /// smaller than two (binary tournaments need a pair), no generations are
    /// requested, the cluster-count range is empty or starts at zero, or the
    /// mutation rate is not a probability.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(ClusteringError::InvalidConfiguration(
                "population size must be at least 2".to_string(),
            ));
        }
        if self.num_generations == 0 {
            return Err(ClusteringError::InvalidConfiguration(
                "number of generations must be at least 1".to_string(),
            ));
        }
        if self.k_min == 0 {
            return Err(ClusteringError::InvalidConfiguration(
                "k_min must be at least 1".to_string(),
            ));
        }
        if self.k_min > self.k_max {
            return Err(ClusteringError::InvalidConfiguration(format!(
                "k_min ({}) must not exceed k_max ({})",
                self.k_min, self.k_max
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ClusteringError::InvalidConfiguration(format!(
                "mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }

    /// Returns a builder for creating a `GeneticKMeansConfig` instance.
    pub fn builder() -> GeneticKMeansConfigBuilder {
        GeneticKMeansConfigBuilder::default()
    }
}

impl Default for GeneticKMeansConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            num_generations: 50,
            k_min: 1,
            k_max: 5,
            mutation_rate: 0.1,
            max_kmeans_iterations: DEFAULT_MAX_ITERATIONS,
            parallel_threshold: 64,
        }
    }
}

/// Builder for `GeneticKMeansConfig`.
///
/// Provides a fluent interface for constructing configuration instances.
#[derive(Debug, Clone, Default)]
pub struct GeneticKMeansConfigBuilder {
    population_size: Option<usize>,
    num_generations: Option<usize>,
    k_min: Option<usize>,
    k_max: Option<usize>,
    mutation_rate: Option<f64>,
    max_kmeans_iterations: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl GeneticKMeansConfigBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the cluster-count range `[k_min, k_max]`.
    pub fn k_range(mut self, k_min: usize, k_max: usize) -> Self {
        self.k_min = Some(k_min);
        self.k_max = Some(k_max);
        self
    }

    /// Sets the per-slot mutation probability.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the iteration cap for the inner K-Means runs.
    pub fn max_kmeans_iterations(mut self, value: usize) -> Self {
        self.max_kmeans_iterations = Some(value);
        self
    }

    /// Sets the parallel evaluation threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `GeneticKMeansConfig` instance.
    pub fn build(self) -> GeneticKMeansConfig {
        let defaults = GeneticKMeansConfig::default();
        GeneticKMeansConfig {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            k_min: self.k_min.unwrap_or(defaults.k_min),
            k_max: self.k_max.unwrap_or(defaults.k_max),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            max_kmeans_iterations: self
                .max_kmeans_iterations
                .unwrap_or(defaults.max_kmeans_iterations),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }
}
