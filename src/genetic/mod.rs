//! Genetic search over K-Means starting configurations.
//!
//! A genome is a complete initial centroid set; its length encodes the
//! candidate cluster count `k`. The engine evolves a population of such
//! genomes, scoring each one by running K-Means to convergence and inverting
//! the resulting inertia.

pub mod engine;
pub mod options;

pub use engine::{GeneticKMeans, Genome};
pub use options::{GeneticKMeansConfig, GeneticKMeansConfigBuilder};
