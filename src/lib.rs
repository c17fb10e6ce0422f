pub mod distance;
pub mod error;
pub mod genetic;
pub mod kmeans;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{ClusteringError, Result};
pub use genetic::{GeneticKMeans, GeneticKMeansConfig};
pub use kmeans::{Cluster, FitStatus, KMeans, Point};
