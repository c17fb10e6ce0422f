//! # K-Means Engine
//!
//! Classic Lloyd's iteration: assign every point to its nearest centroid,
//! recompute each centroid as the mean of its assigned points, and repeat
//! until nothing moves. The engine serves two masters: it is the standalone
//! clusterer of the public API, and it is the fitness function the genetic
//! search in [`crate::genetic`] runs on every candidate centroid set.
//!
//! Two deliberate hardenings over the textbook loop:
//!
//! - The convergence loop carries an iteration cap ([`DEFAULT_MAX_ITERATIONS`]
//!   unless overridden), so an oscillating assignment cannot spin forever.
//!   The outcome is reported through [`FitStatus`] rather than by never
//!   returning.
//! - Dataset and configuration are validated at construction, so the numeric
//!   core never has to reason about empty or ragged input.
//!
//! ## Example
//!
//! ```rust
//! use genetic_kmeans::kmeans::KMeans;
//! use genetic_kmeans::rng::RandomNumberGenerator;
//!
//! let dataset = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 10.0],
//!     vec![10.0, 11.0],
//! ];
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let mut engine = KMeans::new(2, &dataset).unwrap();
//! let clusters = engine.fit(&mut rng);
//! assert!(clusters.len() <= 2);
//! ```

use tracing::trace;

use crate::distance::euclidean;
use crate::error::{ClusteringError, Result};
use crate::rng::RandomNumberGenerator;

/// A single observation: an ordered sequence of coordinates of fixed
/// dimension. The dimension is inferred from the dataset's first point.
pub type Point = Vec<f64>;

/// Iteration cap applied when the caller does not choose one explicitly.
pub const DEFAULT_MAX_ITERATIONS: usize = 300;

/// Convergence state of a [`KMeans`] engine.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStatus {
    /// `fit` has not run, or is mid-iteration.
    Running,
    /// The last update step moved no centroid.
    Converged,
    /// The iteration cap was hit while centroids were still moving; the
    /// engine holds the most recent assignment.
    IterationLimitReached,
}

/// One cluster of a fitted model: the index of its centroid and the dataset
/// indices assigned to it. Cluster membership is reported as indices into the
/// original dataset, never as copies of the points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// Index of the centroid this cluster formed around.
    pub centroid: usize,
    /// Indices of the dataset points assigned to that centroid.
    pub points: Vec<usize>,
}

/// Clusters a dataset into `k` groups centered around mean points.
///
/// The dataset is borrowed for the lifetime of the engine and never mutated;
/// the centroid set is owned and updated in place across `fit` iterations,
/// which is why one engine instance must not be shared between concurrent
/// runs.
#[derive(Debug, Clone)]
pub struct KMeans<'a> {
    k: usize,
    dataset: &'a [Point],
    centroids: Vec<Point>,
    dimension: usize,
    max_iterations: usize,
    epochs: usize,
    status: FitStatus,
    inertia: f64,
}

/// Checks that a dataset is non-empty and rectangular, returning its
/// dimension.
pub(crate) fn validate_dataset(dataset: &[Point]) -> Result<usize> {
    let first = dataset.first().ok_or_else(|| {
        ClusteringError::InvalidDataset("dataset cannot be empty".to_string())
    })?;
    let dimension = first.len();
    if dimension == 0 {
        return Err(ClusteringError::InvalidDataset(
            "points must have at least one dimension".to_string(),
        ));
    }
    for (index, point) in dataset.iter().enumerate() {
        if point.len() != dimension {
            return Err(ClusteringError::InvalidDataset(format!(
                "point {} has dimension {}, expected {}",
                index,
                point.len(),
                dimension
            )));
        }
    }
    Ok(dimension)
}

impl<'a> KMeans<'a> {
    /// Creates a new engine that will draw its own initial centroids.
    ///
    /// # Errors
    ///
    /// Returns [`ClusteringError::InvalidConfiguration`] if `k` is zero and
    /// [`ClusteringError::InvalidDataset`] if the dataset is empty or ragged.
    pub fn new(k: usize, dataset: &'a [Point]) -> Result<Self> {
        if k == 0 {
            return Err(ClusteringError::InvalidConfiguration(
                "k must be at least 1".to_string(),
            ));
        }
        let dimension = validate_dataset(dataset)?;
        Ok(Self {
            k,
            dataset,
            centroids: Vec::new(),
            dimension,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            epochs: 0,
            status: FitStatus::Running,
            inertia: 0.0,
        })
    }

    /// Creates a new engine with a fixed initial centroid set; `k` is the
    /// length of that set.
    ///
    /// This is the entry point the genetic search uses: a genome *is* an
    /// initial centroid set, and its length encodes the candidate `k`.
    ///
    /// # Errors
    ///
    /// Returns [`ClusteringError::InvalidConfiguration`] if the centroid set
    /// is empty or any centroid's dimension disagrees with the dataset.
    pub fn with_centroids(dataset: &'a [Point], centroids: Vec<Point>) -> Result<Self> {
        let mut engine = Self::new(centroids.len(), dataset)?;
        for centroid in &centroids {
            if centroid.len() != engine.dimension {
                return Err(ClusteringError::InvalidConfiguration(format!(
                    "centroid has dimension {}, dataset has {}",
                    centroid.len(),
                    engine.dimension
                )));
            }
        }
        engine.centroids = centroids;
        Ok(engine)
    }

    /// Sets the iteration cap for the convergence loop.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// The target cluster count.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of assignment/update iterations executed by the last `fit`.
    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// Convergence state of the last `fit`.
    pub fn status(&self) -> FitStatus {
        self.status
    }

    /// The current centroid set (converged after a successful `fit`).
    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }

    /// Total squared distance between every clustered point and its assigned
    /// centroid at the end of the last `fit`. This is the quantity the
    /// genetic layer's fitness inverts.
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    /// Runs Lloyd's iteration to convergence (or the iteration cap) and
    /// returns the clusters that received at least one point. Centroid
    /// indices are preserved; centroids that end the run empty are dropped
    /// from the result but remain in [`KMeans::centroids`].
    pub fn fit(&mut self, rng: &mut RandomNumberGenerator) -> Vec<Cluster> {
        if self.centroids.is_empty() {
            self.centroids = self.select_random_centroids(rng);
        }

        self.epochs = 0;
        self.status = FitStatus::Running;

        let mut assignment;
        loop {
            assignment = self.assign_to_nearest_centroids();
            let moved = self.update_centroids(&assignment);
            self.epochs += 1;
            trace!(epoch = self.epochs, moved, "k-means epoch");

            if !moved {
                self.status = FitStatus::Converged;
                break;
            }
            if self.epochs >= self.max_iterations {
                self.status = FitStatus::IterationLimitReached;
                break;
            }
        }

        self.inertia = self.sum_squared_distances(&assignment);

        assignment
            .into_iter()
            .enumerate()
            .filter(|(_, points)| !points.is_empty())
            .map(|(centroid, points)| Cluster { centroid, points })
            .collect()
    }

    /// Like [`KMeans::fit`], but treats hitting the iteration cap as an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`ClusteringError::NonConvergence`] if the centroids were
    /// still moving when the cap was hit.
    pub fn fit_converged(&mut self, rng: &mut RandomNumberGenerator) -> Result<Vec<Cluster>> {
        let clusters = self.fit(rng);
        match self.status {
            FitStatus::IterationLimitReached => Err(ClusteringError::NonConvergence {
                epochs: self.epochs,
            }),
            _ => Ok(clusters),
        }
    }

    /// Draws `k` centroids by sampling each coordinate uniformly from the
    /// per-dimension [min, max] range observed in the dataset. Synthetic
    /// coordinates, not copies of dataset points.
    fn select_random_centroids(&self, rng: &mut RandomNumberGenerator) -> Vec<Point> {
        let mut min_values = vec![f64::INFINITY; self.dimension];
        let mut max_values = vec![f64::NEG_INFINITY; self.dimension];
        for point in self.dataset {
            for (dim, &value) in point.iter().enumerate() {
                min_values[dim] = min_values[dim].min(value);
                max_values[dim] = max_values[dim].max(value);
            }
        }

        (0..self.k)
            .map(|_| {
                (0..self.dimension)
                    // Inclusive range: a constant dimension collapses to a single value.
                    .map(|dim| rng.gen_range(min_values[dim]..=max_values[dim]))
                    .collect()
            })
            .collect()
    }

    /// Assigns every dataset point to its nearest centroid by Euclidean
    /// distance. Ties keep the lowest centroid index (strict `<`). Returns
    /// one bucket of point indices per centroid; buckets may be empty.
    fn assign_to_nearest_centroids(&self) -> Vec<Vec<usize>> {
        let mut assignment: Vec<Vec<usize>> = vec![Vec::new(); self.centroids.len()];
        for (point_index, point) in self.dataset.iter().enumerate() {
            let mut closest_centroid = 0;
            let mut closest_distance = f64::INFINITY;
            for (centroid_index, centroid) in self.centroids.iter().enumerate() {
                let distance = euclidean(point, centroid);
                if distance < closest_distance {
                    closest_centroid = centroid_index;
                    closest_distance = distance;
                }
            }
            assignment[closest_centroid].push(point_index);
        }
        assignment
    }

    /// Moves every centroid with at least one assigned point to the mean of
    /// its points; empty centroids stay where they are and remain candidates
    /// for re-population in the next assignment step. Returns whether any
    /// centroid moved at all.
    fn update_centroids(&mut self, assignment: &[Vec<usize>]) -> bool {
        let mut updated = false;
        for (centroid_index, points) in assignment.iter().enumerate() {
            if points.is_empty() {
                continue;
            }
            let mut mean = vec![0.0; self.dimension];
            for &point_index in points {
                for (dim, value) in self.dataset[point_index].iter().enumerate() {
                    mean[dim] += value;
                }
            }
            for value in &mut mean {
                *value /= points.len() as f64;
            }
            if euclidean(&mean, &self.centroids[centroid_index]) != 0.0 {
                self.centroids[centroid_index] = mean;
                updated = true;
            }
        }
        updated
    }

    fn sum_squared_distances(&self, assignment: &[Vec<usize>]) -> f64 {
        assignment
            .iter()
            .enumerate()
            .flat_map(|(centroid_index, points)| {
                points.iter().map(move |&point_index| {
                    euclidean(&self.dataset[point_index], &self.centroids[centroid_index]).powi(2)
                })
            })
            .sum()
    }
}
