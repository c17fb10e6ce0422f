//! # GeneticKMeans
//!
//! Evolutionary search for a good K-Means starting configuration, including
//! the cluster count itself. Each genome is a complete initial centroid set
//! drawn from the dataset; fitness is the reciprocal of the inertia K-Means
//! reaches when started from that set. One generation runs tournament
//! selection, uniform crossover, point-replacement mutation, and elitist
//! truncation back to the configured population size.
//!
//! ## Example
//!
//! ```rust
//! use genetic_kmeans::genetic::{GeneticKMeans, GeneticKMeansConfig};
//! use genetic_kmeans::rng::RandomNumberGenerator;
//!
//! let dataset = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 10.0],
//!     vec![10.0, 11.0],
//! ];
//! let config = GeneticKMeansConfig::builder()
//!     .population_size(10)
//!     .num_generations(5)
//!     .k_range(2, 2)
//!     .build();
//! let search = GeneticKMeans::new(&dataset, config).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let centroids = search.centroids(&mut rng).unwrap();
//! assert_eq!(centroids.len(), 2);
//! ```

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::debug;

use crate::error::{ClusteringError, Result};
use crate::kmeans::{validate_dataset, Cluster, KMeans, Point};
use crate::rng::RandomNumberGenerator;

use super::options::GeneticKMeansConfig;

/// A candidate solution: a complete initial centroid set whose length encodes
/// the cluster count `k`.
pub type Genome = Vec<Point>;

/// Searches for the best initial centroid set for the K-Means algorithm.
pub struct GeneticKMeans<'a> {
    dataset: &'a [Point],
    config: GeneticKMeansConfig,
}

impl<'a> GeneticKMeans<'a> {
    /// Creates a new search over the given dataset.
    ///
    /// # Errors
    ///
    /// Returns [`ClusteringError::InvalidConfiguration`] if the configuration
    /// fails [`GeneticKMeansConfig::validate`], and
    /// [`ClusteringError::InvalidDataset`] if the dataset is empty or ragged.
    pub fn new(dataset: &'a [Point], config: GeneticKMeansConfig) -> Result<Self> {
        config.validate()?;
        validate_dataset(dataset)?;
        Ok(Self { dataset, config })
    }

    /// Runs the full generational search and returns the best centroid set
    /// observed across *all* generations, not merely the final champion.
    pub fn centroids(&self, rng: &mut RandomNumberGenerator) -> Result<Vec<Point>> {
        let mut population = self.initialize_population(rng);
        let mut fitness = self.evaluate_population(&population)?;

        let mut best_genome: Genome = Vec::new();
        // Fitness is strictly positive, so the first generation always
        // replaces this.
        let mut best_fitness = 0.0_f64;

        for generation in 0..self.config.num_generations() {
            let parents = self.select_parents(&population, &fitness, rng);
            let mut offspring = self.crossover(&parents, rng);
            self.mutate(&mut offspring, rng);
            let offspring_fitness = self.evaluate_population(&offspring)?;

            // Elitist truncation over parents and offspring combined.
            let mut scored: Vec<(Genome, f64)> = population
                .drain(..)
                .zip(fitness.drain(..))
                .chain(offspring.into_iter().zip(offspring_fitness))
                .collect();
            scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
            scored.truncate(self.config.population_size());

            let champion_fitness = scored[0].1;
            if champion_fitness > best_fitness {
                best_fitness = champion_fitness;
                best_genome = scored[0].0.clone();
            }
            debug!(generation, champion_fitness, best_fitness, "generation complete");

            let (next_population, next_fitness): (Vec<Genome>, Vec<f64>) =
                scored.into_iter().unzip();
            population = next_population;
            fitness = next_fitness;
        }

        Ok(best_genome)
    }

    /// Convenience wrapper: runs the search and then clusters the dataset
    /// once with the winning centroid set, returning the converged centroids
    /// together with the per-cluster point indices.
    pub fn cluster(
        &self,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Vec<Point>, Vec<Cluster>)> {
        let centroids = self.centroids(rng)?;
        let mut engine = KMeans::with_centroids(self.dataset, centroids)?
            .with_max_iterations(self.config.max_kmeans_iterations());
        let clusters = engine.fit(rng);
        Ok((engine.centroids().to_vec(), clusters))
    }

    /// Builds the initial population: each genome has an independently random
    /// length in `[k_min, k_max]`, with that many centroids drawn uniformly
    /// (with replacement) from existing dataset points.
    fn initialize_population(&self, rng: &mut RandomNumberGenerator) -> Vec<Genome> {
        (0..self.config.population_size())
            .map(|_| {
                let k = rng.gen_range(self.config.k_min()..=self.config.k_max());
                (0..k)
                    .map(|_| self.dataset[rng.gen_index(self.dataset.len())].clone())
                    .collect()
            })
            .collect()
    }

    /// Scores one genome: a fresh K-Means engine starts from the genome's
    /// centroids, converges, and the fitness is the reciprocal of its
    /// inertia. A zero-inertia (perfect) fit maps to `f64::MAX` instead of
    /// dividing to infinity.
    fn evaluate_fitness(&self, genome: &Genome) -> Result<f64> {
        // A fresh engine per evaluation: `fit` mutates the centroid set in
        // place, and the genome must survive unchanged for later generations.
        let mut engine = KMeans::with_centroids(self.dataset, genome.clone())?
            .with_max_iterations(self.config.max_kmeans_iterations());
        // The engine draws randomness only when inventing its own centroids,
        // which a genome-seeded run never does.
        let mut local_rng = RandomNumberGenerator::new();
        engine.fit(&mut local_rng);

        let inertia = engine.inertia();
        if !inertia.is_finite() {
            return Err(ClusteringError::FitnessCalculation(format!(
                "non-finite inertia: {inertia}"
            )));
        }
        if inertia == 0.0 {
            return Ok(f64::MAX);
        }
        Ok(1.0 / inertia)
    }

    /// Scores every genome, in parallel once the population is large enough
    /// to make it worthwhile.
    fn evaluate_population(&self, population: &[Genome]) -> Result<Vec<f64>> {
        if population.len() >= self.config.parallel_threshold() {
            population
                .par_iter()
                .map(|genome| self.evaluate_fitness(genome))
                .collect()
        } else {
            population
                .iter()
                .map(|genome| self.evaluate_fitness(genome))
                .collect()
        }
    }

    /// Produces `population_size / 2` parents by that many independent binary
    /// tournaments: two genomes drawn uniformly with replacement (a genome
    /// may face itself), keeping the fitter one.
    fn select_parents(
        &self,
        population: &[Genome],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Vec<Genome> {
        (0..self.config.population_size() / 2)
            .map(|_| {
                let first = rng.gen_index(population.len());
                let second = rng.gen_index(population.len());
                if fitness[first] > fitness[second] {
                    population[first].clone()
                } else {
                    population[second].clone()
                }
            })
            .collect()
    }

    /// Pairs up consecutive parents (a trailing unpaired parent is dropped)
    /// and builds one child per pair by choosing each centroid slot from
    /// either parent with equal probability.
    ///
    /// Crossover is defined only between genomes encoding the same `k`;
    /// mixed-length pairs produce no child.
    fn crossover(&self, parents: &[Genome], rng: &mut RandomNumberGenerator) -> Vec<Genome> {
        let mut offspring = Vec::with_capacity(parents.len() / 2);
        for pair in parents.chunks_exact(2) {
            let (first, second) = (&pair[0], &pair[1]);
            if first.len() != second.len() {
                continue;
            }
            let child: Genome = first
                .iter()
                .zip(second.iter())
                .map(|(a, b)| if rng.gen_bool(0.5) { a.clone() } else { b.clone() })
                .collect();
            offspring.push(child);
        }
        offspring
    }

    /// With probability `mutation_rate` per centroid slot, replaces the slot
    /// with a uniformly drawn dataset point. Structural diversity injection,
    /// not a gradient step.
    fn mutate(&self, offspring: &mut [Genome], rng: &mut RandomNumberGenerator) {
        for child in offspring.iter_mut() {
            for slot in child.iter_mut() {
                if rng.gen_bool(self.config.mutation_rate()) {
                    *slot = self.dataset[rng.gen_index(self.dataset.len())].clone();
                }
            }
        }
    }
}
