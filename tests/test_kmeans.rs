use std::collections::HashSet;

use genetic_kmeans::{
    error::ClusteringError,
    kmeans::{FitStatus, KMeans, Point},
    rng::RandomNumberGenerator,
};

fn two_blob_dataset() -> Vec<Point> {
    vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![10.0, 10.0],
        vec![10.0, 11.0],
    ]
}

#[test]
fn test_two_well_separated_blobs() {
    let dataset = two_blob_dataset();
    let centroids = vec![vec![1.0, 1.0], vec![9.0, 9.0]];
    let mut engine = KMeans::with_centroids(&dataset, centroids).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(1);

    let clusters = engine.fit(&mut rng);

    assert_eq!(engine.status(), FitStatus::Converged);
    assert!(engine.epochs() <= 10, "expected a handful of epochs");
    assert_eq!(clusters.len(), 2);

    // Grouping must match up to label swap.
    let groups: Vec<HashSet<usize>> = clusters
        .iter()
        .map(|cluster| cluster.points.iter().copied().collect())
        .collect();
    assert!(groups.contains(&HashSet::from([0, 1])));
    assert!(groups.contains(&HashSet::from([2, 3])));

    // Converged centroids sit at the blob means.
    let mut means: Vec<Vec<f64>> = engine.centroids().to_vec();
    means.sort_by(|a, b| a[0].partial_cmp(&b[0]).unwrap());
    assert_eq!(means[0], vec![0.0, 0.5]);
    assert_eq!(means[1], vec![10.0, 10.5]);
}

#[test]
fn test_fit_is_idempotent_on_its_own_output() {
    let dataset = two_blob_dataset();
    let mut rng = RandomNumberGenerator::from_seed(2);

    let mut first = KMeans::with_centroids(&dataset, vec![vec![1.0, 1.0], vec![9.0, 9.0]]).unwrap();
    let first_clusters = first.fit(&mut rng);

    let mut second = KMeans::with_centroids(&dataset, first.centroids().to_vec()).unwrap();
    let second_clusters = second.fit(&mut rng);

    assert_eq!(second.epochs(), 1);
    assert_eq!(second.status(), FitStatus::Converged);
    assert_eq!(second_clusters, first_clusters);
    assert_eq!(second.centroids(), first.centroids());
}

#[test]
fn test_clusters_partition_the_dataset() {
    let dataset: Vec<Point> = (0..20)
        .map(|i| vec![f64::from(i), f64::from(i % 7) * 3.0])
        .collect();
    let mut engine = KMeans::new(4, &dataset).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(3);

    let clusters = engine.fit(&mut rng);

    let mut seen = HashSet::new();
    for cluster in &clusters {
        assert!(!cluster.points.is_empty());
        for &index in &cluster.points {
            assert!(index < dataset.len());
            assert!(seen.insert(index), "index {} assigned twice", index);
        }
    }
    // Every point lands in exactly one cluster.
    assert_eq!(seen.len(), dataset.len());
}

#[test]
fn test_single_point_dataset_converges_immediately() {
    let dataset = vec![vec![2.5, -1.0]];
    let mut engine = KMeans::new(1, &dataset).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(4);

    let clusters = engine.fit(&mut rng);

    assert_eq!(engine.epochs(), 1);
    assert_eq!(engine.status(), FitStatus::Converged);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].points, vec![0]);
}

#[test]
fn test_k_larger_than_dataset_prunes_empty_clusters() {
    let dataset = vec![vec![0.0], vec![1.0]];
    let mut engine = KMeans::new(5, &dataset).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(5);

    let clusters = engine.fit(&mut rng);

    assert!(clusters.len() <= 2);
    let total: usize = clusters.iter().map(|cluster| cluster.points.len()).sum();
    assert_eq!(total, 2);
}

#[test]
fn test_fit_converged_rejects_capped_run() {
    let dataset = two_blob_dataset();
    let mut engine = KMeans::with_centroids(&dataset, vec![vec![5.0, 5.0], vec![6.0, 6.0]])
        .unwrap()
        .with_max_iterations(1);
    let mut rng = RandomNumberGenerator::from_seed(6);

    let result = engine.fit_converged(&mut rng);
    assert!(matches!(
        result,
        Err(ClusteringError::NonConvergence { epochs: 1 })
    ));
}

#[test]
fn test_invalid_inputs_fail_fast() {
    let empty: Vec<Point> = Vec::new();
    assert!(matches!(
        KMeans::new(2, &empty),
        Err(ClusteringError::InvalidDataset(_))
    ));

    let ragged = vec![vec![1.0, 2.0], vec![3.0]];
    assert!(matches!(
        KMeans::new(2, &ragged),
        Err(ClusteringError::InvalidDataset(_))
    ));

    let dataset = two_blob_dataset();
    assert!(matches!(
        KMeans::new(0, &dataset),
        Err(ClusteringError::InvalidConfiguration(_))
    ));
}
