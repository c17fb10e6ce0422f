use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genetic_kmeans::{
    genetic::{GeneticKMeans, GeneticKMeansConfig},
    kmeans::{KMeans, Point},
    rng::RandomNumberGenerator,
};

/// Four well-separated Gaussian-ish blobs laid out on a grid.
fn blob_dataset(points_per_blob: usize) -> Vec<Point> {
    let mut rng = RandomNumberGenerator::from_seed(2024);
    let mut dataset = Vec::with_capacity(points_per_blob * 4);
    for (cx, cy) in [(0.0, 0.0), (20.0, 0.0), (0.0, 20.0), (20.0, 20.0)] {
        for _ in 0..points_per_blob {
            let dx: f64 = rng.gen_range(-1.0..1.0);
            let dy: f64 = rng.gen_range(-1.0..1.0);
            dataset.push(vec![cx + dx, cy + dy]);
        }
    }
    dataset
}

fn bench_kmeans_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_fit");
    for size in [25, 100, 250].iter() {
        let dataset = blob_dataset(*size);
        group.bench_function(&format!("kmeans_fit_{}", size * 4), |b| {
            b.iter(|| {
                let mut rng = RandomNumberGenerator::from_seed(7);
                let mut engine = KMeans::new(4, black_box(&dataset)).unwrap();
                let clusters = engine.fit(&mut rng);
                black_box(clusters);
            })
        });
    }
    group.finish();
}

fn bench_genetic_search(c: &mut Criterion) {
    let dataset = blob_dataset(25);
    let mut group = c.benchmark_group("genetic_search");
    for generations in [5, 20].iter() {
        group.bench_function(&format!("genetic_search_{}_generations", generations), |b| {
            b.iter(|| {
                let config = GeneticKMeansConfig::builder()
                    .population_size(10)
                    .num_generations(*generations)
                    .k_range(2, 6)
                    .build();
                let search = GeneticKMeans::new(black_box(&dataset), config).unwrap();
                let mut rng = RandomNumberGenerator::from_seed(7);
                let centroids = search.centroids(&mut rng).unwrap();
                black_box(centroids);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kmeans_fit, bench_genetic_search);
criterion_main!(benches);
