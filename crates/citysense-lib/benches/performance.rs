//! Performance benchmarks for citysense-lib
//!
//! Run with: cargo bench --package citysense-lib

use citysense_lib::{
    EstimatorConfig, GeoPoint, PathQuery, RoadNetwork, RoadSegment, TraversalStrategy,
    estimate_many, estimate_path, snap_to_network,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Square lattice of `side` x `side` vertices, one segment per lattice edge
fn generate_grid_network(side: usize, strategy: TraversalStrategy) -> RoadNetwork {
    let step = 0.001;
    let mut segments = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let lat = 28.5 + row as f64 * step;
            let lng = 77.1 + col as f64 * step;
            if col + 1 < side {
                segments.push(RoadSegment::from_coords(&[(lat, lng), (lat, lng + step)], 50));
            }
            if row + 1 < side {
                segments.push(RoadSegment::from_coords(&[(lat, lng), (lat + step, lng)], 50));
            }
        }
    }
    let config = EstimatorConfig {
        strategy,
        ..Default::default()
    };
    RoadNetwork::with_config(segments, config).unwrap()
}

/// Queries spread over the Delhi demo area
fn generate_queries(count: usize) -> Vec<PathQuery> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            PathQuery::new(
                GeoPoint::new(28.60 + t * 0.05, 77.20 + (t * 20.0).sin() * 0.02),
                GeoPoint::new(28.65 - t * 0.05, 77.24 - (t * 30.0).cos() * 0.02),
            )
        })
        .collect()
}

// ============================================================================
// Core Benchmarks
// ============================================================================

fn bench_snap(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap");
    let delhi = RoadNetwork::delhi();
    let query = GeoPoint::new(28.6250, 77.2210);

    group.bench_function("delhi", |b| {
        b.iter(|| snap_to_network(query, &delhi));
    });

    for side in [10usize, 40] {
        let network = generate_grid_network(side, TraversalStrategy::SegmentWalk);
        group.throughput(Throughput::Elements(network.info().vertex_count as u64));
        group.bench_with_input(BenchmarkId::new("grid", side), &network, |b, network| {
            b.iter(|| snap_to_network(query, network));
        });
    }

    group.finish();
}

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");

    let delhi = RoadNetwork::delhi();
    let start = GeoPoint::new(28.6139, 77.2090);
    let end = GeoPoint::new(28.6439, 77.2390);
    group.bench_function("delhi_walk", |b| {
        b.iter(|| estimate_path(start, end, &delhi));
    });

    for strategy in [TraversalStrategy::SegmentWalk, TraversalStrategy::ShortestHops] {
        let network = generate_grid_network(40, strategy);
        let start = GeoPoint::new(28.5, 77.1);
        let end = GeoPoint::new(28.539, 77.139);
        group.bench_with_input(
            BenchmarkId::new("grid_40", format!("{strategy:?}")),
            &network,
            |b, network| {
                b.iter(|| estimate_path(start, end, network));
            },
        );
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(20);

    let delhi = RoadNetwork::delhi();
    let queries = generate_queries(1_000);

    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("measure_1k_parallel", |b| {
        b.iter(|| estimate_many(&queries, &delhi));
    });

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    group.sample_size(20);

    group.bench_function("grid_40", |b| {
        b.iter(|| generate_grid_network(40, TraversalStrategy::SegmentWalk));
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_snap,
    bench_estimate,
    bench_batch,
    bench_construction,
);

criterion_main!(benches);
