//! Insert and range-count throughput of the 2D range tree

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rangetree2d::{Point, RangeTree, Rectangle};
use std::time::Duration;

fn random_points(n: usize, seed: u64) -> Vec<Point<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| Point::new(rng.gen_range(0..1_000_000), rng.gen_range(0..1_000_000))).collect()
}

/// Benchmark incremental insertion, random and x-sorted
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    group.measurement_time(Duration::from_secs(10));

    for &size in &[1_000usize, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        let points = random_points(size, 1);
        let mut sorted = points.clone();
        sorted.sort();

        for alpha in [0.6, 0.75, 0.9] {
            group.bench_with_input(BenchmarkId::new(format!("random/alpha={alpha}"), size), &points, |b, points| {
                b.iter(|| {
                    let mut tree = RangeTree::new(alpha).unwrap();
                    for p in points {
                        tree.insert(*p);
                    }
                    black_box(tree.len())
                });
            });
        }
        group.bench_with_input(BenchmarkId::new("sorted/alpha=0.75", size), &sorted, |b, points| {
            b.iter(|| {
                let mut tree = RangeTree::new(0.75).unwrap();
                for p in points {
                    tree.insert(*p);
                }
                black_box(tree.len())
            });
        });
    }

    group.finish();
}

/// Benchmark bulk construction
fn bench_from_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_points");
    for &size in &[1_000usize, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || random_points(size, 2),
                |points| black_box(RangeTree::from_points(points, 0.75).unwrap()),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

/// Benchmark range counting against a prebuilt tree
fn bench_range_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_count");
    let tree = RangeTree::from_points(random_points(100_000, 3), 0.75).unwrap();

    let mut rng = StdRng::seed_from_u64(4);
    let queries: Vec<Rectangle<i64>> = (0..256)
        .map(|_| {
            let a = Point::new(rng.gen_range(0..1_000_000), rng.gen_range(0..1_000_000));
            let b = Point::new(rng.gen_range(0..1_000_000), rng.gen_range(0..1_000_000));
            Rectangle::from_corners(a, b)
        })
        .collect();

    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("random_rectangles", |b| {
        b.iter(|| queries.iter().map(|q| tree.range_count_rect(black_box(q))).sum::<usize>());
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_from_points, bench_range_count);
criterion_main!(benches);
