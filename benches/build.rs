// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Benchmarks for hypersphere builds.
//!
//! Throughput is reported in output points so that builds of different
//! dimensions are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hypersphere_pattern::{build_hypersphere, Coord};

// ============================================================================
// Single shells
// ============================================================================

fn bench_single_shell(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_shell");

    let cases: [(usize, Coord); 4] = [(2, 64), (2, 256), (3, 16), (4, 6)];
    for (dimension, radius) in cases {
        let points = build_hypersphere(dimension, &[radius])
            .map(|p| p.len())
            .unwrap_or(0);
        group.throughput(Throughput::Elements(points as u64));
        group.bench_with_input(
            BenchmarkId::new(format!("{}d", dimension), radius),
            &radius,
            |b, &radius| b.iter(|| build_hypersphere(black_box(dimension), &[black_box(radius)])),
        );
    }

    group.finish();
}

// ============================================================================
// Layered shells
// ============================================================================

fn bench_layered(c: &mut Criterion) {
    let mut group = c.benchmark_group("layered");

    let cases: [(usize, Vec<Coord>); 3] = [
        (2, vec![64, 48, 32, 16]),
        (3, vec![16, 8]),
        (4, vec![6, 3, 1]),
    ];
    for (dimension, radii) in cases {
        let label = radii
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("-");
        group.bench_with_input(
            BenchmarkId::new(format!("{}d", dimension), label),
            &radii,
            |b, radii| b.iter(|| build_hypersphere(black_box(dimension), black_box(radii))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_shell, bench_layered);
criterion_main!(benches);
