// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use strata_benches::Rng;
use strata_components::{Edge, SeparationConstraint, decompose};

fn gen_row_rects(n: usize) -> Vec<Rect> {
    (0..n)
        .map(|i| Rect::from_origin_size((i as f64 * 12.0, 0.0), (10.0, 10.0)))
        .collect()
}

/// One long path: worst case for traversal depth.
fn gen_chain(n: usize) -> (Vec<Edge>, Vec<SeparationConstraint>) {
    let edges = (0..n - 1).map(|i| Edge::new(i, i + 1)).collect();
    let xs = (0..n - 1)
        .map(|i| SeparationConstraint::new(i, i + 1, 2.0))
        .collect();
    (edges, xs)
}

/// `clusters` random clusters of `size` nodes, each a spanning path plus random chords.
fn gen_clusters(
    clusters: usize,
    size: usize,
    chords: usize,
) -> (Vec<Edge>, Vec<SeparationConstraint>) {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut edges = Vec::new();
    let mut xs = Vec::new();
    for c in 0..clusters {
        let base = c * size;
        for i in 1..size {
            edges.push(Edge::new(base + rng.below(i), base + i));
        }
        for _ in 0..chords {
            let a = base + rng.below(size);
            let b = base + rng.below(size);
            edges.push(Edge::new(a, b));
            xs.push(SeparationConstraint::new(a, b, 1.0));
        }
    }
    (edges, xs)
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose_chain");
    for &n in &[1_000_usize, 100_000] {
        let rects = gen_row_rects(n);
        let (edges, xs) = gen_chain(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n{n}"), |b| {
            b.iter(|| {
                let components = decompose(&rects, &edges, &xs, &[]).unwrap();
                black_box(components.len());
            });
        });
    }
    group.finish();
}

fn bench_clusters(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose_clusters");
    for &(clusters, size) in &[(1_000_usize, 16_usize), (64, 1_024)] {
        let n = clusters * size;
        let rects = gen_row_rects(n);
        let (edges, xs) = gen_clusters(clusters, size, size / 2);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("{clusters}x{size}"), |b| {
            b.iter(|| {
                let components = decompose(&rects, &edges, &xs, &[]).unwrap();
                black_box(components.len());
            });
        });
    }
    group.finish();
}

fn bench_isolated(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose_isolated");
    let rects = gen_row_rects(50_000);
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("no_edges", |b| {
        b.iter(|| {
            let components = decompose(&rects, &[], &[], &[]).unwrap();
            black_box(components.len());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_chain, bench_clusters, bench_isolated);
criterion_main!(benches);
