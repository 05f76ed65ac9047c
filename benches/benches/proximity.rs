// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use strata_benches::Rng;
use strata_components::decompose;
use strata_proximity::{ProximityConfig, ProximityGraph};

fn gen_random_rects(count: usize, max_w: f64, max_h: f64, rect_w: f64, rect_h: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.next_f64() * (max_w - rect_w).max(1.0);
        let y0 = rng.next_f64() * (max_h - rect_h).max(1.0);
        out.push(Rect::from_origin_size((x0, y0), (rect_w, rect_h)));
    }
    out
}

fn gen_clustered_rects(clusters: usize, per_cluster: usize, spread: f64) -> Vec<Rect> {
    let mut rng = Rng::new(0x1234_5678_9ABC_DEF0);
    let mut out = Vec::with_capacity(clusters * per_cluster);
    for _ in 0..clusters {
        let cx = rng.next_f64() * 20_000.0;
        let cy = rng.next_f64() * 20_000.0;
        for _ in 0..per_cluster {
            let x0 = cx + rng.next_f64() * spread;
            let y0 = cy + rng.next_f64() * spread;
            out.push(Rect::from_origin_size((x0, y0), (12.0, 8.0)));
        }
    }
    out
}

fn bench_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap_edges");
    let rects = gen_random_rects(10_000, 4_000.0, 4_000.0, 16.0, 16.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    for &padding in &[0.0, 8.0] {
        let graph = ProximityGraph::new(ProximityConfig::with_padding(padding)).unwrap();
        group.bench_function(format!("uniform_pad{padding}"), |b| {
            b.iter(|| black_box(graph.overlap_edges(&rects).len()));
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("proximity_then_decompose");
    let rects = gen_clustered_rects(256, 64, 128.0);
    let graph = ProximityGraph::new(ProximityConfig::with_padding(4.0)).unwrap();
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("clustered", |b| {
        b.iter(|| {
            let edges = graph.build(&rects, &[], &[]).unwrap();
            let components = decompose(&rects, &edges, &[], &[]).unwrap();
            black_box(components.len());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_overlap, bench_pipeline);
criterion_main!(benches);
