// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a proximity graph from rectangle positions, then decompose it.

use kurbo::Rect;
use strata_components::{SeparationConstraint, decompose};
use strata_proximity::{ProximityConfig, ProximityGraph};

fn main() {
    strata_demos::logging::init();

    // Three loose clusters of boxes along a row.
    let mut rects = Vec::new();
    for cluster in 0..3 {
        let x = cluster as f64 * 200.0;
        for k in 0..4 {
            let dx = k as f64 * 18.0;
            let dy = (k % 2) as f64 * 6.0;
            rects.push(Rect::from_origin_size((x + dx, dy), (16.0, 10.0)));
        }
    }
    // Keep the last box of cluster 0 left of the first box of cluster 1.
    let xs = [SeparationConstraint::new(3, 4, 40.0)];

    let graph = match ProximityGraph::new(ProximityConfig::with_padding(4.0)) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("bad config: {err}");
            return;
        }
    };
    let overlap = graph.overlap_edges(&rects);
    println!("overlap edges: {}", overlap.len());

    let edges = match graph.build(&rects, &xs, &[]) {
        Ok(edges) => edges,
        Err(err) => {
            eprintln!("proximity graph failed: {err}");
            return;
        }
    };
    println!("edges with constraint links: {}", edges.len());

    match decompose(&rects, &edges, &xs, &[]) {
        Ok(components) => {
            for (i, c) in components.iter().enumerate() {
                println!(
                    "component {i}: {} nodes {:?}, {} x-constraints",
                    c.len(),
                    c.node_ids(),
                    c.x_constraints().len()
                );
            }
        }
        Err(err) => eprintln!("decomposition failed: {err}"),
    }
}
