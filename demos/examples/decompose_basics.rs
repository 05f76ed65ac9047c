// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decompose two disjoint triangles and print each component's local problem.

use kurbo::Rect;
use strata_components::{Axis, Edge, SeparationConstraint, decompose};

fn main() {
    strata_demos::logging::init();

    let rects: Vec<Rect> = (0..7)
        .map(|i| Rect::from_origin_size((i as f64 * 30.0, 0.0), (20.0, 10.0)))
        .collect();
    let edges = [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)].map(Edge::from);
    let xs = [
        SeparationConstraint::new(0, 1, 10.0),
        SeparationConstraint::new(4, 5, 10.0),
    ];
    let ys = [SeparationConstraint::new(2, 1, 5.0)];

    let components = match decompose(&rects, &edges, &xs, &ys) {
        Ok(components) => components,
        Err(err) => {
            eprintln!("decomposition failed: {err}");
            return;
        }
    };

    for (i, c) in components.iter().enumerate() {
        println!(
            "component {i}: nodes {:?}, bounds {:?}",
            c.node_ids(),
            c.bounding_box()
        );
        println!("  edges: {:?}", c.edges());
        for axis in Axis::ALL {
            for sc in c.constraints(axis) {
                println!(
                    "  {axis}: local {} + {} <= local {}",
                    sc.left, sc.gap, sc.right
                );
            }
        }
    }

    // A constraint between the triangles has no owning component.
    let bad = [SeparationConstraint::new(0, 3, 10.0)];
    if let Err(err) = decompose(&rects, &edges, &bad, &[]) {
        println!("rejected: {err}");
    }
}
