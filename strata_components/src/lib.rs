// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Components: split a constraint layout problem into independent subproblems.
//!
//! Constraint-based diagram layout works on a set of positioned rectangles, a proximity graph
//! over them, and one-dimensional separation constraints per axis
//! (`pos(left) + gap <= pos(right)`).
//! When the proximity graph is disconnected, each connected piece can be solved on its own.
//! [`decompose`] finds those pieces and hands each one back as a [`Component`] whose edges and
//! constraints are renumbered to dense local indices.
//!
//! - Adjacency is built from the edge list, keeping edge order.
//! - Components are discovered by an iterative depth-first walk; roots are the smallest
//!   unvisited id, neighbors are expanded in edge order, so the output is deterministic.
//! - Every edge and every constraint is rewritten into the local indices of the one component
//!   that owns both of its endpoints.
//!
//! ## Not a solver
//!
//! This crate does not move anything. It does not solve constraints, produce coordinates, or
//! build the proximity graph. The graph is expected to come from upstream (for example
//! `strata_proximity`), and it must connect every pair of nodes that a constraint links.
//! A constraint whose endpoints end up in different components is reported as
//! [`DecomposeError::ConstraintSpansComponents`].
//!
//! ## Ownership
//!
//! Rectangles stay with the caller. The crate is generic over the rectangle type `R`, and a
//! [`Component`] borrows `&R` from the slice passed in, so the borrow checker keeps the
//! rectangles alive for as long as the components are used. All traversal state is local to
//! one call; separate calls may run on separate threads.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use strata_components::{Edge, SeparationConstraint, decompose};
//!
//! let rects: Vec<Rect> = (0..6)
//!     .map(|i| Rect::from_origin_size((i as f64 * 20.0, 0.0), (10.0, 10.0)))
//!     .collect();
//! // Two disjoint triangles.
//! let edges = [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)].map(Edge::from);
//! let xs = [SeparationConstraint::new(0, 1, 10.0)];
//!
//! let components = decompose(&rects, &edges, &xs, &[]).unwrap();
//! assert_eq!(components.len(), 2);
//! assert_eq!(components[0].node_ids(), &[0, 1, 2]);
//! assert_eq!(components[0].x_constraints(), &[SeparationConstraint::new(0, 1, 10.0)]);
//! assert_eq!(components[1].node_ids(), &[3, 4, 5]);
//! assert!(components[1].x_constraints().is_empty());
//! ```
//!
//! Constraints that the edges do not connect are rejected:
//!
//! ```rust
//! use kurbo::Rect;
//! use strata_components::{DecomposeError, Edge, SeparationConstraint, decompose};
//!
//! let rects = [Rect::ZERO; 4];
//! let edges = [Edge::new(0, 1), Edge::new(2, 3)];
//! let xs = [SeparationConstraint::new(0, 3, 5.0)];
//! let err = decompose(&rects, &edges, &xs, &[]).unwrap_err();
//! assert!(matches!(err, DecomposeError::ConstraintSpansComponents { .. }));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adjacency;
mod component;
mod error;
mod extract;
mod index_map;
mod partition;
mod types;

use alloc::vec::Vec;

use log::debug;

pub use component::Component;
pub use error::{DecomposeError, Site};
pub use types::{Axis, Bounded, Edge, SeparationConstraint};

use adjacency::Adjacency;
use extract::{Extraction, extract};
use partition::{partition_constraints, partition_edges};

/// Split `rects` into connected components of the graph given by `edges`.
///
/// Node ids are positions in `rects`. `x_constraints` and `y_constraints` are separation
/// constraints over those ids. Components come back in discovery order, which is ascending
/// order of the smallest global id each contains. Within a component, local indices follow the
/// depth-first visiting order; local edges and constraints keep their input order.
///
/// An empty `rects` yields no components.
///
/// # Errors
///
/// - [`DecomposeError::InvalidIndex`] if an edge or constraint names an id outside
///   `0..rects.len()`.
/// - [`DecomposeError::ConstraintSpansComponents`] if a constraint's endpoints are not
///   connected by `edges`.
///
/// Either error fails the whole call.
pub fn decompose<'a, R>(
    rects: &'a [R],
    edges: &[Edge],
    x_constraints: &[SeparationConstraint],
    y_constraints: &[SeparationConstraint],
) -> Result<Vec<Component<'a, R>>, DecomposeError> {
    let adjacency = Adjacency::build(rects.len(), edges)?;
    let Extraction {
        mut components,
        index_map,
    } = extract(rects, &adjacency);
    partition_edges(&mut components, &index_map, edges)?;
    partition_constraints(&mut components, &index_map, Axis::X, x_constraints)?;
    partition_constraints(&mut components, &index_map, Axis::Y, y_constraints)?;
    debug!(
        "decomposed {} nodes, {} edges, {}+{} constraints into {} components",
        rects.len(),
        edges.len(),
        x_constraints.len(),
        y_constraints.len(),
        components.len()
    );
    Ok(components)
}
