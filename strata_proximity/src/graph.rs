// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap edges and constraint edges.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;
use log::debug;
use strata_components::{Axis, Bounded, Edge, SeparationConstraint};

use crate::config::ProximityConfig;
use crate::error::ProximityError;
use crate::grid::{Grid, MAX_CELLS_PER_RECT};

/// Builds edge lists for [`strata_components::decompose`] from rectangle positions.
#[derive(Copy, Clone, Debug)]
pub struct ProximityGraph {
    config: ProximityConfig,
}

impl ProximityGraph {
    /// Create a builder, validating `config`.
    ///
    /// # Errors
    ///
    /// [`ProximityError::InvalidPadding`] or [`ProximityError::InvalidCellSize`].
    pub fn new(config: ProximityConfig) -> Result<Self, ProximityError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &ProximityConfig {
        &self.config
    }

    /// Edges between every pair of rectangles separated by at most `padding` on both axes.
    ///
    /// Overlapping and touching rectangles are always adjacent. Each pair appears once as
    /// `Edge { u: i, v: j }` with `i < j`, sorted by `(i, j)`.
    pub fn overlap_edges<R: Bounded>(&self, rects: &[R]) -> Vec<Edge> {
        let half = self.config.padding * 0.5;
        let boxes: Vec<Rect> = rects
            .iter()
            .map(|r| r.bounds().abs().inflate(half, half))
            .collect();
        if boxes.len() < 2 {
            return Vec::new();
        }

        let cell = self
            .config
            .cell_size
            .unwrap_or_else(|| derived_cell_size(&boxes));
        let (edges, grid, oversized) = sweep(&boxes, cell);
        debug!(
            "overlap graph: {} rects, cell {cell}, {} cells, {oversized} oversized, {} edges",
            boxes.len(),
            grid.cell_count(),
            edges.len()
        );
        edges
    }

    /// Overlap edges followed by an edge for every constrained pair they do not already join.
    ///
    /// The result satisfies the connectivity precondition of
    /// [`strata_components::decompose`] for `x_constraints` and `y_constraints`.
    ///
    /// # Errors
    ///
    /// [`ProximityError::ConstraintOutOfRange`] if a constraint names a missing rectangle.
    pub fn build<R: Bounded>(
        &self,
        rects: &[R],
        x_constraints: &[SeparationConstraint],
        y_constraints: &[SeparationConstraint],
    ) -> Result<Vec<Edge>, ProximityError> {
        let edges = self.overlap_edges(rects);
        connect_constraints(rects.len(), edges, x_constraints, y_constraints)
    }
}

/// Append an edge for each constrained pair that `edges` does not already join.
///
/// Input edges keep their order and come first. New edges follow in constraint order,
/// X before Y, oriented `left -> right`. Constraints from a node to itself add nothing.
///
/// # Errors
///
/// [`ProximityError::ConstraintOutOfRange`] if a constraint names a node outside `0..len`.
pub fn connect_constraints(
    len: usize,
    mut edges: Vec<Edge>,
    x_constraints: &[SeparationConstraint],
    y_constraints: &[SeparationConstraint],
) -> Result<Vec<Edge>, ProximityError> {
    let mut joined: BTreeSet<(usize, usize)> =
        edges.iter().map(|e| (e.u.min(e.v), e.u.max(e.v))).collect();
    let before = edges.len();
    for (axis, constraints) in [(Axis::X, x_constraints), (Axis::Y, y_constraints)] {
        for (position, c) in constraints.iter().enumerate() {
            for index in [c.left, c.right] {
                if index >= len {
                    return Err(ProximityError::ConstraintOutOfRange {
                        axis,
                        position,
                        index,
                        len,
                    });
                }
            }
            if c.left != c.right && joined.insert((c.left.min(c.right), c.left.max(c.right))) {
                edges.push(Edge::new(c.left, c.right));
            }
        }
    }
    debug!(
        "constraint edges: {} added to {before}",
        edges.len() - before
    );
    Ok(edges)
}

/// Find every touching pair among `boxes` with a grid of `cell`-sized squares.
///
/// Boxes covering more than [`MAX_CELLS_PER_RECT`] cells are kept out of the grid and tested
/// against every other box instead. Returns the sorted edges, the grid, and the number of
/// boxes that were too large for it.
fn sweep(boxes: &[Rect], cell: f64) -> (Vec<Edge>, Grid, usize) {
    let (origin_x, origin_y) = boxes.iter().fold((f64::INFINITY, f64::INFINITY), |acc, b| {
        (acc.0.min(b.x0), acc.1.min(b.y0))
    });
    let mut grid = Grid::new(cell, origin_x, origin_y);
    let fits: Vec<bool> = boxes.iter().map(|b| grid.fits(b)).collect();
    // `tested[j] == i` once pair (j, i) has been checked.
    let mut tested = vec![usize::MAX; boxes.len()];
    let mut edges = Vec::new();
    let mut oversized = 0_usize;

    for (i, b) in boxes.iter().enumerate() {
        if fits[i] {
            grid.for_each_candidate(b, |j| {
                if tested[j] == i {
                    return;
                }
                tested[j] = i;
                if touches(&boxes[j], b) {
                    edges.push(Edge::new(j, i));
                }
            });
            grid.insert(i, b);
        } else {
            oversized += 1;
            // Pairs of two oversized boxes are tested once, from the later box.
            for (j, other) in boxes.iter().enumerate() {
                if j != i && (fits[j] || j < i) && touches(other, b) {
                    edges.push(Edge::new(i.min(j), i.max(j)));
                }
            }
        }
    }
    edges.sort_unstable_by_key(|e| (e.u, e.v));
    (edges, grid, oversized)
}

/// Closed-interval intersection on both axes, so touching boxes count.
fn touches(a: &Rect, b: &Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Mean of the larger side of each box, falling back to `1.0` for degenerate input.
fn derived_cell_size(boxes: &[Rect]) -> f64 {
    let total: f64 = boxes.iter().map(|b| b.width().max(b.height())).sum();
    #[allow(
        clippy::cast_precision_loss,
        reason = "Rectangle counts stay far below 2^52."
    )]
    let mean = total / boxes.len() as f64;
    if mean.is_finite() && mean > 0.0 {
        mean
    } else {
        1.0
    }
}
