// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Component`]: one independent subproblem of a decomposition.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::types::{Axis, Bounded, Edge, SeparationConstraint};

/// A maximal connected subgraph, renumbered with dense local indices.
///
/// Local index `i` refers to the `i`-th node in discovery order: its rectangle is
/// [`rects()[i]`](Self::rects) and its global id is [`node_ids()[i]`](Self::node_ids).
/// Edges and constraints stored here use local indices only, so a solver can treat the
/// component as a self-contained problem.
///
/// Rectangles are borrowed from the caller's slice; the component never copies or owns them.
#[derive(Debug, PartialEq)]
pub struct Component<'a, R> {
    node_ids: Vec<usize>,
    rects: Vec<&'a R>,
    edges: Vec<Edge>,
    x_constraints: Vec<SeparationConstraint>,
    y_constraints: Vec<SeparationConstraint>,
}

impl<R> Clone for Component<'_, R> {
    fn clone(&self) -> Self {
        Self {
            node_ids: self.node_ids.clone(),
            rects: self.rects.clone(),
            edges: self.edges.clone(),
            x_constraints: self.x_constraints.clone(),
            y_constraints: self.y_constraints.clone(),
        }
    }
}

impl<'a, R> Component<'a, R> {
    pub(crate) const fn new() -> Self {
        Self {
            node_ids: Vec::new(),
            rects: Vec::new(),
            edges: Vec::new(),
            x_constraints: Vec::new(),
            y_constraints: Vec::new(),
        }
    }

    /// Append a node and return its local index.
    pub(crate) fn push_node(&mut self, global: usize, rect: &'a R) -> usize {
        let local = self.node_ids.len();
        self.node_ids.push(global);
        self.rects.push(rect);
        local
    }

    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub(crate) fn push_constraint(&mut self, axis: Axis, constraint: SeparationConstraint) {
        match axis {
            Axis::X => self.x_constraints.push(constraint),
            Axis::Y => self.y_constraints.push(constraint),
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    /// Whether the component has no nodes. Components returned by
    /// [`decompose`](crate::decompose) always have at least one.
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    /// Global ids in local-index order.
    pub fn node_ids(&self) -> &[usize] {
        &self.node_ids
    }

    /// Rectangles in local-index order.
    pub fn rects(&self) -> &[&'a R] {
        &self.rects
    }

    /// Rectangle at `local`, if in range.
    pub fn rect(&self, local: usize) -> Option<&'a R> {
        self.rects.get(local).copied()
    }

    /// Global id of the node at `local`, if in range.
    pub fn global_id(&self, local: usize) -> Option<usize> {
        self.node_ids.get(local).copied()
    }

    /// Local index of `global`, if this component owns it.
    ///
    /// This is a linear scan; it is meant for diagnostics and tests.
    pub fn local_of(&self, global: usize) -> Option<usize> {
        self.node_ids.iter().position(|&id| id == global)
    }

    /// Whether this component owns the global node `global`.
    pub fn contains(&self, global: usize) -> bool {
        self.local_of(global).is_some()
    }

    /// Edges between local indices, in the order of the input edge list.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Local constraints for `axis`, in the order of the input constraint list.
    pub fn constraints(&self, axis: Axis) -> &[SeparationConstraint] {
        match axis {
            Axis::X => &self.x_constraints,
            Axis::Y => &self.y_constraints,
        }
    }

    /// Local horizontal constraints.
    pub fn x_constraints(&self) -> &[SeparationConstraint] {
        &self.x_constraints
    }

    /// Local vertical constraints.
    pub fn y_constraints(&self) -> &[SeparationConstraint] {
        &self.y_constraints
    }
}

impl<R: Bounded> Component<'_, R> {
    /// Union of the member rectangles' bounds, or `None` for an empty component.
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut it = self.rects.iter().map(|r| r.bounds());
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_dense_local_indices() {
        let rects = [
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(5.0, 5.0, 6.0, 6.0),
        ];
        let mut c = Component::new();
        assert!(c.is_empty());
        assert_eq!(c.push_node(7, &rects[1]), 0);
        assert_eq!(c.push_node(3, &rects[0]), 1);
        assert_eq!(c.len(), 2);
        assert_eq!(c.node_ids(), &[7, 3]);
        assert_eq!(c.global_id(1), Some(3));
        assert_eq!(c.global_id(2), None);
        assert_eq!(c.local_of(7), Some(0));
        assert!(!c.contains(4));
        assert!(core::ptr::eq(c.rect(0).unwrap(), &rects[1]));
    }

    #[test]
    fn constraints_are_kept_per_axis() {
        let rects = [Rect::ZERO, Rect::ZERO];
        let mut c = Component::new();
        c.push_node(0, &rects[0]);
        c.push_node(1, &rects[1]);
        c.push_constraint(Axis::X, SeparationConstraint::new(0, 1, 4.0));
        c.push_constraint(Axis::Y, SeparationConstraint::new(1, 0, 2.0));
        assert_eq!(c.x_constraints(), &[SeparationConstraint::new(0, 1, 4.0)]);
        assert_eq!(c.constraints(Axis::Y), c.y_constraints());
        assert_eq!(c.y_constraints()[0].gap, 2.0);
    }

    #[test]
    fn bounding_box_is_union_of_members() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(20.0, -5.0, 30.0, 5.0),
        ];
        let mut c = Component::new();
        assert_eq!(c.bounding_box(), None);
        c.push_node(0, &rects[0]);
        c.push_node(1, &rects[1]);
        assert_eq!(c.bounding_box(), Some(Rect::new(0.0, -5.0, 30.0, 10.0)));
    }
}
