// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input and output value types: axes, edges, separation constraints, and bounded shapes.

use core::fmt;

use kurbo::{Rect, RoundedRect};

/// Axis along which a separation constraint acts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// Both axes, in partitioning order.
    pub const ALL: [Self; 2] = [Self::X, Self::Y];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Undirected edge between two nodes.
///
/// On input the endpoints are global node ids (positions in the rectangle slice).
/// Inside a [`Component`](crate::Component) the endpoints are local indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// First endpoint.
    pub u: usize,
    /// Second endpoint.
    pub v: usize,
}

impl Edge {
    /// Create an edge between `u` and `v`.
    pub const fn new(u: usize, v: usize) -> Self {
        Self { u, v }
    }

    /// Whether this edge joins `a` and `b`, in either orientation.
    pub const fn joins(&self, a: usize, b: usize) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }
}

impl From<(usize, usize)> for Edge {
    fn from((u, v): (usize, usize)) -> Self {
        Self::new(u, v)
    }
}

/// One-dimensional separation inequality: `pos(left) + gap <= pos(right)`.
///
/// The axis is implied by the list the constraint is stored in.
/// Endpoints are global ids on input and local indices inside a [`Component`](crate::Component).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeparationConstraint {
    /// Node whose coordinate plus `gap` must not exceed `right`'s.
    pub left: usize,
    /// Node that must sit at least `gap` past `left`.
    pub right: usize,
    /// Minimum separation between the two coordinates.
    pub gap: f64,
}

impl SeparationConstraint {
    /// Create a constraint requiring `pos(left) + gap <= pos(right)`.
    pub const fn new(left: usize, right: usize, gap: f64) -> Self {
        Self { left, right, gap }
    }
}

/// Shapes with an axis-aligned bounding box.
///
/// Used by [`Component::bounding_box`](crate::Component::bounding_box).
pub trait Bounded {
    /// Axis-aligned bounds of the shape.
    fn bounds(&self) -> Rect;
}

impl Bounded for Rect {
    fn bounds(&self) -> Self {
        *self
    }
}

impl Bounded for RoundedRect {
    fn bounds(&self) -> Rect {
        self.rect()
    }
}

impl<T: Bounded + ?Sized> Bounded for &T {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_joins_either_orientation() {
        let e = Edge::new(2, 5);
        assert!(e.joins(2, 5));
        assert!(e.joins(5, 2));
        assert!(!e.joins(2, 2));
        assert_eq!(Edge::from((2, 5)), e);
    }

    #[test]
    fn rounded_rect_bounds_ignore_radii() {
        let rr = RoundedRect::new(0.0, 0.0, 10.0, 20.0, 3.0);
        assert_eq!(rr.bounds(), Rect::new(0.0, 0.0, 10.0, 20.0));
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((&r).bounds(), r);
    }
}
