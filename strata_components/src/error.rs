// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`decompose`](crate::decompose).
//!
//! Both kinds are caller-input errors. They are detected synchronously and fail the whole call;
//! no partially built decomposition is ever returned.

use core::fmt;

use crate::types::Axis;

/// The input item that referenced an out-of-range node id.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Site {
    /// Edge at this position in the edge list.
    Edge(usize),
    /// Constraint at `position` in the list for `axis`.
    Constraint {
        /// Which constraint list.
        axis: Axis,
        /// Position within that list.
        position: usize,
    },
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edge(position) => write!(f, "edge {position}"),
            Self::Constraint { axis, position } => write!(f, "{axis} constraint {position}"),
        }
    }
}

/// Why a decomposition could not be produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecomposeError {
    /// An edge or constraint names a node outside `0..len`.
    #[error("{site} references node {index}, but only {len} nodes were given")]
    InvalidIndex {
        /// The offending node id.
        index: usize,
        /// Number of rectangles supplied.
        len: usize,
        /// Which input item carried the id.
        site: Site,
    },
    /// A constraint joins nodes that no chain of edges connects.
    ///
    /// The upstream proximity graph must connect every constrained pair.
    #[error(
        "{axis} constraint {position} joins node {left} (component {left_component}) \
         and node {right} (component {right_component}), which no edges connect"
    )]
    ConstraintSpansComponents {
        /// Which constraint list.
        axis: Axis,
        /// Position within that list.
        position: usize,
        /// Global id of the constraint's left node.
        left: usize,
        /// Global id of the constraint's right node.
        right: usize,
        /// Discovery index of the component owning `left`.
        left_component: usize,
        /// Discovery index of the component owning `right`.
        right_component: usize,
    },
}
