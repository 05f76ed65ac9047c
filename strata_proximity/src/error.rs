// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while configuring or building a proximity graph.

use strata_components::Axis;

/// Why a proximity graph could not be built.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ProximityError {
    /// Padding must be finite and non-negative.
    #[error("padding must be finite and non-negative, got {0}")]
    InvalidPadding(f64),
    /// An explicit cell size must be finite and positive.
    #[error("cell size must be finite and positive, got {0}")]
    InvalidCellSize(f64),
    /// A constraint names a rectangle that does not exist.
    #[error(
        "{axis} constraint {position} references node {index}, \
         but only {len} rectangles were given"
    )]
    ConstraintOutOfRange {
        /// Which constraint list.
        axis: Axis,
        /// Position within that list.
        position: usize,
        /// The offending node id.
        index: usize,
        /// Number of rectangles.
        len: usize,
    },
}
