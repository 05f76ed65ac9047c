// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Proximity: edge graphs over rectangles for `strata_components`.
//!
//! [`strata_components::decompose`] needs a proximity graph whose edges connect every pair of
//! rectangles that a separation constraint links. This crate builds one:
//!
//! - [`ProximityGraph::overlap_edges`] links rectangles that overlap, touch, or sit within
//!   [`ProximityConfig::padding`] of each other on both axes. A uniform grid keeps the broad
//!   phase close to linear for evenly sized rectangles.
//! - [`connect_constraints`] adds an edge for every constrained pair not already linked.
//! - [`ProximityGraph::build`] does both, so the result always decomposes cleanly.
//!
//! Any shape implementing [`strata_components::Bounded`] works as input, including
//! [`kurbo::Rect`] and [`kurbo::RoundedRect`]. Float inputs are assumed to be finite.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use strata_components::{SeparationConstraint, decompose};
//! use strata_proximity::{ProximityConfig, ProximityGraph};
//!
//! let rects = [
//!     Rect::new(0.0, 0.0, 10.0, 10.0),
//!     Rect::new(12.0, 0.0, 22.0, 10.0),
//!     Rect::new(100.0, 0.0, 110.0, 10.0),
//! ];
//! let graph = ProximityGraph::new(ProximityConfig::with_padding(4.0)).unwrap();
//! let xs = [SeparationConstraint::new(0, 1, 15.0)];
//! let edges = graph.build(&rects, &xs, &[]).unwrap();
//!
//! let components = decompose(&rects, &edges, &xs, &[]).unwrap();
//! assert_eq!(components.len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod graph;
mod grid;

pub use config::ProximityConfig;
pub use error::ProximityError;
pub use graph::{ProximityGraph, connect_constraints};
