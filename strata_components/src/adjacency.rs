// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undirected neighbor lists built from a flat edge list.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{DecomposeError, Site};
use crate::types::Edge;

/// Id-indexed neighbor lists.
///
/// Each edge `(u, v)` appends `v` to `u`'s list and `u` to `v`'s list, in edge order.
/// Parallel edges are kept.
#[derive(Clone, Debug)]
pub(crate) struct Adjacency {
    neighbours: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Build neighbor lists for `len` nodes, validating every endpoint.
    pub(crate) fn build(len: usize, edges: &[Edge]) -> Result<Self, DecomposeError> {
        let mut neighbours = vec![Vec::new(); len];
        for (position, edge) in edges.iter().enumerate() {
            let site = Site::Edge(position);
            check_index(edge.u, len, site)?;
            check_index(edge.v, len, site)?;
            neighbours[edge.u].push(edge.v);
            neighbours[edge.v].push(edge.u);
        }
        Ok(Self { neighbours })
    }

    /// Number of nodes.
    pub(crate) fn len(&self) -> usize {
        self.neighbours.len()
    }

    /// Neighbors of `node` in edge insertion order.
    pub(crate) fn neighbours(&self, node: usize) -> &[usize] {
        &self.neighbours[node]
    }
}

/// Fail with [`DecomposeError::InvalidIndex`] unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize, site: Site) -> Result<(), DecomposeError> {
    if index < len {
        Ok(())
    } else {
        Err(DecomposeError::InvalidIndex { index, len, site })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_follow_edge_order_in_both_directions() {
        let edges = [Edge::new(0, 2), Edge::new(1, 0), Edge::new(2, 1)];
        let adj = Adjacency::build(3, &edges).unwrap();
        assert_eq!(adj.len(), 3);
        assert_eq!(adj.neighbours(0), &[2, 1]);
        assert_eq!(adj.neighbours(1), &[0, 2]);
        assert_eq!(adj.neighbours(2), &[0, 1]);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let edges = [Edge::new(0, 1), Edge::new(1, 0)];
        let adj = Adjacency::build(2, &edges).unwrap();
        assert_eq!(adj.neighbours(0), &[1, 1]);
        assert_eq!(adj.neighbours(1), &[0, 0]);
    }

    #[test]
    fn out_of_range_endpoint_is_rejected() {
        let edges = [Edge::new(0, 1), Edge::new(1, 3)];
        let err = Adjacency::build(3, &edges).unwrap_err();
        assert_eq!(
            err,
            DecomposeError::InvalidIndex {
                index: 3,
                len: 3,
                site: Site::Edge(1),
            }
        );
    }
}
