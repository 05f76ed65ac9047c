// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global node id to (component, local index) lookup, filled during extraction.

use alloc::vec;
use alloc::vec::Vec;

use crate::adjacency::check_index;
use crate::error::{DecomposeError, Site};

/// Where a global node landed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Placement {
    /// Discovery index of the owning component.
    pub(crate) component: usize,
    /// Position within the component's node list.
    pub(crate) local: usize,
}

/// Dense, id-indexed placement table. An unplaced slot doubles as the "not yet visited" mark.
#[derive(Clone, Debug)]
pub(crate) struct IndexMap {
    slots: Vec<Option<Placement>>,
}

impl IndexMap {
    /// Table for `len` nodes, none placed.
    pub(crate) fn with_len(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Whether `node` has been assigned to a component.
    pub(crate) fn is_placed(&self, node: usize) -> bool {
        matches!(self.slots.get(node), Some(Some(_)))
    }

    /// Record the placement of `node`. Each node is placed once.
    pub(crate) fn place(&mut self, node: usize, placement: Placement) {
        debug_assert!(!self.is_placed(node), "node {node} placed twice");
        self.slots[node] = Some(placement);
    }

    /// Placement of `node`, or [`DecomposeError::InvalidIndex`] blamed on `site`.
    pub(crate) fn resolve(&self, node: usize, site: Site) -> Result<Placement, DecomposeError> {
        check_index(node, self.slots.len(), site)?;
        self.slots[node].ok_or(DecomposeError::InvalidIndex {
            index: node,
            len: self.slots.len(),
            site,
        })
    }
}
