// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first discovery of maximal connected components.

use alloc::vec::Vec;

use log::trace;

use crate::adjacency::Adjacency;
use crate::component::Component;
use crate::index_map::{IndexMap, Placement};

/// Components in discovery order plus the placement of every node.
#[derive(Debug)]
pub(crate) struct Extraction<'a, R> {
    pub(crate) components: Vec<Component<'a, R>>,
    pub(crate) index_map: IndexMap,
}

/// Split the nodes of `adjacency` into connected components.
///
/// Roots are taken in ascending global id; from each root the traversal is a preorder
/// depth-first walk that expands neighbors in adjacency-list order. The explicit stack holds
/// `(node, next neighbor position)` frames, which reproduces the recursive visiting order
/// exactly while keeping the traversal depth off the call stack.
///
/// `rects` and `adjacency` must describe the same number of nodes.
pub(crate) fn extract<'a, R>(rects: &'a [R], adjacency: &Adjacency) -> Extraction<'a, R> {
    debug_assert_eq!(
        rects.len(),
        adjacency.len(),
        "one rectangle per adjacency node"
    );
    let len = rects.len();
    let mut index_map = IndexMap::with_len(len);
    let mut components = Vec::new();
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut next_root = 0;

    loop {
        while next_root < len && index_map.is_placed(next_root) {
            next_root += 1;
        }
        if next_root == len {
            break;
        }
        let root = next_root;
        let component_idx = components.len();
        let mut component = Component::new();

        place(root, rects, &mut component, component_idx, &mut index_map);
        stack.push((root, 0));
        while let Some(top) = stack.last_mut() {
            let (node, cursor) = *top;
            match adjacency.neighbours(node).get(cursor) {
                Some(&next) => {
                    top.1 += 1;
                    if !index_map.is_placed(next) {
                        place(next, rects, &mut component, component_idx, &mut index_map);
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        trace!(
            "component {component_idx}: root {root}, {} nodes",
            component.len()
        );
        components.push(component);
    }

    Extraction {
        components,
        index_map,
    }
}

fn place<'a, R>(
    node: usize,
    rects: &'a [R],
    component: &mut Component<'a, R>,
    component_idx: usize,
    index_map: &mut IndexMap,
) {
    let local = component.push_node(node, &rects[node]);
    index_map.place(
        node,
        Placement {
            component: component_idx,
            local,
        },
    );
}
