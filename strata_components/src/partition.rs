// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rewrite global edges and separation constraints into component-local indices.

use crate::component::Component;
use crate::error::{DecomposeError, Site};
use crate::index_map::IndexMap;
use crate::types::{Axis, Edge, SeparationConstraint};

/// Append every edge, in input order, to the component that owns it.
///
/// Extraction followed exactly these edges, so both endpoints always share a component.
pub(crate) fn partition_edges<R>(
    components: &mut [Component<'_, R>],
    index_map: &IndexMap,
    edges: &[Edge],
) -> Result<(), DecomposeError> {
    for (position, edge) in edges.iter().enumerate() {
        let site = Site::Edge(position);
        let u = index_map.resolve(edge.u, site)?;
        let v = index_map.resolve(edge.v, site)?;
        debug_assert_eq!(
            u.component, v.component,
            "edge {position} crosses components after extraction"
        );
        components[u.component].push_edge(Edge::new(u.local, v.local));
    }
    Ok(())
}

/// Append every `axis` constraint, in input order, to the component owning both endpoints.
///
/// Fails with [`DecomposeError::ConstraintSpansComponents`] at the first constraint whose
/// endpoints landed in different components.
pub(crate) fn partition_constraints<R>(
    components: &mut [Component<'_, R>],
    index_map: &IndexMap,
    axis: Axis,
    constraints: &[SeparationConstraint],
) -> Result<(), DecomposeError> {
    for (position, c) in constraints.iter().enumerate() {
        let site = Site::Constraint { axis, position };
        let left = index_map.resolve(c.left, site)?;
        let right = index_map.resolve(c.right, site)?;
        if left.component != right.component {
            return Err(DecomposeError::ConstraintSpansComponents {
                axis,
                position,
                left: c.left,
                right: c.right,
                left_component: left.component,
                right_component: right.component,
            });
        }
        components[left.component].push_constraint(
            axis,
            SeparationConstraint::new(left.local, right.local, c.gap),
        );
    }
    Ok(())
}
