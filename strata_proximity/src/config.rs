// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proximity graph configuration.

use crate::error::ProximityError;

/// How close two rectangles must be to share an edge, and how the broad phase is bucketed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProximityConfig {
    /// Largest gap, along both axes, at which two rectangles are still adjacent.
    /// `0.0` links only overlapping or touching rectangles.
    pub padding: f64,
    /// Side length of a broad-phase grid cell.
    /// `None` derives it from the mean rectangle extent.
    pub cell_size: Option<f64>,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            padding: 0.0,
            cell_size: None,
        }
    }
}

impl ProximityConfig {
    /// Config with the given padding and a derived cell size.
    pub const fn with_padding(padding: f64) -> Self {
        Self {
            padding,
            cell_size: None,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ProximityError> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ProximityError::InvalidPadding(self.padding));
        }
        if let Some(cell) = self.cell_size
            && (!cell.is_finite() || cell <= 0.0)
        {
            return Err(ProximityError::InvalidCellSize(cell));
        }
        Ok(())
    }
}
