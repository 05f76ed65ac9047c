// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid broad phase. Maps rectangles to the square cells they cover.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::Rect;

/// Most cells a single rectangle may occupy. Larger rectangles stay out of the grid.
pub(crate) const MAX_CELLS_PER_RECT: u64 = 64;

/// Square-cell grid holding rectangle slots.
///
/// Cell `(cx, cy)` covers `[origin + c * cell, origin + (c + 1) * cell)` on each axis.
/// Coordinates are assumed finite.
#[derive(Debug)]
pub(crate) struct Grid {
    cell: f64,
    origin_x: f64,
    origin_y: f64,
    cells: BTreeMap<(i64, i64), Vec<usize>>,
}

impl Grid {
    pub(crate) fn new(cell: f64, origin_x: f64, origin_y: f64) -> Self {
        debug_assert!(cell > 0.0, "cell size must be positive");
        Self {
            cell,
            origin_x,
            origin_y,
            cells: BTreeMap::new(),
        }
    }

    #[inline]
    fn floor_to_i64(v: f64) -> i64 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Cell coordinates saturate at the i64 range; such grids are unusable anyway."
        )]
        let i = v as i64;
        if (i as f64) > v { i - 1 } else { i }
    }

    fn key_for(&self, x: f64, y: f64) -> (i64, i64) {
        let cx = Self::floor_to_i64((x - self.origin_x) / self.cell);
        let cy = Self::floor_to_i64((y - self.origin_y) / self.cell);
        (cx, cy)
    }

    fn keys_for(&self, r: &Rect) -> impl Iterator<Item = (i64, i64)> + use<> {
        let (minx, miny) = self.key_for(r.x0, r.y0);
        let (maxx, maxy) = self.key_for(r.x1, r.y1);
        (miny..=maxy).flat_map(move |y| (minx..=maxx).map(move |x| (x, y)))
    }

    /// Number of cells `r` covers, saturating at `u64::MAX`.
    fn span(&self, r: &Rect) -> u64 {
        let (minx, miny) = self.key_for(r.x0, r.y0);
        let (maxx, maxy) = self.key_for(r.x1, r.y1);
        let w = maxx.abs_diff(minx).saturating_add(1);
        let h = maxy.abs_diff(miny).saturating_add(1);
        w.saturating_mul(h)
    }

    /// Whether `r` is small enough to be stored or queried cell by cell.
    pub(crate) fn fits(&self, r: &Rect) -> bool {
        self.span(r) <= MAX_CELLS_PER_RECT
    }

    /// Call `f` with every slot sharing at least one cell with `r`.
    ///
    /// A slot spanning several shared cells is reported once per cell.
    pub(crate) fn for_each_candidate(&self, r: &Rect, mut f: impl FnMut(usize)) {
        debug_assert!(self.fits(r), "query rectangle covers too many cells");
        for key in self.keys_for(r) {
            if let Some(slots) = self.cells.get(&key) {
                for &slot in slots {
                    f(slot);
                }
            }
        }
    }

    pub(crate) fn insert(&mut self, slot: usize, r: &Rect) {
        debug_assert!(self.fits(r), "inserted rectangle covers too many cells");
        for key in self.keys_for(r) {
            self.cells.entry(key).or_default().push(slot);
        }
    }

    /// Number of occupied cells.
    pub(crate) fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
