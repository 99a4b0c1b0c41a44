//! Kernel-weighted inflation of a thresholded mask.
//!
//! The spread is a plain weighted-neighbourhood reduction:
//!
//! ```text
//! response(x, y) = Σ weight(dx, dy) * mask(x + dx, y + dy)   for |dx|, |dy| <= half
//! ```
//!
//! Taps that fall outside the grid contribute nothing (no wrap, no reflection).
//! A cell is covered when its response is positive, which for a non-negative
//! kernel is exactly a morphological dilation by the kernel's support.

use glam::{IVec2, UVec2};
use tracing::warn;

use super::Kernel;
use crate::grid::Grid2d;

/// Counts gathered by one [`inflate`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InflationStats {
    /// Cells that matched the occupied value.
    pub occupied: usize,
    /// Previously unoccupied cells rewritten to the inflated value.
    pub inflated: usize,
}

/// Boolean grid marking every cell equal to `occupied`.
pub fn occupancy_mask<T: PartialEq>(grid: &Grid2d<T>, occupied: &T) -> Grid2d<bool> {
    grid.map(|_, value| value == occupied)
}

#[inline]
fn mask_at(mask: &Grid2d<bool>, pos: IVec2) -> bool {
    if pos.x < 0 || pos.y < 0 {
        return false;
    }
    mask.get(pos.as_uvec2()).copied().unwrap_or(false)
}

/// Weighted kernel response of `mask` at every cell.
pub fn weighted_response(mask: &Grid2d<bool>, kernel: &Kernel) -> Grid2d<f32> {
    let taps = kernel.taps();
    mask.map(|cell, _| {
        let centre = cell.as_ivec2();
        taps.iter()
            .filter(|(offset, _)| mask_at(mask, centre + *offset))
            .map(|(_, weight)| weight)
            .sum()
    })
}

/// Whether any positively weighted tap around `cell` lands on a masked cell.
///
/// Equivalent to `weighted_response(..) > 0` at `cell` but stops at the first hit.
fn is_covered(mask: &Grid2d<bool>, taps: &[(IVec2, f32)], cell: UVec2) -> bool {
    let centre = cell.as_ivec2();
    taps.iter().any(|(offset, _)| mask_at(mask, centre + *offset))
}

/// Inflate every `occupied` cell of `grid` through `kernel`, in place.
///
/// Cells not equal to `occupied` that are covered by the kernel footprint of an
/// occupied cell become `inflated`. Occupied cells are never rewritten.
///
/// Passing the same value for `occupied` and `inflated` is allowed but almost
/// certainly a misconfiguration; it is logged as a warning.
pub fn inflate<T>(
    grid: &mut Grid2d<T>,
    occupied: T,
    kernel: &Kernel,
    inflated: T,
) -> InflationStats
where
    T: Copy + PartialEq + std::fmt::Debug,
{
    if occupied == inflated {
        warn!(
            ?occupied,
            "occupied and inflated values are equal; inflation will grow obstacles"
        );
    }

    let mask = occupancy_mask(grid, &occupied);
    let taps = kernel.taps();
    let mut stats = InflationStats {
        occupied: mask.data().iter().filter(|&&m| m).count(),
        inflated: 0,
    };
    if stats.occupied == 0 || taps.is_empty() {
        return stats;
    }

    for (idx, (cell, &was_occupied)) in mask.iter_cells().enumerate() {
        if was_occupied || !is_covered(&mask, &taps, cell) {
            continue;
        }
        grid.data_mut()[idx] = inflated;
        stats.inflated += 1;
    }
    stats
}
