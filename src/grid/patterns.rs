//! Synthetic costmaps for demos, tests and benchmarks.

use glam::{IVec2, UVec2};

use super::Grid2d;
use crate::types::{COST_FREE, CostmapError, MapInfo};

impl Grid2d<u8> {
    /// Free grid with a filled disk of `value` cells.
    ///
    /// A cell `(x, y)` is inside when `(x - cx)^2 + (y - cy)^2 <= radius^2`.
    /// The disk may extend past the grid; only the overlap is painted.
    pub fn filled_disk(
        info: MapInfo,
        center: IVec2,
        radius: u32,
        value: u8,
    ) -> Result<Self, CostmapError> {
        let r2 = i64::from(radius) * i64::from(radius);
        Self::from_fn(info, |cell: UVec2| {
            let dx = i64::from(cell.x) - i64::from(center.x);
            let dy = i64::from(cell.y) - i64::from(center.y);
            if dx * dx + dy * dy <= r2 {
                value
            } else {
                COST_FREE
            }
        })
    }

    /// Grid whose cells hold `(y * width + x) mod 256`.
    pub fn index_pattern(info: MapInfo) -> Result<Self, CostmapError> {
        let width = u64::from(info.width);
        Self::from_fn(info, |cell| {
            ((u64::from(cell.y) * width + u64::from(cell.x)) % 256) as u8
        })
    }
}
