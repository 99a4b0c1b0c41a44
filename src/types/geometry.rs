//! Index-space regions used to address part of a grid.

use glam::{IVec2, UVec2};

use super::CostmapError;

/// Axis-aligned window in cell indices.
/// Convention: [min.x, max.x] x [min.y, max.y], both ends inclusive.
///
/// Coordinates are signed so that a caller can describe a window hanging off
/// the grid; such a region is rejected by [`CellRegion::validate`] instead of
/// wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRegion {
    pub min: IVec2,
    pub max: IVec2,
}

impl CellRegion {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min: IVec2::new(min_x, min_y),
            max: IVec2::new(max_x, max_y),
        }
    }

    /// Region starting at `origin` spanning `size` cells. A zero-sized extent
    /// yields an inverted (invalid) region.
    pub fn from_origin_size(origin: IVec2, size: UVec2) -> Self {
        let extent = |start: i32, len: u32| {
            let end = i64::from(start) + i64::from(len) - 1;
            end.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
        };
        Self {
            min: origin,
            max: IVec2::new(extent(origin.x, size.x), extent(origin.y, size.y)),
        }
    }

    /// Width and height in cells, or `None` when the region is inverted.
    pub fn size(&self) -> Option<UVec2> {
        let w = i64::from(self.max.x) - i64::from(self.min.x) + 1;
        let h = i64::from(self.max.y) - i64::from(self.min.y) + 1;
        if w <= 0 || h <= 0 || w > i64::from(u32::MAX) || h > i64::from(u32::MAX) {
            return None;
        }
        Some(UVec2::new(w as u32, h as u32))
    }

    /// Check that the region is non-inverted and lies inside a `width` x `height` grid.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), CostmapError> {
        let (w, h) = (i64::from(width), i64::from(height));
        let in_bounds = self.min.x >= 0
            && self.min.y >= 0
            && i64::from(self.max.x) < w
            && i64::from(self.max.y) < h;
        let ordered = self.min.x <= self.max.x && self.min.y <= self.max.y;

        if !in_bounds || !ordered {
            return Err(CostmapError::InvalidRegion(format!(
                "({}, {})..=({}, {}) is not a valid window of a {}x{} grid",
                self.min.x, self.min.y, self.max.x, self.max.y, width, height
            )));
        }
        Ok(())
    }

    /// Whether `cell` lies inside the region.
    pub fn contains(&self, cell: UVec2) -> bool {
        let (x, y) = (i64::from(cell.x), i64::from(cell.y));
        x >= i64::from(self.min.x)
            && x <= i64::from(self.max.x)
            && y >= i64::from(self.min.y)
            && y <= i64::from(self.max.y)
    }

    /// Top-left corner as an unsigned cell. Only meaningful after [`Self::validate`].
    pub(crate) fn origin(&self) -> UVec2 {
        self.min.as_uvec2()
    }
}
