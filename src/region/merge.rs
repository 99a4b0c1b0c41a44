//! Merge policies for writing a processed sub-grid back into its parent.
//!
//! Both policies check the region against the parent and the sub-grid's shape
//! against the region before writing, and only ever touch cells inside the region.

use crate::grid::Grid2d;
use crate::types::{CellRegion, CostmapError};

use super::parent_rows;

fn check_shape<T>(
    grid: &Grid2d<T>,
    region: CellRegion,
    sub: &Grid2d<T>,
) -> Result<(), CostmapError> {
    region.validate(grid.width(), grid.height())?;
    match region.size() {
        Some(size) if size == sub.size() => Ok(()),
        size => Err(CostmapError::ShapeMismatch(format!(
            "sub-grid is {}x{} but region {:?} spans {:?}",
            sub.width(),
            sub.height(),
            region,
            size
        ))),
    }
}

/// Overwrite the footprint of `region` in `grid` with the cells of `sub`.
pub fn merge<T: Clone>(
    grid: &mut Grid2d<T>,
    region: CellRegion,
    sub: &Grid2d<T>,
) -> Result<(), CostmapError> {
    check_shape(grid, region, sub)?;

    let width = grid.width();
    let src_rows = sub.data().chunks_exact(sub.width() as usize);
    for (dst, src) in parent_rows(region, width).zip(src_rows) {
        grid.data_mut()[dst].clone_from_slice(src);
    }
    Ok(())
}

/// Like [`merge`] but only writes a cell when the sub-grid value is higher.
pub fn merge_max<T: Copy + Ord>(
    grid: &mut Grid2d<T>,
    region: CellRegion,
    sub: &Grid2d<T>,
) -> Result<(), CostmapError> {
    check_shape(grid, region, sub)?;

    let width = grid.width();
    let src_rows = sub.data().chunks_exact(sub.width() as usize);
    for (dst, src) in parent_rows(region, width).zip(src_rows) {
        for (old, &new) in grid.data_mut()[dst].iter_mut().zip(src) {
            if new > *old {
                *old = new;
            }
        }
    }
    Ok(())
}
