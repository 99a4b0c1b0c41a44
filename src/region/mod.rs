//! Copying a window out of a grid and writing it back.
//!
//! Both directions validate the [`CellRegion`] against the parent grid before
//! any cell is read or written, so a rejected call leaves every buffer as it was.

pub mod extract;
pub mod merge;

pub use extract::extract;
pub use merge::{merge, merge_max};

use std::ops::Range;

use crate::types::CellRegion;

/// Flat buffer ranges of each region row inside a parent grid of `parent_width`.
/// `region` must already be validated against the parent.
fn parent_rows(region: CellRegion, parent_width: u32) -> impl Iterator<Item = Range<usize>> {
    let origin = region.origin();
    let stride = parent_width as usize;
    let x0 = origin.x as usize;
    let x1 = region.max.x as usize + 1;
    (origin.y as usize..=region.max.y as usize).map(move |y| y * stride + x0..y * stride + x1)
}
