use crate::grid::Grid2d;
use crate::types::{CellRegion, CostmapError, MapInfo};

use super::parent_rows;

/// Copy the cells of `region` out of `grid` into a new, independently owned grid.
///
/// Cell `(c, r)` of the result equals cell `(region.min.x + c, region.min.y + r)`
/// of `grid`. The sub-grid keeps the parent's resolution.
///
/// # Errors
///
/// [`CostmapError::InvalidRegion`] if the region is inverted or reaches outside `grid`.
pub fn extract<T: Clone>(grid: &Grid2d<T>, region: CellRegion) -> Result<Grid2d<T>, CostmapError> {
    region.validate(grid.width(), grid.height())?;
    let Some(size) = region.size() else {
        return Err(CostmapError::InvalidRegion(format!("{region:?} is empty")));
    };

    let info = MapInfo {
        width: size.x,
        height: size.y,
        resolution: grid.info().resolution,
    };
    let mut data = Vec::with_capacity(info.cell_count());
    for row in parent_rows(region, grid.width()) {
        data.extend_from_slice(&grid.data()[row]);
    }

    Grid2d::new(info, data)
}

#[cfg(test)]
mod tests {
    use glam::UVec2;

    use super::*;

    fn pattern(width: u32, height: u32) -> Grid2d<u8> {
        Grid2d::index_pattern(MapInfo {
            width,
            height,
            resolution: 0.1,
        })
        .unwrap()
    }

    #[test]
    fn extracts_expected_cells() {
        let grid = pattern(40, 30);
        let sub = extract(&grid, CellRegion::new(10, 10, 19, 14)).unwrap();

        assert_eq!(sub.width(), 10);
        assert_eq!(sub.height(), 5);
        assert_eq!(sub.info().resolution, 0.1);
        for r in 0..5u32 {
            for c in 0..10u32 {
                let expected = grid.data()[((10 + r) * 40 + 10 + c) as usize];
                assert_eq!(sub.get(UVec2::new(c, r)).copied(), Some(expected));
            }
        }
    }

    #[test]
    fn single_cell_and_full_grid() {
        let grid = pattern(8, 6);
        let one = extract(&grid, CellRegion::new(7, 5, 7, 5)).unwrap();
        assert_eq!(one.data(), &[grid.data()[5 * 8 + 7]]);

        let all = extract(&grid, CellRegion::new(0, 0, 7, 5)).unwrap();
        assert_eq!(all, grid);
    }

    #[test]
    fn rejects_out_of_bounds_and_inverted() {
        let grid = pattern(20, 10);
        let bad = [
            CellRegion::new(-1, 0, 5, 5),
            CellRegion::new(0, -3, 5, 5),
            CellRegion::new(0, 0, 20, 5),
            CellRegion::new(0, 0, 5, 10),
            CellRegion::new(6, 0, 5, 5),
            CellRegion::new(0, 6, 5, 5),
            CellRegion::new(-100, -100, 1000, 1000),
        ];
        for region in bad {
            assert!(
                matches!(extract(&grid, region), Err(CostmapError::InvalidRegion(_))),
                "{region:?} should be rejected"
            );
        }
    }

    #[test]
    fn re_extraction_is_identical() {
        let grid = pattern(50, 50);
        let region = CellRegion::new(3, 17, 41, 33);
        assert_eq!(extract(&grid, region).unwrap(), extract(&grid, region).unwrap());
    }

    #[test]
    fn extraction_does_not_alias_parent() {
        let grid = pattern(10, 10);
        let before = grid.clone();
        let mut sub = extract(&grid, CellRegion::new(2, 2, 5, 5)).unwrap();
        sub.data_mut().fill(0xAA);
        assert_eq!(grid, before);
    }
}
