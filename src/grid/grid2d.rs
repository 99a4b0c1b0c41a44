use glam::UVec2;

use crate::types::{CostmapError, MapInfo};

/// Dense row-major 2D grid. Cell `(x, y)` lives at `data[y * width + x]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2d<T> {
    info: MapInfo,
    data: Vec<T>,
}

impl<T> Grid2d<T> {
    pub fn new(info: MapInfo, data: Vec<T>) -> Result<Self, CostmapError> {
        if info.width == 0 || info.height == 0 {
            return Err(CostmapError::InvalidMetadata(format!(
                "grid dimensions must be positive, got {}x{}",
                info.width, info.height
            )));
        }
        let expected_len = info.cell_count();
        if data.len() != expected_len {
            return Err(CostmapError::InvalidMetadata(format!(
                "data length {} does not match map size {}",
                data.len(),
                expected_len
            )));
        }

        Ok(Self { info, data })
    }

    /// Grid where every cell holds a clone of `value`.
    pub fn filled(info: MapInfo, value: T) -> Result<Self, CostmapError>
    where
        T: Clone,
    {
        Self::new(info, vec![value; info.cell_count()])
    }

    /// Grid whose cells are produced by `f(cell)` in row-major order.
    pub fn from_fn(info: MapInfo, mut f: impl FnMut(UVec2) -> T) -> Result<Self, CostmapError> {
        let mut data = Vec::with_capacity(info.cell_count());
        for y in 0..info.height {
            for x in 0..info.width {
                data.push(f(UVec2::new(x, y)));
            }
        }
        Self::new(info, data)
    }

    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.info.width, self.info.height)
    }

    pub fn get(&self, pos: UVec2) -> Option<&T> {
        self.index(pos).map(|idx| &self.data[idx])
    }

    pub fn set(&mut self, pos: UVec2, value: T) -> Result<(), CostmapError> {
        let Some(idx) = self.index(pos) else {
            return Err(CostmapError::OutOfBounds(format!(
                "cell ({}, {}) out of bounds for map {}x{}",
                pos.x, pos.y, self.info.width, self.info.height
            )));
        };
        self.data[idx] = value;
        Ok(())
    }

    /// Flat buffer offset of `pos`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, pos: UVec2) -> Option<usize> {
        if pos.x >= self.info.width || pos.y >= self.info.height {
            return None;
        }
        Some((pos.y as usize) * (self.info.width as usize) + (pos.x as usize))
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate cells in row-major order together with their coordinates.
    pub fn iter_cells(&self) -> impl Iterator<Item = (UVec2, &T)> + '_ {
        let width = self.info.width;
        self.data.iter().enumerate().map(move |(idx, value)| {
            let idx = idx as u32;
            (UVec2::new(idx % width, idx / width), value)
        })
    }

    /// Same-shaped grid with every cell transformed by `f`.
    pub fn map<U>(&self, mut f: impl FnMut(UVec2, &T) -> U) -> Grid2d<U> {
        Grid2d {
            info: self.info,
            data: self.iter_cells().map(|(cell, value)| f(cell, value)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(width: u32, height: u32) -> MapInfo {
        MapInfo {
            width,
            height,
            resolution: 1.0,
        }
    }

    #[test]
    fn new_rejects_length_mismatch() {
        let result = Grid2d::new(info(3, 2), vec![0u8; 5]);
        assert!(matches!(result, Err(CostmapError::InvalidMetadata(_))));
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(Grid2d::<u8>::new(info(0, 2), vec![]).is_err());
        assert!(Grid2d::<u8>::filled(info(4, 0), 0).is_err());
    }

    #[test]
    fn row_major_layout() {
        let grid = Grid2d::new(info(3, 2), vec![0u8, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(grid.get(UVec2::new(2, 0)).copied(), Some(2));
        assert_eq!(grid.get(UVec2::new(0, 1)).copied(), Some(3));
        assert_eq!(grid.index(UVec2::new(1, 1)), Some(4));
        assert_eq!(grid.index(UVec2::new(3, 0)), None);
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut grid = Grid2d::filled(info(2, 2), 0u8).unwrap();
        assert_eq!(grid.get(UVec2::new(2, 0)), None);
        assert_eq!(grid.get(UVec2::new(0, 2)), None);
        assert!(matches!(
            grid.set(UVec2::new(2, 1), 7),
            Err(CostmapError::OutOfBounds(_))
        ));
        grid.set(UVec2::new(1, 1), 7).unwrap();
        assert_eq!(grid.data(), &[0, 0, 0, 7]);
    }

    #[test]
    fn from_fn_and_iter_cells_agree() {
        let grid = Grid2d::from_fn(info(4, 3), |c| c.y * 10 + c.x).unwrap();
        for (cell, value) in grid.iter_cells() {
            assert_eq!(*value, cell.y * 10 + cell.x);
        }
        assert_eq!(grid.iter_cells().count(), 12);
    }

    #[test]
    fn map_preserves_shape() {
        let grid = Grid2d::from_fn(info(3, 3), |c| c.x as u8).unwrap();
        let mask = grid.map(|_, v| *v == 1);
        assert_eq!(mask.size(), grid.size());
        assert_eq!(mask.get(UVec2::new(1, 2)).copied(), Some(true));
        assert_eq!(mask.get(UVec2::new(0, 2)).copied(), Some(false));
    }
}
