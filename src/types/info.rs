//! Map metadata.

use super::DEFAULT_RESOLUTION;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapInfo {
    pub width: u32,
    pub height: u32,
    /// Edge length of one cell in meters.
    pub resolution: f32,
}

impl Default for MapInfo {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl MapInfo {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Number of cells in a grid with these dimensions.
    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}
