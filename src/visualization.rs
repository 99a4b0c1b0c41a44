//! Rendering collaborators for costmaps.
//!
//! The core never rescales costs; anything display-oriented (min/max
//! normalisation, flipping to image orientation, writing files) lives here.

use std::path::PathBuf;

use image::{GrayImage, Luma};
use tracing::info;

use crate::grid::Costmap;
use crate::types::CostmapError;

/// Something that can display or export a raw cost buffer.
pub trait Renderer {
    /// Render `cells` (row-major, `width * height` long) under `name`.
    fn render(
        &mut self,
        name: &str,
        width: u32,
        height: u32,
        cells: &[u8],
    ) -> Result<(), CostmapError>;

    fn render_grid(&mut self, name: &str, grid: &Costmap) -> Result<(), CostmapError> {
        self.render(name, grid.width(), grid.height(), grid.data())
    }
}

/// Linearly rescale `cells` so the smallest value maps to 0 and the largest to 255.
///
/// A constant buffer maps to all zeros.
pub fn normalize_min_max(cells: &[u8]) -> Vec<u8> {
    let (Some(&min), Some(&max)) = (cells.iter().min(), cells.iter().max()) else {
        return Vec::new();
    };
    if max == min {
        return vec![0; cells.len()];
    }
    let scale = 255.0 / f64::from(max - min);
    cells
        .iter()
        .map(|&v| (f64::from(v - min) * scale).round().clamp(0.0, 255.0) as u8)
        .collect()
}

/// Copy a cost buffer into a grayscale image.
///
/// With `flip_vertical` the buffer's row 0 is written to the **bottom** of the
/// image, matching the usual map orientation.
pub fn costs_to_image(
    width: u32,
    height: u32,
    cells: &[u8],
    flip_vertical: bool,
) -> Result<GrayImage, CostmapError> {
    let expected = (width as usize) * (height as usize);
    if cells.len() != expected {
        return Err(CostmapError::InvalidMetadata(format!(
            "buffer of {} cells does not match {}x{}",
            cells.len(),
            width,
            height
        )));
    }

    let mut img = GrayImage::new(width, height);
    for y_img in 0..height {
        let y_grid = if flip_vertical {
            height - 1 - y_img
        } else {
            y_img
        };
        let row = (y_grid as usize) * (width as usize);
        for x in 0..width {
            img.put_pixel(x, y_img, Luma([cells[row + x as usize]]));
        }
    }
    Ok(img)
}

/// Writes each rendered buffer to `<dir>/<name>.png`.
#[derive(Debug, Clone)]
pub struct PngRenderer {
    dir: PathBuf,
    normalize: bool,
    flip_vertical: bool,
}

impl PngRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            normalize: false,
            flip_vertical: false,
        }
    }

    /// Stretch each buffer to the full 0..=255 range before writing.
    pub fn normalized(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn flipped(mut self, flip_vertical: bool) -> Self {
        self.flip_vertical = flip_vertical;
        self
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.png"))
    }
}

impl Renderer for PngRenderer {
    fn render(
        &mut self,
        name: &str,
        width: u32,
        height: u32,
        cells: &[u8],
    ) -> Result<(), CostmapError> {
        let img = if self.normalize {
            costs_to_image(width, height, &normalize_min_max(cells), self.flip_vertical)?
        } else {
            costs_to_image(width, height, cells, self.flip_vertical)?
        };

        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(name);
        img.save(&path)?;
        info!(path = %path.display(), width, height, "rendered costmap");
        Ok(())
    }
}
