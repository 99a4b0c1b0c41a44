//! Square weighting kernels for inflation.

use glam::IVec2;

use crate::types::{CostmapError, MAX_KERNEL_SIZE};

/// Convert an inflation radius in world units (meters) to a cell count.
///
/// Returns `ceil(radius / resolution)`. If resolution is zero or negative, or
/// if the result would be non-positive, returns 0.
#[inline]
pub fn inflation_radius_to_cells(radius_m: f32, resolution: f32) -> u32 {
    if resolution <= 0.0 || radius_m <= 0.0 {
        return 0;
    }
    (radius_m / resolution).ceil() as u32
}

/// Immutable `size` x `size` weight matrix, row-major, centred on `(size / 2, size / 2)`.
///
/// Weights are finite and non-negative; a zero weight is outside the kernel's
/// support.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    size: u32,
    weights: Vec<f32>,
}

/// Reject sizes that are even, zero or above [`MAX_KERNEL_SIZE`] before any weights are allocated.
fn check_size(size: u32) -> Result<(), CostmapError> {
    if size == 0 || size % 2 == 0 {
        return Err(CostmapError::InvalidKernel(format!(
            "size must be a positive odd number, got {size}"
        )));
    }
    if size > MAX_KERNEL_SIZE {
        return Err(CostmapError::InvalidKernel(format!(
            "size {size} exceeds the maximum of {MAX_KERNEL_SIZE}"
        )));
    }
    Ok(())
}

impl Kernel {
    pub fn new(size: u32, weights: Vec<f32>) -> Result<Self, CostmapError> {
        check_size(size)?;
        let expected = (size as usize) * (size as usize);
        if weights.len() != expected {
            return Err(CostmapError::InvalidKernel(format!(
                "{} weights for a {size}x{size} kernel, expected {expected}",
                weights.len()
            )));
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(CostmapError::InvalidKernel(format!(
                "weights must be finite and non-negative, found {bad}"
            )));
        }
        Ok(Self { size, weights })
    }

    /// Every tap weighs 1: plain square dilation.
    pub fn uniform(size: u32) -> Result<Self, CostmapError> {
        check_size(size)?;
        Self::new(size, vec![1.0; (size as usize) * (size as usize)])
    }

    /// Elliptical structuring element inscribed in the square.
    ///
    /// Row `i` covers columns `c - dx ..= c + dx` with
    /// `dx = round(c * sqrt((r^2 - dy^2) / r^2))`, `dy = i - r`, `r = c = size / 2`.
    pub fn ellipse(size: u32) -> Result<Self, CostmapError> {
        check_size(size)?;
        let n = size as i64;
        let r = n / 2;
        let c = n / 2;
        let inv_r2 = if r > 0 { 1.0 / (r * r) as f64 } else { 0.0 };

        let mut weights = vec![0.0; (n * n) as usize];
        for i in 0..n {
            let dy = i - r;
            if dy.abs() > r {
                continue;
            }
            let dx = (c as f64 * (((r * r - dy * dy) as f64) * inv_r2).sqrt()).round() as i64;
            let j1 = (c - dx).max(0);
            let j2 = (c + dx + 1).min(n);
            for j in j1..j2 {
                weights[(i * n + j) as usize] = 1.0;
            }
        }
        Self::new(size, weights)
    }

    /// Separable Gaussian: the outer product of a normalised 1D Gaussian with itself.
    ///
    /// A `sigma <= 0` is derived from the size as `0.3 * ((size - 1) / 2 - 1) + 0.8`,
    /// except for sizes 1, 3, 5 and 7 which use fixed binomial taps.
    pub fn gaussian(size: u32, sigma: f32) -> Result<Self, CostmapError> {
        check_size(size)?;
        let taps = gaussian_1d(size, sigma);
        let weights = taps
            .iter()
            .flat_map(|&wy| taps.iter().map(move |&wx| (wy * wx) as f32))
            .collect();
        Self::new(size, weights)
    }

    /// Elliptical kernel reaching `radius_m` meters on a grid of `resolution`.
    pub fn from_radius(radius_m: f32, resolution: f32) -> Result<Self, CostmapError> {
        let radius_cells = inflation_radius_to_cells(radius_m, resolution);
        let size = radius_cells
            .checked_mul(2)
            .and_then(|diameter| diameter.checked_add(1))
            .ok_or_else(|| {
                CostmapError::InvalidKernel(format!(
                    "radius {radius_m} m at resolution {resolution} is too large"
                ))
            })?;
        Self::ellipse(size)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Distance from the centre tap to the kernel edge.
    pub fn half(&self) -> u32 {
        self.size / 2
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Weight at `offset` from the centre; zero outside the kernel.
    pub fn weight(&self, offset: IVec2) -> f32 {
        let half = self.half() as i32;
        if offset.x.abs() > half || offset.y.abs() > half {
            return 0.0;
        }
        let row = (offset.y + half) as usize;
        let col = (offset.x + half) as usize;
        self.weights[row * self.size as usize + col]
    }

    /// Offsets from the centre with a positive weight, row-major.
    pub fn taps(&self) -> Vec<(IVec2, f32)> {
        let half = self.half() as i32;
        let size = self.size as usize;
        self.weights
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > 0.0)
            .map(|(idx, &w)| {
                let offset = IVec2::new((idx % size) as i32 - half, (idx / size) as i32 - half);
                (offset, w)
            })
            .collect()
    }
}

fn gaussian_1d(size: u32, sigma: f32) -> Vec<f64> {
    const SMALL: [&[f64]; 4] = [
        &[1.0],
        &[0.25, 0.5, 0.25],
        &[0.0625, 0.25, 0.375, 0.25, 0.0625],
        &[0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125],
    ];
    if sigma <= 0.0 && size <= 7 {
        return SMALL[(size / 2) as usize].to_vec();
    }

    let sigma = if sigma > 0.0 {
        f64::from(sigma)
    } else {
        0.3 * ((f64::from(size) - 1.0) * 0.5 - 1.0) + 0.8
    };
    let scale = -0.5 / (sigma * sigma);
    let centre = (f64::from(size) - 1.0) * 0.5;
    let raw: Vec<f64> = (0..size)
        .map(|i| {
            let x = f64::from(i) - centre;
            (scale * x * x).exp()
        })
        .collect();
    let sum: f64 = raw.iter().sum();
    raw.into_iter().map(|v| v / sum).collect()
}
