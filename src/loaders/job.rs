use std::path::Path;

use glam::{IVec2, UVec2};
use serde::Deserialize;

use crate::inflation::{Kernel, RegionInflator};
use crate::types::{
    COST_INFLATED, COST_OCCUPIED, CellRegion, CostmapError, DEFAULT_GAUSSIAN_SIGMA,
    DEFAULT_KERNEL_SIZE, MAX_KERNEL_SIZE,
};

/// One region-inflation run, as read from YAML.
///
/// ```yaml
/// region: { x: 100, y: 700, width: 300, height: 100 }   # or [min_x, min_y, max_x, max_y]
/// occupied_value: 250
/// inflated_value: 100
/// kernel: { shape: gaussian, size: 51, sigma: 10.0 }
/// strict_values: false
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InflationJob {
    #[serde(deserialize_with = "deserialize_region")]
    pub region: CellRegion,
    #[serde(default = "default_occupied_value")]
    pub occupied_value: u8,
    #[serde(default = "default_inflated_value")]
    pub inflated_value: u8,
    #[serde(default)]
    pub kernel: KernelSpec,
    #[serde(default)]
    pub strict_values: bool,
}

/// Kernel description; built into a [`Kernel`] by [`KernelSpec::build`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum KernelSpec {
    Uniform {
        #[serde(deserialize_with = "deserialize_kernel_size")]
        size: u32,
    },
    Ellipse {
        #[serde(deserialize_with = "deserialize_kernel_size")]
        size: u32,
    },
    Gaussian {
        #[serde(deserialize_with = "deserialize_kernel_size")]
        size: u32,
        #[serde(default)]
        sigma: f32,
    },
    /// Elliptical kernel sized from a metric radius and the map resolution.
    Radius { radius_m: f32 },
}

impl Default for KernelSpec {
    fn default() -> Self {
        Self::Gaussian {
            size: DEFAULT_KERNEL_SIZE,
            sigma: DEFAULT_GAUSSIAN_SIGMA,
        }
    }
}

impl KernelSpec {
    /// Build the kernel; `resolution` is only used by [`KernelSpec::Radius`].
    pub fn build(&self, resolution: f32) -> Result<Kernel, CostmapError> {
        match *self {
            Self::Uniform { size } => Kernel::uniform(size),
            Self::Ellipse { size } => Kernel::ellipse(size),
            Self::Gaussian { size, sigma } => Kernel::gaussian(size, sigma),
            Self::Radius { radius_m } => Kernel::from_radius(radius_m, resolution),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RegionRepr {
    Bounds([i32; 4]),
    Rect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

impl From<RegionRepr> for CellRegion {
    fn from(repr: RegionRepr) -> Self {
        match repr {
            RegionRepr::Bounds([min_x, min_y, max_x, max_y]) => {
                CellRegion::new(min_x, min_y, max_x, max_y)
            }
            RegionRepr::Rect {
                x,
                y,
                width,
                height,
            } => CellRegion::from_origin_size(IVec2::new(x, y), UVec2::new(width, height)),
        }
    }
}

fn deserialize_region<'de, D>(deserializer: D) -> Result<CellRegion, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let region: CellRegion = RegionRepr::deserialize(deserializer)?.into();
    if region.size().is_none() {
        return Err(serde::de::Error::custom(
            "region must not be empty or inverted",
        ));
    }
    Ok(region)
}

fn deserialize_kernel_size<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = u32::deserialize(deserializer)?;
    if value % 2 == 0 {
        return Err(serde::de::Error::custom(
            "kernel size must be a positive odd number",
        ));
    }
    if value > MAX_KERNEL_SIZE {
        return Err(serde::de::Error::custom(format!(
            "kernel size {value} exceeds the maximum of {MAX_KERNEL_SIZE}"
        )));
    }
    Ok(value)
}

fn default_occupied_value() -> u8 {
    COST_OCCUPIED
}

fn default_inflated_value() -> u8 {
    COST_INFLATED
}

impl InflationJob {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CostmapError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Inflator configured by this job for a map of the given `resolution`.
    pub fn inflator(&self, resolution: f32) -> Result<RegionInflator, CostmapError> {
        let inflator = RegionInflator::new(self.kernel.build(resolution)?)
            .with_values(self.occupied_value, self.inflated_value)
            .strict(self.strict_values);
        if self.strict_values {
            inflator.validate()?;
        }
        Ok(inflator)
    }
}

pub fn load_job(yaml_path: impl AsRef<Path>) -> Result<InflationJob, CostmapError> {
    let yaml_str = std::fs::read_to_string(yaml_path.as_ref())?;
    InflationJob::from_yaml_str(&yaml_str)
}
