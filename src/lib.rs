pub mod grid;
pub mod inflation;
pub mod loaders;
pub mod region;
pub mod types;
pub mod visualization;

pub use grid::{Costmap, Grid2d};
pub use inflation::{InflationReport, InflationStats, Kernel, RegionInflator, inflate};
pub use loaders::{InflationJob, KernelSpec, load_job};
pub use region::{extract, merge, merge_max};
pub use types::{CellRegion, CostmapError, MapInfo};
