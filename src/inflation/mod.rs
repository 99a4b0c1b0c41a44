//! Obstacle inflation for `u8` costmaps.
//!
//! [`inflate`] spreads an occupied sentinel value through a weighting
//! [`Kernel`] and stamps an inflated sentinel on newly covered cells.
//! [`RegionInflator`] runs the full extract → inflate → merge cycle on one
//! window of a larger costmap.

pub mod engine;
pub mod inflator;
pub mod kernel;

pub use engine::{InflationStats, inflate, occupancy_mask, weighted_response};
pub use inflator::{InflationReport, RegionInflator};
pub use kernel::{Kernel, inflation_radius_to_cells};
