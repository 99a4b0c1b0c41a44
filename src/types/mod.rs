pub mod constants;
pub mod error;
pub mod geometry;
pub mod info;

pub use constants::*;
pub use error::CostmapError;
pub use geometry::CellRegion;
pub use info::MapInfo;
