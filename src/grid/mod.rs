pub mod grid2d;
pub mod patterns;

pub use grid2d::Grid2d;

/// Grid of `u8` costs.
pub type Costmap = Grid2d<u8>;
