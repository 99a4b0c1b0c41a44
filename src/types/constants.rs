/// Cost of a cell with no obstacle.
pub const COST_FREE: u8 = 0;
/// Default sentinel marking an obstacle cell.
pub const COST_OCCUPIED: u8 = 250;
/// Default sentinel for the safety band around obstacles.
pub const COST_INFLATED: u8 = 100;

pub const DEFAULT_KERNEL_SIZE: u32 = 51;
/// Largest accepted kernel edge length in cells.
pub const MAX_KERNEL_SIZE: u32 = 4001;
pub const DEFAULT_GAUSSIAN_SIGMA: f32 = 10.0;
pub const DEFAULT_RESOLUTION: f32 = 0.05;
