pub mod job;

pub use job::{InflationJob, KernelSpec, load_job};
