use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostmapError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
    #[error("out of bounds: {0}")]
    OutOfBounds(String),
    #[error("invalid region: {0}")]
    InvalidRegion(String),
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),
    #[error("invalid value: {0}")]
    InvalidValue(String),
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}
