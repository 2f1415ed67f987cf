use thiserror::Error;

#[derive(Debug, Error)]
pub enum RectPackerError {
    #[error("Invalid dimensions: width and height must be greater than 0 (got {width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid container: width and height must be greater than 0 (got {width}x{height})")]
    InvalidContainer { width: u32, height: u32 },

    #[error("Nothing to pack: input list is empty")]
    Empty,

    #[error(
        "Generator cannot produce {requested} piece(s) from a {width}x{height} container with minimum piece size {min_size}"
    )]
    GeneratorUnreachable {
        requested: usize,
        width: u32,
        height: u32,
        min_size: u32,
    },

    #[error("Invalid ratio bound: ratio_min must be in (0, 0.5], got {ratio_min}")]
    InvalidRatio { ratio_min: f64 },
}

pub type Result<T> = std::result::Result<T, RectPackerError>;
