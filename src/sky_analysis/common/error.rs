use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Unsupported channel count: {0} (expected 3 or more)")]
    UnsupportedChannels(usize),

    #[error("Pixel data length {actual} does not match {width}x{height}x{channels}")]
    BufferSizeMismatch {
        width: usize,
        height: usize,
        channels: usize,
        actual: usize,
    },
}

#[derive(Error, Debug)]
pub enum InvalidInputError {
    #[error("Radiance must be non-negative, got {0}")]
    NegativeRadiance(f64),

    #[error("Radiance must be finite, got {0}")]
    NonFiniteRadiance(f64),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
