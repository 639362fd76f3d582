use thiserror::Error;

/// Reasons a downsampling call is rejected before any pixel is read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownsampleError {
    #[error("invalid dimensions {height}x{width}: both must be positive")]
    InvalidDimensions { height: i64, width: i64 },

    #[error("dimensions {height}x{width} overflow the addressable pixel count")]
    DimensionsOverflow { height: u32, width: u32 },

    #[error("pixel buffer holds {actual} samples, {expected} required")]
    BufferTooShort { expected: usize, actual: usize },
}
