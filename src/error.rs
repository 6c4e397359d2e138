//! Crate-level error type and `Result` alias.
//! Wraps decode/encode failures from I/O and the `image` crate, and provides
//! semantic variants for the empty-mask condition and invalid crop regions.
use thiserror::Error;

use crate::types::BoundingBox;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("No foreground content detected in {width}x{height} image")]
    EmptyMask { width: u32, height: u32 },

    #[error("Invalid crop region {bounds} for {width}x{height} image")]
    InvalidRegion {
        bounds: BoundingBox,
        width: u32,
        height: u32,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },
}

impl Error {
    /// True for the "nothing to crop" condition, which callers treat as a
    /// skip rather than a failure.
    pub fn is_empty_mask(&self) -> bool {
        matches!(self, Error::EmptyMask { .. })
    }
}
