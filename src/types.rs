//! Shared types used across contentcrop.
//! Includes the `Raster` alias, the boolean `Mask`, `BoundingBox`, and the
//! `CropOutcome` reported by `api::run`.
use std::fmt;

use image::ImageFormat;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Decoded RGB pixel grid, 8 bits per channel.
pub type Raster = image::RgbImage;

/// Foreground mask indexed `[row, col]`, shape `(height, width)`.
pub type Mask = Array2<bool>;

/// Axis-aligned rectangle in pixel coordinates.
///
/// Valid boxes satisfy `top <= bottom <= height` and `left <= right <= width`.
/// Boxes coming out of [`crate::extract_bounds`] use inclusive `bottom`/`right`;
/// once padded they are consumed as the half-open range `[top, bottom) x [left, right)`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
}

impl BoundingBox {
    pub fn new(top: u32, left: u32, bottom: u32, right: u32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Zero area (or inverted edges).
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.top <= self.bottom
            && self.left <= self.right
            && self.bottom <= height
            && self.right <= width
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(top={}, left={}, bottom={}, right={})",
            self.top, self.left, self.bottom, self.right
        )
    }
}

/// What `run` did with the input.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CropOutcome {
    /// Output written; `bounds` is the padded region taken from the input.
    Cropped {
        bounds: BoundingBox,
        width: u32,
        height: u32,
        format: ImageFormat,
    },
    /// Every pixel was background; nothing was written.
    NoContent,
}

impl fmt::Display for CropOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropOutcome::Cropped { width, height, .. } => {
                write!(f, "Cropped to {}x{}", width, height)
            }
            CropOutcome::NoContent => write!(f, "No content detected"),
        }
    }
}
