use serde::{Deserialize, Serialize};

/// Per-channel value below which a pixel counts as foreground.
pub const DEFAULT_THRESHOLD: u8 = 245;

/// Pixels added to each edge of the detected region.
pub const DEFAULT_PADDING: u32 = 10;

/// Cropping parameters suitable for embedding in a larger config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropParams {
    /// A pixel is foreground if any of its R, G, B values is below this
    pub threshold: u8,
    /// Margin added around the detected region, clamped to the image
    pub padding: u32,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            padding: DEFAULT_PADDING,
        }
    }
}
