use tracing::{debug, info};

use crate::core::params::CropParams;
use crate::core::processing::bounds::extract_bounds;
use crate::core::processing::crop::crop_raster;
use crate::core::processing::mask::compute_mask;
use crate::core::processing::padding::pad_bounds;
use crate::error::Result;
use crate::types::{BoundingBox, Raster};

/// Mask, bound, pad and crop `raster` in memory.
///
/// Returns the padded bounds alongside the cropped raster. An all-background
/// raster yields [`crate::Error::EmptyMask`].
pub fn crop_to_content(raster: &Raster, params: &CropParams) -> Result<(BoundingBox, Raster)> {
    let (width, height) = raster.dimensions();

    let mask = compute_mask(raster, params.threshold);
    debug!(
        "Foreground pixels: {} of {}",
        mask.iter().filter(|&&m| m).count(),
        mask.len()
    );

    let raw = extract_bounds(&mask)?;
    info!("Content bounds: {}", raw);

    let padded = pad_bounds(raw, params.padding, height, width);
    let cropped = crop_raster(raster, padded)?;
    info!(
        "Cropped {}x{} -> {}x{}",
        width,
        height,
        cropped.width(),
        cropped.height()
    );

    Ok((padded, cropped))
}
