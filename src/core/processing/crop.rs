use image::imageops;

use crate::error::{Error, Result};
use crate::types::{BoundingBox, Raster};

/// Copy the half-open region `[top, bottom) x [left, right)` out of `raster`.
///
/// Fails with [`Error::InvalidRegion`] if the region has zero area or does not
/// fit inside the raster.
pub fn crop_raster(raster: &Raster, bounds: BoundingBox) -> Result<Raster> {
    let (width, height) = raster.dimensions();
    if bounds.is_empty() || !bounds.fits_within(width, height) {
        return Err(Error::InvalidRegion {
            bounds,
            width,
            height,
        });
    }

    let view = imageops::crop_imm(
        raster,
        bounds.left,
        bounds.top,
        bounds.width(),
        bounds.height(),
    );
    Ok(view.to_image())
}
