use ndarray::Array2;

use crate::types::{Mask, Raster};

/// Mark every pixel with at least one channel strictly below `threshold`.
///
/// The result has shape `(height, width)` and is indexed `[row, col]`.
pub fn compute_mask(raster: &Raster, threshold: u8) -> Mask {
    let (cols, rows) = raster.dimensions();
    let mut mask = Array2::from_elem((rows as usize, cols as usize), false);
    for (x, y, pixel) in raster.enumerate_pixels() {
        mask[[y as usize, x as usize]] = pixel.0.iter().any(|&v| v < threshold);
    }
    mask
}
