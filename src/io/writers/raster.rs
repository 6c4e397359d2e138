use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;
use tracing::info;

use crate::error::Result;
use crate::types::Raster;

/// Encode `raster` as RGB8 in `format` and write it to `output`.
///
/// Encoding happens in memory first, so a format that cannot hold RGB8
/// leaves no file behind.
pub fn write_rgb(output: &Path, raster: &Raster, format: ImageFormat) -> Result<()> {
    let mut encoded = Vec::new();
    raster.write_to(&mut Cursor::new(&mut encoded), format)?;
    fs::write(output, &encoded)?;

    info!(
        "Wrote {:?}: {}x{} ({:?})",
        output,
        raster.width(),
        raster.height(),
        format
    );
    Ok(())
}
