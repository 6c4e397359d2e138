//! High-level library API: crop an image file to its content and write the
//! result next to it, or crop an in-memory raster. Prefer these entrypoints
//! over the low-level processing modules when integrating contentcrop.
use std::path::Path;

use tracing::{info, warn};

use crate::core::params::CropParams;
use crate::core::processing::pipeline::crop_to_content;
use crate::error::{Error, Result};
use crate::io::{read_rgb, write_rgb};
use crate::types::{BoundingBox, CropOutcome, Raster};

/// Result of in-memory cropping
#[derive(Debug, Clone)]
pub struct CroppedImage {
    /// Region of the source that was kept, after padding
    pub bounds: BoundingBox,
    pub raster: Raster,
}

/// Crop an in-memory raster to its content (no disk I/O)
pub fn crop_image(raster: &Raster, params: &CropParams) -> Result<CroppedImage> {
    let (bounds, raster) = crop_to_content(raster, params)?;
    Ok(CroppedImage { bounds, raster })
}

/// Decode `input`, crop it to its content and write the result to `output`.
///
/// The output keeps the input's encoding format and is always RGB. When the
/// input holds no foreground pixels nothing is written and
/// [`CropOutcome::NoContent`] is returned. `input` itself is never touched.
pub fn run(input: &Path, output: &Path, params: &CropParams) -> Result<CropOutcome> {
    ensure_distinct_paths(input, output)?;

    let (raster, format) = read_rgb(input)?;

    let cropped = match crop_image(&raster, params) {
        Ok(cropped) => cropped,
        Err(e) if e.is_empty_mask() => {
            warn!("{}; leaving {:?} untouched, no output written", e, input);
            return Ok(CropOutcome::NoContent);
        }
        Err(e) => return Err(e),
    };

    write_rgb(output, &cropped.raster, format)?;
    info!("Successfully processed: {:?} -> {:?}", input, output);

    Ok(CropOutcome::Cropped {
        bounds: cropped.bounds,
        width: cropped.raster.width(),
        height: cropped.raster.height(),
        format,
    })
}

fn ensure_distinct_paths(input: &Path, output: &Path) -> Result<()> {
    let same = input == output
        || match (input.canonicalize(), output.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        };
    if same {
        return Err(Error::InvalidArgument {
            arg: "output",
            value: output.display().to_string(),
        });
    }
    Ok(())
}
