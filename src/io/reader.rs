use std::path::Path;

use image::error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::{ImageError, ImageFormat, ImageReader};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::Raster;

/// Decode the image at `path` into an RGB raster.
///
/// The format is sniffed from the file content; alpha is dropped, not
/// composited. The file handle is released before returning.
pub fn read_rgb(path: &Path) -> Result<(Raster, ImageFormat)> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format().ok_or_else(|| {
        let hint = ImageFormatHint::PathExtension(path.to_path_buf());
        Error::Image(ImageError::Unsupported(
            UnsupportedError::from_format_and_kind(
                hint.clone(),
                UnsupportedErrorKind::Format(hint),
            ),
        ))
    })?;
    let raster = reader.decode()?.into_rgb8();

    info!(
        "Decoded {:?}: {}x{} ({:?})",
        path,
        raster.width(),
        raster.height(),
        format
    );
    Ok((raster, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn rgba_png_is_flattened_to_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.png");
        RgbaImage::from_pixel(6, 4, Rgba([10, 20, 30, 0]))
            .save(&path)
            .unwrap();

        let (raster, format) = read_rgb(&path).unwrap();
        assert_eq!(format, ImageFormat::Png);
        assert_eq!(raster.dimensions(), (6, 4));
        assert_eq!(raster.get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn format_comes_from_content_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("actually_png.bin");
        Raster::from_pixel(3, 3, image::Rgb([1, 2, 3]))
            .save_with_format(&png, ImageFormat::Png)
            .unwrap();

        let (_, format) = read_rgb(&png).unwrap();
        assert_eq!(format, ImageFormat::Png);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_rgb(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn garbage_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        assert!(read_rgb(&path).is_err());
    }
}
