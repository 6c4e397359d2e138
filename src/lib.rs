#![doc = r#"
contentcrop — trim the white margin around an image.

Decodes a single raster image, finds the bounding box of every pixel that is not
near-white, grows that box by a fixed padding (clamped to the image), crops to it
and writes the result as RGB in the same format as the input.

A pixel is foreground when *any* of its red, green or blue values is below the
threshold (245 by default). Padding defaults to 10 pixels.

Quick start: crop a file
------------------------
```rust,no_run
use std::path::Path;
use contentcrop::{run, CropOutcome, CropParams};

fn main() -> contentcrop::Result<()> {
    match run(
        Path::new("public/character.png"),
        Path::new("public/character-cropped.png"),
        &CropParams::default(),
    )? {
        CropOutcome::Cropped { width, height, .. } => println!("{}x{}", width, height),
        CropOutcome::NoContent => println!("nothing to crop"),
    }
    Ok(())
}
```

Crop in memory
--------------
```rust
use contentcrop::{crop_image, BoundingBox, CropParams, Raster};
use image::Rgb;

let mut raster = Raster::from_pixel(100, 100, Rgb([255, 255, 255]));
raster.put_pixel(50, 50, Rgb([0, 0, 0]));

let cropped = crop_image(&raster, &CropParams::default()).unwrap();
assert_eq!(cropped.bounds, BoundingBox::new(40, 40, 60, 60));
assert_eq!(cropped.raster.dimensions(), (20, 20));
```

Error handling
--------------
All fallible functions return `contentcrop::Result<T>`. `Error::EmptyMask` means
no foreground was found; [`run`] turns it into [`CropOutcome::NoContent`] instead
of failing. `Error::InvalidRegion` signals a crop rectangle that has zero area or
falls outside the image.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — parameters and the mask / bounds / padding / crop primitives.
- [`io`] — decoding and encoding.
- [`types`] — `BoundingBox`, `Raster`, `Mask`, `CropOutcome`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::{CropParams, DEFAULT_PADDING, DEFAULT_THRESHOLD};
pub use error::{Error, Result};
pub use types::{BoundingBox, CropOutcome, Mask, Raster};

// Primitives
pub use crate::core::processing::bounds::extract_bounds;
pub use crate::core::processing::crop::crop_raster;
pub use crate::core::processing::mask::compute_mask;
pub use crate::core::processing::padding::pad_bounds;
pub use crate::core::processing::pipeline::crop_to_content;

// I/O
pub use io::{read_rgb, write_rgb};

// High-level API
pub use api::{CroppedImage, crop_image, run};
