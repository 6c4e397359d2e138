//! contentcrop entrypoint.
//!
//! Crops the fixed input image to its content with default parameters and
//! writes the fixed output path. For programmatic use, prefer the library API
//! (`contentcrop::api`).

use std::path::Path;

use contentcrop::{CropOutcome, CropParams};
use tracing_subscriber::EnvFilter;

const INPUT_PATH: &str = "public/character.png";
const OUTPUT_PATH: &str = "public/character-cropped.png";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let outcome = contentcrop::run(
        Path::new(INPUT_PATH),
        Path::new(OUTPUT_PATH),
        &CropParams::default(),
    )?;

    match outcome {
        CropOutcome::Cropped { width, height, .. } => {
            println!("Saved {} ({}, {})", OUTPUT_PATH, width, height);
        }
        CropOutcome::NoContent => {
            println!("No content detected in {}; nothing written", INPUT_PATH);
        }
    }
    Ok(())
}
