//! I/O layer: decoding input files to RGB rasters and encoding cropped
//! rasters back out in the input's format.
pub mod reader;
pub use reader::read_rgb;

pub mod writers;
pub use writers::write_rgb;
