pub mod raster;
pub use raster::write_rgb;
