//! Core building blocks: crop parameters and the mask / bounds / padding /
//! crop primitives. These are consumed by the high-level `api` module.
pub mod params;
pub mod processing;
