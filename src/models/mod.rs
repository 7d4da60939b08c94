//! Core data structures shared by the analysis routines

pub mod raster;
pub mod spectrum;

pub use raster::{FloatRaster, Raster};
pub use spectrum::Spectrum;
