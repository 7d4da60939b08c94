//! grayscope - frequency-domain and spatial analysis for grayscale rasters
//!
//! Four stateless routines over an in-memory 2-D grayscale raster:
//! centered amplitude/phase spectra via a 2-D DFT, a frequency-domain
//! energy-ratio blur metric, a 3x3 Laplacian edge filter, and histogram
//! equalisation. Callers own the rasters; every routine reads its input
//! and returns a fresh value.
//!
//! # Example
//! ```
//! use grayscope::{Raster, energy_ratio, laplacian};
//!
//! let raster = Raster::grayscale(4, 4, (0..16u8).map(|i| i * 16).collect()).unwrap();
//! let edges = laplacian(&raster).unwrap();
//! assert_eq!(edges.width(), 4);
//! let ratio = energy_ratio(&raster).unwrap();
//! assert!(ratio.is_finite());
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Analysis routines (spectrum, blur metric, Laplacian, equalisation)
pub mod analysis;
/// Error types surfaced by the analysis routines
pub mod error;
/// Core data structures (Raster, FloatRaster, Spectrum)
pub mod models;
/// Numeric primitives (FFT, convolution, histogram)
pub mod ops;

pub use analysis::{
    EqualizationReport, LAPLACIAN_KERNEL, MAG_EPSILON, energy_ratio, equalize, equalize_in_place,
    equalize_with_report, laplacian, laplacian_with_border, spectrum,
};
pub use error::{AnalysisError, AnalysisResult};
pub use models::{FloatRaster, Raster, Spectrum};
pub use ops::BorderPolicy;
