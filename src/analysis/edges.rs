//! Laplacian edge filter

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{FloatRaster, Raster};
use crate::ops::{BorderPolicy, convolve_2d};

/// Discrete 3x3 approximation of the Laplacian operator
pub const LAPLACIAN_KERNEL: [f64; 9] = [0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0];

/// Convolve a grayscale raster with the Laplacian kernel, reflect border.
///
/// The output has the same shape as the input, with large magnitudes where
/// intensity changes rapidly. With the reflect border a flat field maps to
/// all zeros, borders included.
pub fn laplacian(raster: &Raster) -> AnalysisResult<FloatRaster> {
    laplacian_with_border(raster, BorderPolicy::Reflect)
}

/// Laplacian filter with an explicit border policy
pub fn laplacian_with_border(
    raster: &Raster,
    border: BorderPolicy,
) -> AnalysisResult<FloatRaster> {
    if !raster.is_grayscale() {
        return Err(AnalysisError::ChannelMismatch {
            expected: 1,
            got: raster.channels(),
        });
    }

    let (width, height) = (raster.width(), raster.height());
    let src: Vec<f64> = raster.as_bytes().iter().map(|&pix| pix as f64).collect();
    let out = convolve_2d(&src, width, height, &LAPLACIAN_KERNEL, 3, 3, border);
    FloatRaster::from_vec(width, height, out)
}
