//! Centered amplitude/phase spectrum of a grayscale raster

use rustfft::num_complex::Complex;

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{FloatRaster, Raster, Spectrum};
use crate::ops::{fft_2d, fftshift};

/// Magnitude floor applied before the logarithm.
///
/// Bins with zero magnitude would otherwise produce negative infinity;
/// clamping pins them to a finite floor of -240 dB instead.
pub const MAG_EPSILON: f64 = 1e-12;

/// Compute the centered amplitude and phase spectra of a grayscale raster.
///
/// Samples are scaled to [0, 1] before the forward 2-D DFT. The complex grid
/// is recentered so the zero-frequency bin sits at the geometric center, then
/// reduced to amplitude `20 * log10(max(magnitude, MAG_EPSILON))` and phase
/// `atan2(imag, real)` per bin.
pub fn spectrum(raster: &Raster) -> AnalysisResult<Spectrum> {
    if !raster.is_grayscale() {
        return Err(AnalysisError::ChannelMismatch {
            expected: 1,
            got: raster.channels(),
        });
    }

    let (width, height) = (raster.width(), raster.height());
    let mut bins: Vec<Complex<f64>> = raster
        .as_bytes()
        .iter()
        .map(|&pix| Complex::new(pix as f64 / 255.0, 0.0))
        .collect();

    fft_2d(width, height, &mut bins);
    let centered = fftshift(width, height, &bins);

    let amplitude: Vec<f64> = centered
        .iter()
        .map(|bin| 20.0 * bin.norm().max(MAG_EPSILON).log10())
        .collect();
    let phase: Vec<f64> = centered.iter().map(|bin| bin.arg()).collect();

    Ok(Spectrum {
        amplitude: FloatRaster::from_vec(width, height, amplitude)?,
        phase: FloatRaster::from_vec(width, height, phase)?,
    })
}
