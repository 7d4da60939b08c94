//! Frequency-domain blur metric (energy ratio)

use crate::analysis::spectrum::spectrum;
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::Raster;

/// Reduce a grayscale raster to a scalar energy ratio quantifying blur.
///
/// With `A` the centered log-amplitude spectrum, the ratio is
/// `sum(A^2) / max(A)^2`. A higher ratio means the spectral energy is
/// spread away from the peak, which for natural images means a blurrier
/// input; a lower ratio means a sharper one.
///
/// Returns [`AnalysisError::DegenerateSpectrum`] when the peak amplitude is
/// zero or non-finite (e.g. an empty raster), since the ratio is undefined
/// there.
pub fn energy_ratio(raster: &Raster) -> AnalysisResult<f64> {
    let spec = spectrum(raster)?;

    let f0 = spec.amplitude.max_value();
    if f0 == 0.0 || !f0.is_finite() {
        return Err(AnalysisError::DegenerateSpectrum { peak: f0 });
    }

    let energy: f64 = spec.amplitude.as_slice().iter().map(|&a| a * a).sum();
    Ok(energy / (f0 * f0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_raster_is_degenerate() {
        let raster = Raster::grayscale(0, 0, Vec::new()).unwrap();
        let err = energy_ratio(&raster).unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateSpectrum { .. }));
    }

    #[test]
    fn test_color_raster_rejected() {
        let raster = Raster::from_raw(2, 2, 3, vec![128; 12]).unwrap();
        let err = energy_ratio(&raster).unwrap_err();
        assert!(matches!(err, AnalysisError::ChannelMismatch { .. }));
    }

    #[test]
    fn test_ratio_is_finite_and_positive() {
        let data: Vec<u8> = (0..256).map(|i| (i * 97 % 256) as u8).collect();
        let raster = Raster::grayscale(16, 16, data).unwrap();
        let ratio = energy_ratio(&raster).unwrap();
        assert!(ratio.is_finite());
        assert!(ratio > 0.0);
    }

    #[test]
    fn test_constant_raster_ratio() {
        // Flat field: one dominant DC bin, everything else on the clamp
        // floor. The ratio is finite because the clamp keeps amplitudes
        // finite, and it is dominated by the floor bins.
        let raster = Raster::flat(8, 8, 128);
        let ratio = energy_ratio(&raster).unwrap();
        assert!(ratio.is_finite());
        assert!(ratio > 1.0);
    }
}
