//! Histogram equalisation

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::Raster;
use crate::ops::{cdf_256, histogram_256};

/// Diagnostic view of an equalized raster: its histogram and CDF.
///
/// Not needed to produce the result; useful to verify that equalisation
/// flattened the distribution (the CDF should be near-linear).
#[derive(Debug, Clone)]
pub struct EqualizationReport {
    /// 256-bin intensity histogram of the output raster
    pub histogram: [u32; 256],
    /// Normalized cumulative distribution of the output raster
    pub cdf: [f64; 256],
}

/// Remap intensities of a grayscale raster through its histogram CDF.
///
/// Each intensity `v` becomes `round(CDF[v] * 256)`, clamped to 255. The
/// 256 scale factor matches the original formulation, which can land one
/// past the 8-bit maximum; the clamp keeps the output in range. The input
/// is read only; a fresh raster of the same shape is returned.
pub fn equalize(raster: &Raster) -> AnalysisResult<Raster> {
    let lut = equalization_lut(raster)?;
    let data: Vec<u8> = raster
        .as_bytes()
        .iter()
        .map(|&pix| lut[pix as usize])
        .collect();
    Raster::grayscale(raster.width(), raster.height(), data)
}

/// Equalize a grayscale raster in place
pub fn equalize_in_place(raster: &mut Raster) -> AnalysisResult<()> {
    *raster = equalize(raster)?;
    Ok(())
}

/// Equalize and also return the histogram/CDF of the transformed raster
pub fn equalize_with_report(raster: &Raster) -> AnalysisResult<(Raster, EqualizationReport)> {
    let equalized = equalize(raster)?;
    let histogram = histogram_256(equalized.as_bytes());
    let cdf = cdf_256(&histogram, equalized.as_bytes().len());
    Ok((equalized, EqualizationReport { histogram, cdf }))
}

/// Build the intensity remap table from the raster's own histogram
fn equalization_lut(raster: &Raster) -> AnalysisResult<[u8; 256]> {
    if !raster.is_grayscale() {
        return Err(AnalysisError::ChannelMismatch {
            expected: 1,
            got: raster.channels(),
        });
    }

    let histogram = histogram_256(raster.as_bytes());
    let cdf = cdf_256(&histogram, raster.width() * raster.height());

    let mut lut = [0u8; 256];
    for (slot, &c) in lut.iter_mut().zip(cdf.iter()) {
        *slot = (c * 256.0).round().min(255.0) as u8;
    }
    Ok(lut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_stays_in_range() {
        // The brightest occupied level has CDF 1.0, so the raw formula
        // yields 256; the clamp must bring it back to 255
        let raster = Raster::grayscale(2, 2, vec![10, 10, 10, 10]).unwrap();
        let equalized = equalize(&raster).unwrap();
        assert!(equalized.as_bytes().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_two_level_split() {
        // Half the pixels at one level, half at another: CDF is 0.5 then
        // 1.0, mapping to 128 and 255 (clamped from 256)
        let raster = Raster::grayscale(2, 2, vec![50, 50, 200, 200]).unwrap();
        let equalized = equalize(&raster).unwrap();
        assert_eq!(equalized.as_bytes(), &[128, 128, 255, 255]);
    }

    #[test]
    fn test_input_not_mutated() {
        let raster = Raster::grayscale(2, 2, vec![5, 80, 160, 240]).unwrap();
        let before = raster.clone();
        let _ = equalize(&raster).unwrap();
        assert_eq!(raster, before);
    }

    #[test]
    fn test_in_place_matches_pure() {
        let raster = Raster::grayscale(4, 1, vec![5, 80, 160, 240]).unwrap();
        let mut in_place = raster.clone();
        equalize_in_place(&mut in_place).unwrap();
        assert_eq!(in_place, equalize(&raster).unwrap());
    }

    #[test]
    fn test_report_cdf_reaches_one() {
        let data: Vec<u8> = (0..64).map(|i| (i * 4) as u8).collect();
        let raster = Raster::grayscale(8, 8, data).unwrap();
        let (_, report) = equalize_with_report(&raster).unwrap();
        assert!((report.cdf[255] - 1.0).abs() < 1e-12);
        assert_eq!(
            report.histogram.iter().map(|&c| c as usize).sum::<usize>(),
            64
        );
    }

    #[test]
    fn test_color_raster_rejected() {
        let raster = Raster::from_raw(2, 2, 3, vec![0; 12]).unwrap();
        assert!(matches!(
            equalize(&raster),
            Err(AnalysisError::ChannelMismatch { .. })
        ));
    }
}
