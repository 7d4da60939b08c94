use crate::models::FloatRaster;

/// Centered amplitude and phase spectra of a raster.
///
/// Both grids share the shape of the analyzed raster, with the
/// zero-frequency bin at the geometric center. Amplitude is in decibels
/// (`20 * log10(magnitude)`); phase is in radians in (-PI, PI].
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Log-scaled magnitude per frequency bin
    pub amplitude: FloatRaster,
    /// Phase angle per frequency bin
    pub phase: FloatRaster,
}

impl Spectrum {
    /// Spectrum width in bins (same as the input raster width)
    pub fn width(&self) -> usize {
        self.amplitude.width()
    }

    /// Spectrum height in bins (same as the input raster height)
    pub fn height(&self) -> usize {
        self.amplitude.height()
    }
}
