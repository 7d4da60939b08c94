use crate::error::{AnalysisError, AnalysisResult};

/// Owned 2-D raster of 8-bit samples in row-major order.
///
/// One channel is grayscale; three channels is interleaved RGB. The flat
/// buffer always holds exactly `width * height * channels` bytes, so every
/// row has equal length by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Create a raster from a flat buffer, validating the shape invariant
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> AnalysisResult<Self> {
        if data.len() != width * height * channels {
            return Err(AnalysisError::SizeMismatch {
                width,
                height,
                channels,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Create a single-channel grayscale raster from a flat buffer
    pub fn grayscale(width: usize, height: usize, data: Vec<u8>) -> AnalysisResult<Self> {
        Self::from_raw(width, height, 1, data)
    }

    /// Create a grayscale raster filled with a constant intensity
    pub fn flat(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            channels: 1,
            data: vec![value; width * height],
        }
    }

    /// Raster width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of interleaved channels per pixel
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// True when the raster is single-channel
    pub fn is_grayscale(&self) -> bool {
        self.channels == 1
    }

    /// Sample at (x, y) in the first channel; None when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) * self.channels])
    }

    /// Flat view of the raw samples
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the raster and return the flat buffer
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// Owned 2-D grid of `f64` samples in row-major order.
///
/// Used for spectra and filter outputs where values leave the 8-bit range.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatRaster {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl FloatRaster {
    /// Create a zero-filled grid with the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Wrap a flat buffer, validating the shape invariant
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> AnalysisResult<Self> {
        if data.len() != width * height {
            return Err(AnalysisError::SizeMismatch {
                width,
                height,
                channels: 1,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Grid width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at (x, y); None when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }

    /// Overwrite the sample at (x, y); ignored when out of bounds
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[y * self.width + x] = value;
    }

    /// Flat view of the samples
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Largest sample in the grid, or NEG_INFINITY for an empty grid
    pub fn max_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}
