//! Error types for the analysis routines
//!
//! Every failure is detected at the point of computation and returned to the
//! caller immediately; nothing is retried or recovered internally.

use std::fmt;

/// Result type alias for the analysis routines
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type for the analysis routines
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// An operation that requires a single-channel raster received a
    /// multi-channel one (e.g. a color image passed to a grayscale filter)
    ChannelMismatch {
        /// Channels the operation requires
        expected: usize,
        /// Channels the raster actually has
        got: usize,
    },

    /// A flat buffer does not match the declared raster dimensions
    SizeMismatch {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Declared channel count
        channels: usize,
        /// Actual buffer length
        len: usize,
    },

    /// The peak of the amplitude spectrum is zero or non-finite, so the
    /// energy ratio is undefined
    DegenerateSpectrum {
        /// The offending peak amplitude
        peak: f64,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::ChannelMismatch { expected, got } => {
                write!(
                    f,
                    "Channel mismatch: expected {} channel(s), got {}",
                    expected, got
                )
            }
            AnalysisError::SizeMismatch {
                width,
                height,
                channels,
                len,
            } => {
                write!(
                    f,
                    "Size mismatch: {}x{}x{} raster requires {} samples, buffer has {}",
                    width,
                    height,
                    channels,
                    width * height * channels,
                    len
                )
            }
            AnalysisError::DegenerateSpectrum { peak } => {
                write!(
                    f,
                    "Degenerate spectrum: peak amplitude {} leaves the energy ratio undefined",
                    peak
                )
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
