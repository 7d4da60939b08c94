//! Numeric primitives backing the analysis routines
//!
//! Thin, stateless wrappers over flat buffers: the 2-D FFT and its centering
//! shifts, 2-D convolution with an explicit border policy, and the 256-bin
//! intensity histogram. The analysis layer only ever touches a numeric
//! backend through this module.

pub mod convolve;
pub mod fft;
pub mod histogram;

pub use convolve::{BorderPolicy, convolve_2d};
pub use fft::{fft_2d, fftshift, ifft_2d, ifftshift};
pub use histogram::{cdf_256, histogram_256};
