//! 2-D discrete Fourier transform primitives
//!
//! Built from rustfft's 1-D planner: rows are transformed in place, then
//! columns via a transpose round-trip. `fftshift`/`ifftshift` follow the
//! numpy convention (roll by `n / 2`, odd lengths split by floor division).

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

/// Forward 2-D FFT, in place, row-major buffer of `width * height` bins
pub fn fft_2d(width: usize, height: usize, data: &mut [Complex<f64>]) {
    assert_eq!(data.len(), width * height, "buffer does not match dimensions");
    if width == 0 || height == 0 {
        return;
    }

    let mut planner = FftPlanner::new();

    // Rows: process() splits the buffer into width-sized chunks
    let row_fft = planner.plan_fft_forward(width);
    row_fft.process(data);

    // Columns: transpose, transform as rows, transpose back
    let mut transposed = transpose(width, height, data);
    let col_fft = planner.plan_fft_forward(height);
    col_fft.process(&mut transposed);
    let restored = transpose(height, width, &transposed);
    data.copy_from_slice(&restored);
}

/// Inverse 2-D FFT, in place, normalized by `1 / (width * height)`
pub fn ifft_2d(width: usize, height: usize, data: &mut [Complex<f64>]) {
    assert_eq!(data.len(), width * height, "buffer does not match dimensions");
    if width == 0 || height == 0 {
        return;
    }

    let mut planner = FftPlanner::new();

    let row_fft = planner.plan_fft_inverse(width);
    row_fft.process(data);

    let mut transposed = transpose(width, height, data);
    let col_fft = planner.plan_fft_inverse(height);
    col_fft.process(&mut transposed);
    let restored = transpose(height, width, &transposed);
    data.copy_from_slice(&restored);

    let scale = 1.0 / (width * height) as f64;
    for bin in data.iter_mut() {
        *bin *= scale;
    }
}

/// Relocate the zero-frequency bin to the grid center (quadrant swap)
pub fn fftshift<T: Copy + Default>(width: usize, height: usize, data: &[T]) -> Vec<T> {
    shift_by(width, height, data, width.div_ceil(2), height.div_ceil(2))
}

/// Undo `fftshift`, restoring the zero-frequency bin to index (0, 0)
pub fn ifftshift<T: Copy + Default>(width: usize, height: usize, data: &[T]) -> Vec<T> {
    shift_by(width, height, data, width / 2, height / 2)
}

/// Circular shift: out[y][x] = in[(y + dy) % h][(x + dx) % w]
fn shift_by<T: Copy + Default>(
    width: usize,
    height: usize,
    data: &[T],
    dx: usize,
    dy: usize,
) -> Vec<T> {
    assert_eq!(data.len(), width * height, "buffer does not match dimensions");
    let mut out = vec![T::default(); data.len()];
    for y in 0..height {
        let sy = (y + dy) % height.max(1);
        for x in 0..width {
            let sx = (x + dx) % width.max(1);
            out[y * width + x] = data[sy * width + sx];
        }
    }
    out
}

fn transpose(width: usize, height: usize, data: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let mut out = vec![Complex::default(); data.len()];
    for y in 0..height {
        for x in 0..width {
            out[x * height + y] = data[y * width + x];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_complex(values: &[f64]) -> Vec<Complex<f64>> {
        values.iter().map(|&v| Complex::new(v, 0.0)).collect()
    }

    #[test]
    fn test_fft_dc_component() {
        // DC bin holds the plain sum of the samples
        let mut data = to_complex(&[1.0, 2.0, 3.0, 4.0]);
        fft_2d(2, 2, &mut data);
        assert!((data[0].re - 10.0).abs() < 1e-12);
        assert!(data[0].im.abs() < 1e-12);
    }

    #[test]
    fn test_fft_ifft_round_trip() {
        let original = [5.0, 1.0, 8.0, 2.0, 9.0, 3.0, 7.0, 4.0, 6.0, 0.0, 2.5, 1.5];
        let mut data = to_complex(&original);
        fft_2d(4, 3, &mut data);
        ifft_2d(4, 3, &mut data);
        for (bin, expected) in data.iter().zip(&original) {
            assert!((bin.re - expected).abs() < 1e-9);
            assert!(bin.im.abs() < 1e-9);
        }
    }

    #[test]
    fn test_fftshift_even() {
        let data = [0, 1, 2, 3];
        let shifted = fftshift(2, 2, &data);
        assert_eq!(shifted, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_fftshift_moves_origin_to_center() {
        // 4x4 impulse at (0, 0) lands at the center bin (2, 2)
        let mut data = [0u8; 16];
        data[0] = 1;
        let shifted = fftshift(4, 4, &data);
        assert_eq!(shifted[2 * 4 + 2], 1);
        assert_eq!(shifted.iter().filter(|&&v| v == 1).count(), 1);
    }

    #[test]
    fn test_fftshift_odd_round_trip() {
        // Odd dims: fftshift and ifftshift differ, but still invert each other
        let data: Vec<u32> = (0..15).collect();
        let shifted = fftshift(5, 3, &data);
        assert_ne!(shifted, data);
        let restored = ifftshift(5, 3, &shifted);
        assert_eq!(restored, data);
    }

    #[test]
    fn test_fftshift_odd_row() {
        // Matches numpy: fftshift([0,1,2,3,4]) == [3,4,0,1,2]
        let data = [0, 1, 2, 3, 4];
        assert_eq!(fftshift(5, 1, &data), vec![3, 4, 0, 1, 2]);
        assert_eq!(ifftshift(5, 1, &[3, 4, 0, 1, 2]), vec![0, 1, 2, 3, 4]);
    }
}
