//! 2-D convolution over flat `f64` buffers
//!
//! True convolution (the kernel is flipped), odd-sized kernels only, output
//! the same shape as the input. The caller picks how samples outside the
//! grid are read via [`BorderPolicy`]. Rows are processed in parallel.

use rayon::prelude::*;

/// How out-of-bounds samples are read during convolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderPolicy {
    /// Out-of-bounds samples read as 0.0
    Zero,
    /// Mirror without repeating the edge sample: (d c b a | a b c d | d c b a)
    Reflect,
    /// Wrap around to the opposite edge (circular convolution)
    Wrap,
}

/// Convolve `src` (width x height) with an odd-sized kernel (kw x kh)
///
/// Returns a new buffer of the same shape. Panics if a kernel dimension is
/// even or zero, or if a buffer does not match its declared dimensions.
pub fn convolve_2d(
    src: &[f64],
    width: usize,
    height: usize,
    kernel: &[f64],
    kw: usize,
    kh: usize,
    border: BorderPolicy,
) -> Vec<f64> {
    assert_eq!(src.len(), width * height, "buffer does not match dimensions");
    assert_eq!(kernel.len(), kw * kh, "kernel does not match dimensions");
    assert!(kw % 2 == 1 && kh % 2 == 1, "kernel dimensions must be odd");

    if width == 0 || height == 0 {
        return Vec::new();
    }

    let half_w = (kw / 2) as isize;
    let half_h = (kh / 2) as isize;

    let mut out = vec![0.0; src.len()];
    out.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        for (x, dst) in row.iter_mut().enumerate() {
            let mut acc = 0.0;
            for ky in 0..kh as isize {
                for kx in 0..kw as isize {
                    // Flipped kernel: convolution, not correlation
                    let sy = y as isize + half_h - ky;
                    let sx = x as isize + half_w - kx;
                    let sample = match (
                        resolve_index(sx, width, border),
                        resolve_index(sy, height, border),
                    ) {
                        (Some(ix), Some(iy)) => src[iy * width + ix],
                        _ => 0.0,
                    };
                    acc += sample * kernel[(ky * kw as isize + kx) as usize];
                }
            }
            *dst = acc;
        }
    });

    out
}

/// Map a possibly out-of-bounds index to an in-bounds one, or None for Zero
fn resolve_index(i: isize, size: usize, border: BorderPolicy) -> Option<usize> {
    let s = size as isize;
    if (0..s).contains(&i) {
        return Some(i as usize);
    }
    match border {
        BorderPolicy::Zero => None,
        BorderPolicy::Reflect => {
            if i < 0 {
                Some(((-i - 1).rem_euclid(s)) as usize)
            } else {
                Some(((2 * s - i - 1).rem_euclid(s)) as usize)
            }
        }
        BorderPolicy::Wrap => Some(i.rem_euclid(s) as usize),
    }
}
