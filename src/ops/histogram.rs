//! 256-bin intensity histogram and its cumulative distribution

/// Count samples at each of the 256 intensity levels
pub fn histogram_256(gray: &[u8]) -> [u32; 256] {
    let mut histogram = [0u32; 256];
    for &pixel in gray {
        histogram[pixel as usize] += 1;
    }
    histogram
}

/// Cumulative distribution of a histogram, normalized by `total` samples
///
/// The result is non-decreasing with values in [0, 1]; the last entry is
/// 1.0 when `total` equals the histogram's sample count. A zero `total`
/// yields all zeros rather than dividing by zero.
pub fn cdf_256(histogram: &[u32; 256], total: usize) -> [f64; 256] {
    let mut cdf = [0.0f64; 256];
    if total == 0 {
        return cdf;
    }
    let scale = 1.0 / total as f64;
    let mut running = 0u64;
    for (slot, &count) in cdf.iter_mut().zip(histogram.iter()) {
        running += count as u64;
        *slot = running as f64 * scale;
    }
    cdf
}
