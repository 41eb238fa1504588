//! Pixel-wise dissimilarity between equally sized images.

use image::{Pixel, RgbImage};

/// Mean across channels of the per-channel mean squared pixel difference.
///
/// Both images must have identical dimensions; the result is undefined
/// otherwise. Lower is more similar, and zero means pixel-identical.
pub fn score(a: &RgbImage, b: &RgbImage) -> f64 {
    debug_assert_eq!(a.dimensions(), b.dimensions());

    let mut sums = [0u64; 3];
    for (pa, pb) in a.pixels().zip(b.pixels()) {
        let channels = pa.channels().iter().zip(pb.channels());
        for (sum, (&va, &vb)) in sums.iter_mut().zip(channels) {
            let diff = i64::from(va) - i64::from(vb);
            *sum += num::pow(diff, 2) as u64;
        }
    }

    let pixels = f64::from(a.width() * a.height());
    let channel_means = sums.iter().map(|&s| s as f64 / pixels);
    channel_means.sum::<f64>() / 3.0
}
