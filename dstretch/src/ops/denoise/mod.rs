//! Spatial noise reduction over a frozen snapshot.
//!
//! The window radius grows with strength: `max(1, floor(strength / 25))`.
//! Pixels closer than one radius to any edge are left unmodified.


use crate::common::color::to_u8;
use crate::image::{PixelBuffer, CHANNELS};
use crate::params::DenoiseAlgorithm;

const STRENGTH_PER_RADIUS: f32 = 25.0;
/// Range sigma of the bilateral color weight.
const BILATERAL_SIGMA_COLOR: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Denoise {
    /// Strength, 0-100.
    pub strength: f32,
    pub algorithm: DenoiseAlgorithm,
}

impl Denoise {
    pub fn new(strength: f32, algorithm: DenoiseAlgorithm) -> Self {
        Self {
            strength,
            algorithm,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.strength <= 0.0
    }

    pub fn radius(&self) -> usize {
        ((self.strength / STRENGTH_PER_RADIUS).floor() as usize).max(1)
    }

    pub fn apply(&self, buffer: PixelBuffer) -> PixelBuffer {
        if self.is_noop() {
            return buffer;
        }

        let radius = self.radius();
        let blend = self.strength / 100.0;

        match self.algorithm {
            DenoiseAlgorithm::Median => median(buffer, radius),
            DenoiseAlgorithm::Gaussian => gaussian(buffer, radius, blend),
            DenoiseAlgorithm::Bilateral => bilateral(buffer, radius, blend),
        }
    }
}

/// Spatial weights `exp(-d² / 2r²)` for a `(2r+1)²` window, row-major.
fn spatial_weights(radius: usize) -> Vec<f32> {
    let r = radius as isize;
    let two_sigma_sq = 2.0 * (radius * radius) as f32;

    (-r..=r)
        .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
        .map(|(dx, dy)| (-((dx * dx + dy * dy) as f32) / two_sigma_sq).exp())
        .collect()
}

fn median(buffer: PixelBuffer, radius: usize) -> PixelBuffer {
    let window = (2 * radius + 1) * (2 * radius + 1);

    super::convolve_interior_with(
        buffer,
        radius,
        || Vec::with_capacity(window),
        |values: &mut Vec<u8>, src, x, y, out| {
            let bytes = src.bytes();
            for c in 0..3 {
                values.clear();
                for ny in y - radius..=y + radius {
                    for nx in x - radius..=x + radius {
                        values.push(bytes[src.offset(nx, ny) + c]);
                    }
                }
                values.sort_unstable();
                out[c] = values[values.len() / 2];
            }
        },
    )
}

fn gaussian(buffer: PixelBuffer, radius: usize, blend: f32) -> PixelBuffer {
    let weights = spatial_weights(radius);
    let side = 2 * radius + 1;

    super::convolve_interior(buffer, radius, |src, x, y, out| {
        let bytes = src.bytes();
        let mut sum = [0.0f32; 3];
        let mut total = 0.0f32;

        for (wy, ny) in (y - radius..=y + radius).enumerate() {
            for (wx, nx) in (x - radius..=x + radius).enumerate() {
                let weight = weights[wy * side + wx];
                let offset = src.offset(nx, ny);
                for c in 0..3 {
                    sum[c] += bytes[offset + c] as f32 * weight;
                }
                total += weight;
            }
        }

        let center = src.offset(x, y);
        for c in 0..3 {
            let original = bytes[center + c] as f32;
            let filtered = sum[c] / total;
            out[c] = to_u8(original + (filtered - original) * blend);
        }
    })
}

fn bilateral(buffer: PixelBuffer, radius: usize, blend: f32) -> PixelBuffer {
    let weights = spatial_weights(radius);
    let side = 2 * radius + 1;
    let two_sigma_color_sq = 2.0 * BILATERAL_SIGMA_COLOR * BILATERAL_SIGMA_COLOR;

    super::convolve_interior(buffer, radius, |src, x, y, out| {
        let bytes = src.bytes();
        let center = src.offset(x, y);
        let center_rgb = [
            bytes[center] as f32,
            bytes[center + 1] as f32,
            bytes[center + 2] as f32,
        ];

        let mut sum = [0.0f32; 3];
        let mut total = 0.0f32;

        for (wy, ny) in (y - radius..=y + radius).enumerate() {
            for (wx, nx) in (x - radius..=x + radius).enumerate() {
                let offset = src.offset(nx, ny);
                let px = &bytes[offset..offset + CHANNELS];

                let color_dist_sq: f32 = (0..3)
                    .map(|c| {
                        let d = px[c] as f32 - center_rgb[c];
                        d * d
                    })
                    .sum();
                let weight =
                    weights[wy * side + wx] * (-color_dist_sq / two_sigma_color_sq).exp();

                for c in 0..3 {
                    sum[c] += px[c] as f32 * weight;
                }
                total += weight;
            }
        }

        // the center sample always contributes weight 1
        for c in 0..3 {
            let filtered = sum[c] / total;
            out[c] = to_u8(center_rgb[c] + (filtered - center_rgb[c]) * blend);
        }
    })
}
