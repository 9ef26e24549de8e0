//! Edge enhancement over a frozen snapshot. The outermost ring of pixels
//! passes through unchanged.

#[cfg(test)]
mod tests;

use crate::common::color::to_u8;
use crate::image::PixelBuffer;
use crate::params::SharpenAlgorithm;

const HIGHPASS_GAIN: f32 = 0.5;
const LAPLACIAN_GAIN: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sharpen {
    /// Strength, 0-100.
    pub strength: f32,
    pub algorithm: SharpenAlgorithm,
}

impl Sharpen {
    pub fn new(strength: f32, algorithm: SharpenAlgorithm) -> Self {
        Self {
            strength,
            algorithm,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.strength <= 0.0
    }

    pub fn apply(&self, buffer: PixelBuffer) -> PixelBuffer {
        if self.is_noop() {
            return buffer;
        }

        let amount = self.strength / 100.0;
        let algorithm = self.algorithm;

        super::convolve_interior(buffer, 1, move |src, x, y, out| {
            let bytes = src.bytes();
            let center = src.offset(x, y);

            for c in 0..3 {
                let value = bytes[center + c] as f32;
                let cross = cross_sum(src, x, y, c);

                let sharpened = match algorithm {
                    SharpenAlgorithm::Unsharp => {
                        let blurred = (value + cross) / 5.0;
                        value + (value - blurred) * amount
                    }
                    SharpenAlgorithm::Highpass => {
                        let detail = value * 5.0 - cross;
                        value + detail * amount * HIGHPASS_GAIN
                    }
                    SharpenAlgorithm::Laplacian => {
                        let detail = value * 9.0 - cross - diagonal_sum(src, x, y, c);
                        value + detail * amount * LAPLACIAN_GAIN
                    }
                };

                out[c] = to_u8(sharpened);
            }
        })
    }
}

/// Sum of channel `c` over the four edge-adjacent neighbors.
#[inline]
fn cross_sum(src: &PixelBuffer, x: usize, y: usize, c: usize) -> f32 {
    let bytes = src.bytes();
    [
        src.offset(x, y - 1),
        src.offset(x, y + 1),
        src.offset(x - 1, y),
        src.offset(x + 1, y),
    ]
    .iter()
    .map(|&offset| bytes[offset + c] as f32)
    .sum()
}

/// Sum of channel `c` over the four corner neighbors.
#[inline]
fn diagonal_sum(src: &PixelBuffer, x: usize, y: usize, c: usize) -> f32 {
    let bytes = src.bytes();
    [
        src.offset(x - 1, y - 1),
        src.offset(x + 1, y - 1),
        src.offset(x - 1, y + 1),
        src.offset(x + 1, y + 1),
    ]
    .iter()
    .map(|&offset| bytes[offset + c] as f32)
    .sum()
}
