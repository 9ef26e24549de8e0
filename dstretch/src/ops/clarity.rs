use crate::common::color::to_u8;
use crate::image::PixelBuffer;
use crate::mask::inclusion::permits;
use crate::mask::InclusionMask;

const CLARITY_GAIN: f32 = 0.3;

/// 4-neighbor local-contrast boost.
///
/// The outermost ring of pixels has no full neighborhood and passes
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Clarity {
    /// Strength, 0-100.
    pub amount: f32,
}

impl Clarity {
    pub fn new(amount: f32) -> Self {
        Self { amount }
    }

    pub fn is_noop(&self) -> bool {
        self.amount <= 0.0
    }

    pub fn apply(&self, buffer: PixelBuffer, mask: Option<&InclusionMask>) -> PixelBuffer {
        if self.is_noop() {
            return buffer;
        }

        let gain = self.amount / 100.0 * CLARITY_GAIN;

        super::convolve_interior(buffer, 1, |src, x, y, out| {
            if !permits(mask, x, y) {
                return;
            }

            let center = src.offset(x, y);
            let top = src.offset(x, y - 1);
            let bottom = src.offset(x, y + 1);
            let left = src.offset(x - 1, y);
            let right = src.offset(x + 1, y);
            let bytes = src.bytes();

            for c in 0..3 {
                let value = bytes[center + c] as f32;
                let edge = value * 5.0
                    - bytes[top + c] as f32
                    - bytes[bottom + c] as f32
                    - bytes[left + c] as f32
                    - bytes[right + c] as f32;
                out[c] = to_u8(value + edge * gain);
            }
        })
    }
}
