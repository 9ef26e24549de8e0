use crate::common::color::{luminance, rgb_f32, store_rgb};
use crate::image::PixelBuffer;

/// Luminance-adaptive multiplicative boost; darker pixels gain more.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dehaze {
    /// Strength, 0-100.
    pub strength: f32,
}

impl Dehaze {
    pub fn new(strength: f32) -> Self {
        Self { strength }
    }

    pub fn is_noop(&self) -> bool {
        self.strength <= 0.0
    }

    pub fn apply(&self, mut buffer: PixelBuffer) -> PixelBuffer {
        if self.is_noop() {
            return buffer;
        }

        let strength = self.strength / 100.0;

        super::map_pixels(&mut buffer, |_, _, px| {
            let rgb = rgb_f32(px);
            let lum = luminance(rgb[0], rgb[1], rgb[2]) / 255.0;
            let factor = 1.0 + strength * (1.0 - lum);
            store_rgb(px, rgb.map(|c| c * factor));
        });

        buffer
    }
}
