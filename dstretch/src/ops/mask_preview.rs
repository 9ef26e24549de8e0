use crate::common::color::{rgb_f32, store_rgb};
use crate::image::PixelBuffer;
use crate::mask::InclusionMask;

/// Red tint over pixels the inclusion mask excludes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaskPreview;

impl MaskPreview {
    pub fn apply(&self, mut buffer: PixelBuffer, mask: &InclusionMask) -> PixelBuffer {
        super::map_pixels(&mut buffer, |x, y, px| {
            if mask.is_included(x, y) {
                return;
            }

            let [r, g, b] = rgb_f32(px);
            store_rgb(px, [(r * 0.7 + 80.0).min(255.0), g * 0.5, b * 0.5]);
        });

        buffer
    }
}
