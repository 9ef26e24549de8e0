use crate::common::color::{luminance, rgb_f32, store_rgb};
use crate::image::PixelBuffer;
use crate::mask::inclusion::permits;
use crate::mask::InclusionMask;

const SHADOW_LUMINANCE: f32 = 128.0;
const HIGHLIGHT_LUMINANCE: f32 = 200.0;
const HIGHLIGHT_SPAN: f32 = 55.0;
const SHADOW_GAIN: f32 = 0.5;
const HIGHLIGHT_GAIN: f32 = 0.3;

/// Luminance-gated shadow lift and highlight pull-down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToneRecovery {
    /// Shadow recovery strength, 0-100.
    pub shadows: f32,
    /// Highlight recovery strength, 0-100.
    pub highlights: f32,
}

impl ToneRecovery {
    pub fn new(shadows: f32, highlights: f32) -> Self {
        Self {
            shadows,
            highlights,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.shadows <= 0.0 && self.highlights <= 0.0
    }

    /// Applies the adjustment to every pixel the mask permits.
    pub fn apply(&self, mut buffer: PixelBuffer, mask: Option<&InclusionMask>) -> PixelBuffer {
        if self.is_noop() {
            return buffer;
        }

        let shadows = self.shadows / 100.0;
        let highlights = self.highlights / 100.0;

        super::map_pixels(&mut buffer, |x, y, px| {
            if !permits(mask, x, y) {
                return;
            }

            let rgb = rgb_f32(px);
            let lum = luminance(rgb[0], rgb[1], rgb[2]);

            let scale = if shadows > 0.0 && lum < SHADOW_LUMINANCE {
                1.0 + (1.0 - lum / SHADOW_LUMINANCE) * shadows * SHADOW_GAIN
            } else if highlights > 0.0 && lum > HIGHLIGHT_LUMINANCE {
                1.0 - ((lum - HIGHLIGHT_LUMINANCE) / HIGHLIGHT_SPAN) * highlights * HIGHLIGHT_GAIN
            } else {
                return;
            };

            store_rgb(px, rgb.map(|c| c * scale));
        });

        buffer
    }
}
