use crate::common::color::{rgb_f32, store_rgb};
use crate::common::Hsl;
use crate::image::PixelBuffer;
use crate::params::NEUTRAL_PERCENT;

/// Slider offset 0-100 from neutral maps linearly onto contrast 0-255.
const CONTRAST_RANGE: f32 = 255.0;
/// The contrast formula divides by `259 - c`; c is capped below the pole.
const MAX_CONTRAST: f32 = 254.0;
const MIN_CONTRAST: f32 = -255.0;
const MID_GRAY: f32 = 128.0;

/// Brightness and saturation in HSL space, then linear contrast around
/// mid-gray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneCurve {
    /// Lightness scale in percent, 100 is neutral.
    pub brightness: f32,
    /// Contrast slider in percent, 100 is neutral.
    pub contrast: f32,
    /// Saturation scale in percent, 100 is neutral.
    pub saturation: f32,
}

impl Default for ToneCurve {
    fn default() -> Self {
        Self {
            brightness: NEUTRAL_PERCENT,
            contrast: NEUTRAL_PERCENT,
            saturation: NEUTRAL_PERCENT,
        }
    }
}

impl ToneCurve {
    pub fn new(brightness: f32, contrast: f32, saturation: f32) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.brightness == NEUTRAL_PERCENT
            && self.contrast == NEUTRAL_PERCENT
            && self.saturation == NEUTRAL_PERCENT
    }

    /// Multiplier applied to the distance from mid-gray.
    ///
    /// Exactly 1.0 at the neutral slider position.
    pub fn contrast_factor(&self) -> f32 {
        let offset = (self.contrast - NEUTRAL_PERCENT) / NEUTRAL_PERCENT;
        let c = (offset * CONTRAST_RANGE).clamp(MIN_CONTRAST, MAX_CONTRAST);
        (259.0 * (c + 255.0)) / (255.0 * (259.0 - c))
    }

    /// Maps one 0-255 RGB triple through the curve, unrounded.
    #[inline]
    pub fn map(&self, rgb: [f32; 3], factor: f32) -> [f32; 3] {
        let mut hsl = Hsl::from_rgb(rgb);
        hsl.l = (hsl.l * self.brightness / 100.0).clamp(0.0, 1.0);
        // saturation above 1 is kept; the contrast step clamps the channels
        hsl.s *= self.saturation / 100.0;

        hsl.to_rgb().map(|c| factor * (c - MID_GRAY) + MID_GRAY)
    }

    pub fn apply(&self, mut buffer: PixelBuffer) -> PixelBuffer {
        if self.is_noop() {
            return buffer;
        }

        let factor = self.contrast_factor();

        super::map_pixels(&mut buffer, |_, _, px| {
            store_rgb(px, self.map(rgb_f32(px), factor));
        });

        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(rgba: [u8; 4]) -> PixelBuffer {
        PixelBuffer::new_filled(1, 1, rgba).unwrap()
    }

    #[test]
    fn neutral_contrast_factor_is_exactly_one() {
        assert_eq!(ToneCurve::default().contrast_factor(), 1.0);
    }

    #[test]
    fn maximum_contrast_is_finite() {
        let factor = ToneCurve::new(100.0, 200.0, 100.0).contrast_factor();
        assert!(factor.is_finite());
        // c = 254: 259 * 509 / (255 * 5)
        assert!((factor - 103.396).abs() < 0.01, "factor {}", factor);
    }

    #[test]
    fn minimum_contrast_flattens_to_mid_gray() {
        let curve = ToneCurve::new(100.0, 0.0, 100.0);
        assert_eq!(curve.contrast_factor(), 0.0);
        let out = curve.apply(single([10, 200, 90, 77]));
        assert_eq!(out.pixel(0, 0), [128, 128, 128, 77]);
    }

    #[test]
    fn neutral_curve_round_trips_every_gray_and_primary() {
        let curve = ToneCurve::default();
        let factor = curve.contrast_factor();
        for v in 0..=255u8 {
            for rgb in [[v, v, v], [v, 0, 0], [255, v, 30], [12, 200, v]] {
                let out = curve.map(rgb.map(|c| c as f32), factor);
                let mut px = [0u8, 0, 0, 255];
                store_rgb(&mut px, out);
                assert_eq!(&px[..3], &rgb[..], "neutral curve changed {:?}", rgb);
            }
        }
    }

    #[test]
    fn zero_brightness_is_black() {
        let out = ToneCurve::new(0.0, 100.0, 100.0).apply(single([120, 60, 30, 255]));
        assert_eq!(out.pixel(0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn zero_saturation_is_gray() {
        let out = ToneCurve::new(100.0, 100.0, 0.0).apply(single([200, 100, 50, 255]));
        let [r, g, b, _] = out.pixel(0, 0);
        assert_eq!(r, g);
        assert_eq!(g, b);
        // lightness of (200, 100, 50) is (200 + 50) / 2
        assert_eq!(r, 125);
    }

    #[test]
    fn double_saturation_overshoots_before_clamping() {
        // s = 0.6 scales to 1.2; q > 1 and p < 0 saturate red and blue
        let out = ToneCurve::new(100.0, 100.0, 200.0).apply(single([200, 100, 50, 255]));
        assert_eq!(out.pixel(0, 0), [255, 75, 0, 255]);
    }

    #[test]
    fn double_saturation_keeps_gray_gray() {
        let out = ToneCurve::new(100.0, 100.0, 200.0).apply(single([90, 90, 90, 255]));
        assert_eq!(out.pixel(0, 0), [90, 90, 90, 255]);
    }

    #[test]
    fn double_brightness_clamps_to_white() {
        let out = ToneCurve::new(200.0, 100.0, 100.0).apply(single([200, 200, 200, 255]));
        assert_eq!(out.pixel(0, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn higher_contrast_spreads_from_mid_gray() {
        let out = ToneCurve::new(100.0, 150.0, 100.0).apply(single([100, 128, 160, 255]));
        let [r, g, b, _] = out.pixel(0, 0);
        assert!(r < 100);
        assert_eq!(g, 128);
        assert!(b > 160);
    }
}
