//! Per-pixel color math shared by the stages.

/// Rec. 601 luma weights used for every luminance test in the pipeline.
pub const LUMA_R: f32 = 0.299;
pub const LUMA_G: f32 = 0.587;
pub const LUMA_B: f32 = 0.114;

/// Weighted brightness estimate on the 0-255 scale.
#[inline]
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    r * LUMA_R + g * LUMA_G + b * LUMA_B
}

/// Vegetation heuristic: how far green exceeds the mean of red and blue.
#[inline]
pub fn greenness(r: f32, g: f32, b: f32) -> f32 {
    g - (r + b) / 2.0
}

/// Clamps to the byte range and rounds to the nearest integer.
#[inline]
pub fn to_u8(value: f32) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

#[inline]
pub fn rgb_f32(px: &[u8]) -> [f32; 3] {
    [px[0] as f32, px[1] as f32, px[2] as f32]
}

#[inline]
pub fn store_rgb(px: &mut [u8], rgb: [f32; 3]) {
    px[0] = to_u8(rgb[0]);
    px[1] = to_u8(rgb[1]);
    px[2] = to_u8(rgb[2]);
}

/// HSL color with every component in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    /// Converts 0-255 RGB using the max/min hue-sector decomposition.
    pub fn from_rgb(rgb: [f32; 3]) -> Self {
        let r = rgb[0] / 255.0;
        let g = rgb[1] / 255.0;
        let b = rgb[2] / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };

        Hsl { h, s, l }
    }

    /// Converts back to unrounded 0-255 RGB.
    pub fn to_rgb(self) -> [f32; 3] {
        let Hsl { h, s, l } = self;

        if s == 0.0 {
            let v = l * 255.0;
            return [v, v, v];
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        [
            hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
            hue_to_channel(p, q, h) * 255.0,
            hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
        ]
    }
}

#[inline]
fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_weights_sum_to_one() {
        assert!((luminance(255.0, 255.0, 255.0) - 255.0).abs() < 1e-3);
        assert_eq!(luminance(0.0, 0.0, 0.0), 0.0);
        assert!(luminance(0.0, 255.0, 0.0) > luminance(255.0, 0.0, 0.0));
    }

    #[test]
    fn greenness_of_gray_is_zero() {
        assert_eq!(greenness(90.0, 90.0, 90.0), 0.0);
        assert_eq!(greenness(40.0, 100.0, 60.0), 50.0);
    }

    #[test]
    fn to_u8_rounds_and_clamps() {
        assert_eq!(to_u8(-3.0), 0);
        assert_eq!(to_u8(300.0), 255);
        assert_eq!(to_u8(34.6), 35);
        assert_eq!(to_u8(34.4), 34);
        assert_eq!(to_u8(130.39), 130);
    }

    #[test]
    fn gray_has_zero_saturation() {
        let hsl = Hsl::from_rgb([128.0, 128.0, 128.0]);
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.h, 0.0);
        assert!((hsl.l - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn primary_hues() {
        assert!((Hsl::from_rgb([255.0, 0.0, 0.0]).h - 0.0).abs() < 1e-6);
        assert!((Hsl::from_rgb([0.0, 255.0, 0.0]).h - 1.0 / 3.0).abs() < 1e-6);
        assert!((Hsl::from_rgb([0.0, 0.0, 255.0]).h - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn round_trip_is_exact_after_rounding() {
        // Coarse sweep of the RGB cube; every byte must survive the round trip.
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(19) {
                    let rgb = [r as f32, g as f32, b as f32];
                    let back = Hsl::from_rgb(rgb).to_rgb();
                    for c in 0..3 {
                        assert_eq!(
                            to_u8(back[c]),
                            rgb[c] as u8,
                            "channel {} of ({}, {}, {}) changed",
                            c,
                            r,
                            g,
                            b
                        );
                    }
                }
            }
        }
    }
}
