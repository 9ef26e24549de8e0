use rayon::prelude::*;

use crate::common::{greenness, luminance};
use crate::image::{PixelBuffer, CHANNELS};

pub const EXCLUDED: u8 = 0;
pub const INCLUDED: u8 = 255;

const VEGETATION_GREENNESS: f32 = 20.0;
const VEGETATION_MIN_GREEN: f32 = 80.0;

/// One byte per pixel: 255 where enhancement may apply, 0 where the pixel
/// is too dark, too bright, or looks like vegetation.
///
/// Always derived from the buffer handed to the pipeline, never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InclusionMask {
    width: usize,
    height: usize,
    values: Vec<u8>,
}

impl InclusionMask {
    /// Classifies every pixel of `buffer` at sensitivity `threshold` (0-100).
    pub fn compute(buffer: &PixelBuffer, threshold: f32) -> InclusionMask {
        let width = buffer.width() as usize;
        let height = buffer.height() as usize;
        let dark_limit = threshold * 0.5;
        let bright_limit = 255.0 - threshold * 0.5;

        let mut values = vec![EXCLUDED; width * height];

        values
            .par_chunks_mut(width)
            .zip(buffer.bytes().par_chunks(buffer.row_bytes()))
            .for_each(|(mask_row, row)| {
                for (value, px) in mask_row.iter_mut().zip(row.chunks_exact(CHANNELS)) {
                    let (r, g, b) = (px[0] as f32, px[1] as f32, px[2] as f32);
                    let lum = luminance(r, g, b);

                    let too_dark = lum < dark_limit;
                    let too_bright = lum > bright_limit;
                    let vegetation =
                        greenness(r, g, b) > VEGETATION_GREENNESS && g > VEGETATION_MIN_GREEN;

                    *value = if too_dark || too_bright || vegetation {
                        EXCLUDED
                    } else {
                        INCLUDED
                    };
                }
            });

        InclusionMask {
            width,
            height,
            values,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    #[inline]
    pub fn is_included(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.values[y * self.width + x] > 128
    }

    pub fn excluded_count(&self) -> usize {
        self.values.iter().filter(|&&v| v <= 128).count()
    }
}

/// `true` when `mask` is absent or lets the pixel through.
#[inline]
pub(crate) fn permits(mask: Option<&InclusionMask>, x: usize, y: usize) -> bool {
    mask.is_none_or(|mask| mask.is_included(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_of(pixels: &[[u8; 4]], threshold: f32) -> InclusionMask {
        let bytes = pixels.iter().flatten().copied().collect();
        let buffer = PixelBuffer::new(pixels.len() as u32, 1, bytes).unwrap();
        InclusionMask::compute(&buffer, threshold)
    }

    #[test]
    fn mid_gray_is_included() {
        let mask = mask_of(&[[128, 128, 128, 255]], 50.0);
        assert!(mask.is_included(0, 0));
        assert_eq!(mask.values(), &[INCLUDED]);
    }

    #[test]
    fn dark_and_bright_pixels_are_excluded() {
        // threshold 50: dark below 25, bright above 230
        let mask = mask_of(
            &[
                [20, 20, 20, 255],
                [26, 26, 26, 255],
                [235, 235, 235, 255],
                [229, 229, 229, 255],
            ],
            50.0,
        );

        assert!(!mask.is_included(0, 0));
        assert!(mask.is_included(1, 0));
        assert!(!mask.is_included(2, 0));
        assert!(mask.is_included(3, 0));
        assert_eq!(mask.excluded_count(), 2);
    }

    #[test]
    fn vegetation_requires_greenness_and_bright_green() {
        let mask = mask_of(
            &[
                // greenness 50, G 120: vegetation
                [70, 120, 70, 255],
                // greenness 30 but G only 70
                [40, 70, 40, 255],
                // G high but greenness exactly 20
                [100, 120, 100, 255],
            ],
            0.0,
        );

        assert!(!mask.is_included(0, 0));
        assert!(mask.is_included(1, 0));
        assert!(mask.is_included(2, 0));
    }

    #[test]
    fn zero_threshold_only_excludes_vegetation() {
        let mask = mask_of(&[[0, 0, 0, 255], [254, 254, 254, 255]], 0.0);
        assert_eq!(mask.excluded_count(), 0);
    }

    #[test]
    fn permits_without_mask() {
        assert!(permits(None, 3, 7));
        let mask = mask_of(&[[0, 0, 0, 255]], 50.0);
        assert!(!permits(Some(&mask), 0, 0));
    }

    #[test]
    fn dimensions_follow_buffer() {
        let buffer = PixelBuffer::new_filled(4, 3, [128, 128, 128, 255]).unwrap();
        let mask = InclusionMask::compute(&buffer, 50.0);
        assert_eq!(mask.width(), 4);
        assert_eq!(mask.height(), 3);
        assert_eq!(mask.values().len(), 12);
    }
}
