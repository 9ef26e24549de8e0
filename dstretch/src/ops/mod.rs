mod clarity;
mod dehaze;
mod denoise;
mod filter;
mod mask_preview;
mod sharpen;
mod tone_curve;
mod tone_recovery;

use rayon::prelude::*;

use crate::image::{PixelBuffer, CHANNELS};

pub use clarity::Clarity;
pub use dehaze::Dehaze;
pub use denoise::Denoise;
pub use filter::{FilterContext, FilterId, FilterInfo, FilterKind, FilterStage, FILTER_CATALOG};
pub use mask_preview::MaskPreview;
pub use sharpen::Sharpen;
pub use tone_curve::ToneCurve;
pub use tone_recovery::ToneRecovery;

/// Runs `f` on every pixel in place, row-parallel.
///
/// `f` receives the pixel coordinates and the 4-byte RGBA slice.
pub(crate) fn map_pixels<F>(buffer: &mut PixelBuffer, f: F)
where
    F: Fn(usize, usize, &mut [u8]) + Sync,
{
    let row_bytes = buffer.row_bytes();

    buffer
        .bytes_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
                f(x, y, px);
            }
        });
}

/// Runs a neighborhood kernel over a frozen snapshot.
///
/// `snapshot` is never written; the result starts as its copy and only
/// pixels at least `border` away from every edge are handed to `kernel`.
pub(crate) fn convolve_interior<F>(snapshot: PixelBuffer, border: usize, kernel: F) -> PixelBuffer
where
    F: Fn(&PixelBuffer, usize, usize, &mut [u8]) + Sync,
{
    convolve_interior_with(snapshot, border, || (), |_, src, x, y, out| kernel(src, x, y, out))
}

/// Like [`convolve_interior`], with per-worker scratch state from `init`.
pub(crate) fn convolve_interior_with<S, I, F>(
    snapshot: PixelBuffer,
    border: usize,
    init: I,
    kernel: F,
) -> PixelBuffer
where
    I: Fn() -> S + Sync + Send,
    F: Fn(&mut S, &PixelBuffer, usize, usize, &mut [u8]) + Sync + Send,
{
    let width = snapshot.width() as usize;
    let height = snapshot.height() as usize;
    let row_bytes = snapshot.row_bytes();
    let x_end = width.saturating_sub(border);
    let y_end = height.saturating_sub(border);

    let mut output = snapshot.clone();
    if border >= x_end || border >= y_end {
        return output;
    }

    output
        .bytes_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .filter(|(y, _)| *y >= border && *y < y_end)
        .for_each_init(init, |state, (y, row)| {
            for x in border..x_end {
                let px = &mut row[x * CHANNELS..(x + 1) * CHANNELS];
                kernel(state, &snapshot, x, y, px);
            }
        });

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_pixels_visits_every_coordinate() {
        let mut buffer = PixelBuffer::new_filled(3, 2, [0, 0, 0, 255]).unwrap();
        map_pixels(&mut buffer, |x, y, px| {
            px[0] = x as u8;
            px[1] = y as u8;
        });

        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(buffer.pixel(x, y), [x as u8, y as u8, 0, 255]);
            }
        }
    }

    #[test]
    fn convolve_interior_skips_border() {
        let buffer = PixelBuffer::new_filled(5, 4, [10, 10, 10, 255]).unwrap();
        let out = convolve_interior(buffer, 1, |_, _, _, px| px[0] = 99);

        for y in 0..4 {
            for x in 0..5 {
                let interior = (1..4).contains(&x) && (1..3).contains(&y);
                let expected = if interior { 99 } else { 10 };
                assert_eq!(out.pixel(x, y)[0], expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn convolve_interior_reads_snapshot_not_output() {
        // Each pixel copies its left neighbor; a sequential in-place pass
        // would smear the first column across the row.
        let mut buffer = PixelBuffer::new_filled(5, 3, [0, 0, 0, 255]).unwrap();
        for x in 0..5 {
            buffer.set_pixel(x, 1, [x as u8 * 10, 0, 0, 255]);
        }

        let out = convolve_interior(buffer, 1, |src, x, y, px| {
            px[0] = src.pixel(x as u32 - 1, y as u32)[0];
        });

        assert_eq!(out.pixel(1, 1)[0], 0);
        assert_eq!(out.pixel(2, 1)[0], 10);
        assert_eq!(out.pixel(3, 1)[0], 20);
    }

    #[test]
    fn convolve_interior_on_too_small_image_is_copy() {
        let buffer = PixelBuffer::new_filled(2, 2, [7, 7, 7, 255]).unwrap();
        let out = convolve_interior(buffer.clone(), 1, |_, _, _, px| px[0] = 0);
        assert_eq!(out, buffer);
    }
}
