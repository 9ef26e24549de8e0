use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::image::{PixelBuffer, CHANNELS};

/// Buffer of uniformly random RGBA samples, reproducible from `seed`.
pub(crate) fn random_buffer(width: u32, height: u32, seed: u64) -> PixelBuffer {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = width as usize * height as usize * CHANNELS;
    let bytes = (0..len).map(|_| rng.random::<u8>()).collect();

    PixelBuffer::new(width, height, bytes).unwrap()
}

/// Horizontal gradient in red, vertical in green, constant blue and alpha.
pub(crate) fn gradient_buffer(width: u32, height: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::new_filled(width, height, [0, 0, 90, 255]).unwrap();
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / (width - 1).max(1)) as u8;
            let g = (y * 255 / (height - 1).max(1)) as u8;
            buffer.set_pixel(x, y, [r, g, 90, 255]);
        }
    }
    buffer
}
