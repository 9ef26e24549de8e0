
use crate::common::{Error, Result};

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Index of the alpha channel inside a pixel.
pub const ALPHA: usize = 3;

/// Tightly packed row-major RGBA8 image.
///
/// The sample vector always holds exactly `width * height * 4` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps already-decoded RGBA8 samples.
    ///
    /// # Errors
    /// - [`Error::EmptyImage`] if either dimension is zero
    /// - [`Error::InvalidDimensions`] if the byte count does not match the dimensions
    pub fn new(width: u32, height: u32, bytes: Vec<u8>) -> Result<PixelBuffer> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage { width, height });
        }

        let expected = width as usize * height as usize * CHANNELS;
        if bytes.len() != expected {
            return Err(Error::InvalidDimensions {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }

        Ok(PixelBuffer {
            width,
            height,
            bytes,
        })
    }

    /// Creates a buffer where every pixel is `rgba`.
    pub fn new_filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<PixelBuffer> {
        let count = width as usize * height as usize;
        let bytes = rgba.iter().copied().cycle().take(count * CHANNELS).collect();

        PixelBuffer::new(width, height, bytes)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of bytes per row.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * CHANNELS
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn take_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[inline]
    pub fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width as usize && y < self.height as usize);
        (y * self.width as usize + x) * CHANNELS
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = self.offset(x as usize, y as usize);
        let px = &self.bytes[offset..offset + CHANNELS];
        [px[0], px[1], px[2], px[3]]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let offset = self.offset(x as usize, y as usize);
        self.bytes[offset..offset + CHANNELS].copy_from_slice(&rgba);
    }

    /// Iterates over the alpha samples in pixel order.
    pub fn alpha(&self) -> impl Iterator<Item = u8> + '_ {
        self.bytes.chunks_exact(CHANNELS).map(|px| px[ALPHA])
    }
}

impl std::fmt::Display for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} RGBA8", self.width, self.height)
    }
}
