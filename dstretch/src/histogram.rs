//! Per-channel 256-bin histogram of a finished render.

use rayon::prelude::*;
use strum_macros::{Display, EnumIter};

use crate::image::{PixelBuffer, CHANNELS};

pub const BIN_COUNT: usize = 256;

/// Rows per parallel work item.
const ROWS_PER_CHUNK: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Occurrence counts of every 8-bit value, separately for R, G and B.
///
/// Alpha is not counted. Each channel sums to the pixel count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    pub red: [u32; BIN_COUNT],
    pub green: [u32; BIN_COUNT],
    pub blue: [u32; BIN_COUNT],
}

impl Default for Histogram {
    fn default() -> Self {
        Self::empty()
    }
}

impl Histogram {
    pub fn empty() -> Self {
        Self {
            red: [0; BIN_COUNT],
            green: [0; BIN_COUNT],
            blue: [0; BIN_COUNT],
        }
    }

    pub fn compute(buffer: &PixelBuffer) -> Self {
        let chunk_bytes = buffer.row_bytes() * ROWS_PER_CHUNK;

        buffer
            .bytes()
            .par_chunks(chunk_bytes)
            .fold(Histogram::empty, |mut hist, chunk| {
                for px in chunk.chunks_exact(CHANNELS) {
                    hist.red[px[0] as usize] += 1;
                    hist.green[px[1] as usize] += 1;
                    hist.blue[px[2] as usize] += 1;
                }
                hist
            })
            .reduce(Histogram::empty, Histogram::merge)
    }

    fn merge(mut self, other: Histogram) -> Histogram {
        for bin in 0..BIN_COUNT {
            self.red[bin] += other.red[bin];
            self.green[bin] += other.green[bin];
            self.blue[bin] += other.blue[bin];
        }
        self
    }

    pub fn channel(&self, channel: Channel) -> &[u32; BIN_COUNT] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Largest bin across all three channels, for scaling a plot.
    pub fn max_count(&self) -> u32 {
        self.red
            .iter()
            .chain(&self.green)
            .chain(&self.blue)
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Number of pixels counted; the same for every channel.
    pub fn total(&self) -> u64 {
        self.red.iter().map(|&count| count as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn counts_each_channel_independently() {
        let buffer = PixelBuffer::new(
            3,
            1,
            vec![0, 10, 255, 1, 0, 20, 255, 2, 7, 10, 0, 3],
        )
        .unwrap();
        let hist = Histogram::compute(&buffer);

        assert_eq!(hist.red[0], 2);
        assert_eq!(hist.red[7], 1);
        assert_eq!(hist.green[10], 2);
        assert_eq!(hist.green[20], 1);
        assert_eq!(hist.blue[255], 2);
        assert_eq!(hist.blue[0], 1);
        assert_eq!(hist.max_count(), 2);
    }

    #[test]
    fn every_channel_sums_to_pixel_count() {
        // more rows than one parallel chunk
        let buffer = PixelBuffer::new_filled(7, 150, [3, 4, 5, 0]).unwrap();
        let hist = Histogram::compute(&buffer);

        for channel in Channel::iter() {
            let sum: u64 = hist.channel(channel).iter().map(|&c| c as u64).sum();
            assert_eq!(sum, buffer.pixel_count() as u64, "{} channel", channel);
        }
        assert_eq!(hist.total(), 1050);
        assert_eq!(hist.red[3], 1050);
        assert_eq!(hist.green[4], 1050);
        assert_eq!(hist.blue[5], 1050);
    }

    #[test]
    fn alpha_is_ignored() {
        let a = PixelBuffer::new_filled(4, 4, [9, 9, 9, 0]).unwrap();
        let b = PixelBuffer::new_filled(4, 4, [9, 9, 9, 255]).unwrap();
        assert_eq!(Histogram::compute(&a), Histogram::compute(&b));
    }

    #[test]
    fn empty_histogram_has_no_counts() {
        let hist = Histogram::default();
        assert_eq!(hist.max_count(), 0);
        assert_eq!(hist.total(), 0);
    }
}
