//! Deterministic rock-art enhancement over decoded RGBA8 buffers.
//!
//! [`render`] runs a fixed chain of stages (tone recovery, clarity, the
//! catalog filter, tone curve, dehaze, denoise, sharpen) and returns the
//! enhanced buffer with its histogram. Decoding and encoding stay with the
//! caller.

mod common;
mod histogram;
mod image;
mod mask;
mod ops;
mod params;
mod pipeline;

pub mod prelude;

pub use prelude::*;
