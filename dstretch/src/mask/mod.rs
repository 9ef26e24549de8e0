//! Per-pixel gating: the derived inclusion mask and user-authored zones.

pub(crate) mod inclusion;
mod zone;

pub use inclusion::InclusionMask;
pub use zone::{Zone, ZoneMask, MIN_DRAG_EXTENT};
