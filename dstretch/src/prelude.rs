// Error handling
pub use crate::common::{Error, Result};

// Color math
pub use crate::common::{greenness, luminance, Hsl};

// Pixels
pub use crate::image::{PixelBuffer, ALPHA, CHANNELS};

// Parameters
pub use crate::params::{
    DenoiseAlgorithm, ParameterSet, SharpenAlgorithm, DEFAULT_MASK_THRESHOLD, MAX_STRENGTH,
    MAX_TONE_PERCENT, NEUTRAL_PERCENT,
};

// Masks and zones
pub use crate::mask::{InclusionMask, Zone, ZoneMask, MIN_DRAG_EXTENT};

// Stages
pub use crate::ops::{
    Clarity, Dehaze, Denoise, FilterContext, FilterId, FilterInfo, FilterKind, FilterStage,
    MaskPreview, Sharpen, ToneCurve, ToneRecovery, FILTER_CATALOG,
};

// Results
pub use crate::histogram::{Channel, Histogram, BIN_COUNT};
pub use crate::pipeline::{render, RenderOutput, StageKind};
