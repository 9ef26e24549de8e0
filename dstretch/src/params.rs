//! Immutable parameter snapshot for a single render.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::mask::Zone;
use crate::ops::FilterId;

pub const NEUTRAL_PERCENT: f32 = 100.0;
pub const MAX_TONE_PERCENT: f32 = 200.0;
pub const MAX_STRENGTH: f32 = 100.0;
pub const DEFAULT_MASK_THRESHOLD: f32 = 50.0;

/// Spatial noise-reduction kernel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DenoiseAlgorithm {
    /// Per-channel median of the window.
    #[default]
    Median,
    /// Distance-weighted average blended toward the original.
    Gaussian,
    /// Edge-preserving spatial x range weighting.
    Bilateral,
}

/// Sharpening kernel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SharpenAlgorithm {
    /// 5-tap plus-kernel blur subtracted from the center.
    #[default]
    Unsharp,
    /// 4-neighbor edge response added at half strength.
    Highpass,
    /// 8-neighbor Laplacian including diagonals.
    Laplacian,
}

/// Everything a render needs besides the pixels.
///
/// Tone values are percentages where 100 is neutral; strengths are
/// percentages where 0 disables the stage. Missing fields deserialize to
/// their neutral defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    pub filter: FilterId,
    /// Lightness scale, 0-200.
    pub brightness: f32,
    /// Linear contrast around mid-gray, 0-200.
    pub contrast: f32,
    /// HSL saturation scale, 0-200.
    pub saturation: f32,
    pub dehaze: f32,
    pub clarity: f32,
    pub shadow_recovery: f32,
    pub highlight_recovery: f32,
    pub noise_reduction: f32,
    pub denoise_algorithm: DenoiseAlgorithm,
    pub sharpening: f32,
    pub sharpen_algorithm: SharpenAlgorithm,
    pub mask_enabled: bool,
    /// Exclusion sensitivity, 0-100.
    pub mask_threshold: f32,
    /// Tints excluded pixels red after dehaze.
    pub mask_preview: bool,
    pub zoned_mode: bool,
    /// Checked in order; the first zone containing a pixel wins.
    pub zones: Vec<Zone>,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            filter: FilterId::None,
            brightness: NEUTRAL_PERCENT,
            contrast: NEUTRAL_PERCENT,
            saturation: NEUTRAL_PERCENT,
            dehaze: 0.0,
            clarity: 0.0,
            shadow_recovery: 0.0,
            highlight_recovery: 0.0,
            noise_reduction: 0.0,
            denoise_algorithm: DenoiseAlgorithm::default(),
            sharpening: 0.0,
            sharpen_algorithm: SharpenAlgorithm::default(),
            mask_enabled: false,
            mask_threshold: DEFAULT_MASK_THRESHOLD,
            mask_preview: false,
            zoned_mode: false,
            zones: Vec::new(),
        }
    }
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with every numeric field forced into its valid range.
    ///
    /// Non-finite values fall back to the neutral default for that field.
    pub fn sanitized(&self) -> ParameterSet {
        let defaults = ParameterSet::default();

        ParameterSet {
            filter: self.filter,
            brightness: clamp_or(self.brightness, MAX_TONE_PERCENT, defaults.brightness),
            contrast: clamp_or(self.contrast, MAX_TONE_PERCENT, defaults.contrast),
            saturation: clamp_or(self.saturation, MAX_TONE_PERCENT, defaults.saturation),
            dehaze: clamp_or(self.dehaze, MAX_STRENGTH, defaults.dehaze),
            clarity: clamp_or(self.clarity, MAX_STRENGTH, defaults.clarity),
            shadow_recovery: clamp_or(self.shadow_recovery, MAX_STRENGTH, 0.0),
            highlight_recovery: clamp_or(self.highlight_recovery, MAX_STRENGTH, 0.0),
            noise_reduction: clamp_or(self.noise_reduction, MAX_STRENGTH, 0.0),
            denoise_algorithm: self.denoise_algorithm,
            sharpening: clamp_or(self.sharpening, MAX_STRENGTH, 0.0),
            sharpen_algorithm: self.sharpen_algorithm,
            mask_enabled: self.mask_enabled,
            mask_threshold: clamp_or(self.mask_threshold, MAX_STRENGTH, defaults.mask_threshold),
            mask_preview: self.mask_preview,
            zoned_mode: self.zoned_mode,
            zones: self.zones.clone(),
        }
    }

    pub fn with_filter(mut self, filter: FilterId) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn with_contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn with_saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation;
        self
    }

    pub fn with_dehaze(mut self, dehaze: f32) -> Self {
        self.dehaze = dehaze;
        self
    }

    pub fn with_clarity(mut self, clarity: f32) -> Self {
        self.clarity = clarity;
        self
    }

    pub fn with_shadow_recovery(mut self, shadow_recovery: f32) -> Self {
        self.shadow_recovery = shadow_recovery;
        self
    }

    pub fn with_highlight_recovery(mut self, highlight_recovery: f32) -> Self {
        self.highlight_recovery = highlight_recovery;
        self
    }

    pub fn with_denoise(mut self, strength: f32, algorithm: DenoiseAlgorithm) -> Self {
        self.noise_reduction = strength;
        self.denoise_algorithm = algorithm;
        self
    }

    pub fn with_sharpen(mut self, strength: f32, algorithm: SharpenAlgorithm) -> Self {
        self.sharpening = strength;
        self.sharpen_algorithm = algorithm;
        self
    }

    /// Enables the inclusion mask at the given threshold.
    pub fn with_mask(mut self, threshold: f32) -> Self {
        self.mask_enabled = true;
        self.mask_threshold = threshold;
        self
    }

    pub fn with_mask_preview(mut self, preview: bool) -> Self {
        self.mask_preview = preview;
        self
    }

    /// Enables zoned mode with the given ordered zones.
    pub fn with_zones(mut self, zones: Vec<Zone>) -> Self {
        self.zoned_mode = true;
        self.zones = zones;
        self
    }
}

fn clamp_or(value: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, max)
    } else {
        fallback
    }
}
