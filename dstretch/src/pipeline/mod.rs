//! Fixed-order render of one source buffer under one parameter snapshot.


use std::time::Instant;

use strum_macros::{Display, EnumIter};

use crate::histogram::Histogram;
use crate::image::PixelBuffer;
use crate::mask::{InclusionMask, ZoneMask};
use crate::ops::{
    Clarity, Dehaze, Denoise, FilterContext, FilterStage, MaskPreview, Sharpen, ToneCurve,
    ToneRecovery,
};
use crate::params::ParameterSet;

/// Stages in the order `render` runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum StageKind {
    ToneRecovery,
    Clarity,
    Filter,
    ToneCurve,
    Dehaze,
    MaskPreview,
    Denoise,
    Sharpen,
}

/// Result of a render: the enhanced pixels and their histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub buffer: PixelBuffer,
    pub histogram: Histogram,
}

impl RenderOutput {
    pub fn into_parts(self) -> (PixelBuffer, Histogram) {
        (self.buffer, self.histogram)
    }
}

/// Renders `source` through every stage and tallies the result.
///
/// `source` is never modified; the output is always a fresh buffer.
/// Parameters are clamped into range first, so any snapshot is accepted.
/// The inclusion mask, when enabled, is computed from `source` and gates
/// tone recovery, clarity and the filter stage.
pub fn render(source: &PixelBuffer, params: &ParameterSet) -> RenderOutput {
    let start = Instant::now();
    let params = params.sanitized();

    let mask = params
        .mask_enabled
        .then(|| InclusionMask::compute(source, params.mask_threshold));
    if let Some(mask) = &mask {
        tracing::debug!(
            "Inclusion mask at threshold {}: {} of {} pixels excluded",
            params.mask_threshold,
            mask.excluded_count(),
            source.pixel_count()
        );
    }

    let zones = (params.zoned_mode && !params.zones.is_empty())
        .then(|| ZoneMask::from_zones(params.zones.iter().copied()));

    let tone_recovery = ToneRecovery::new(params.shadow_recovery, params.highlight_recovery);
    let clarity = Clarity::new(params.clarity);
    let filter = FilterStage::new(params.filter)
        .with_zones(zones.as_ref())
        .with_mask(mask.as_ref())
        .with_context(FilterContext {
            shadow_recovery_active: params.shadow_recovery > 0.0,
        });
    let tone_curve = ToneCurve::new(params.brightness, params.contrast, params.saturation);
    let dehaze = Dehaze::new(params.dehaze);
    let preview_mask = mask.as_ref().filter(|_| params.mask_preview);
    let denoise = Denoise::new(params.noise_reduction, params.denoise_algorithm);
    let sharpen = Sharpen::new(params.sharpening, params.sharpen_algorithm);

    let mut buffer = source.clone();

    buffer = run_stage(StageKind::ToneRecovery, !tone_recovery.is_noop(), buffer, |b| {
        tone_recovery.apply(b, mask.as_ref())
    });
    buffer = run_stage(StageKind::Clarity, !clarity.is_noop(), buffer, |b| {
        clarity.apply(b, mask.as_ref())
    });
    buffer = run_stage(StageKind::Filter, !filter.is_noop(), buffer, |b| filter.apply(b));
    buffer = run_stage(StageKind::ToneCurve, !tone_curve.is_noop(), buffer, |b| {
        tone_curve.apply(b)
    });
    buffer = run_stage(StageKind::Dehaze, !dehaze.is_noop(), buffer, |b| dehaze.apply(b));
    if let Some(preview_mask) = preview_mask {
        buffer = run_stage(StageKind::MaskPreview, true, buffer, |b| {
            MaskPreview.apply(b, preview_mask)
        });
    }
    buffer = run_stage(StageKind::Denoise, !denoise.is_noop(), buffer, |b| denoise.apply(b));
    buffer = run_stage(StageKind::Sharpen, !sharpen.is_noop(), buffer, |b| sharpen.apply(b));

    let histogram = Histogram::compute(&buffer);

    tracing::info!(
        "Rendered {} (filter {}) in {:.1}ms",
        buffer,
        params.filter,
        start.elapsed().as_secs_f64() * 1000.0
    );

    RenderOutput { buffer, histogram }
}

/// Runs one stage when `active`, logging its timing; inactive stages hand
/// the buffer on untouched.
fn run_stage<F>(kind: StageKind, active: bool, buffer: PixelBuffer, stage: F) -> PixelBuffer
where
    F: FnOnce(PixelBuffer) -> PixelBuffer,
{
    if !active {
        tracing::trace!("  Stage {} skipped", kind);
        return buffer;
    }

    let t = Instant::now();
    let output = stage(buffer);
    tracing::debug!(
        "  Stage {}: {:.1}ms",
        kind,
        t.elapsed().as_secs_f64() * 1000.0
    );

    output
}
