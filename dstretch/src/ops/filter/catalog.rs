//! Channel-remap transforms, one per catalog entry.
//!
//! Every transform maps 0-255 RGB to unclamped RGB; the stage clamps and
//! rounds when writing back.

use strum::EnumCount;

use super::{FilterId, FilterInfo, FilterKind};
use crate::common::luminance;

/// Display-ordered catalog, indexed by `FilterId as usize`.
pub static FILTER_CATALOG: [FilterInfo; FilterId::COUNT] = [
    FilterInfo::new(FilterId::None, "Original", FilterKind::Identity),
    FilterInfo::new(FilterId::Adaptive, "Adaptive DStretch (Smart)", FilterKind::Adaptive),
    FilterInfo::new(FilterId::Yre, "YRE (Yellow-Red Enhancement)", FilterKind::Remap(yre)),
    FilterInfo::new(FilterId::Yrd, "YRD (Yellow-Red-Deep)", FilterKind::Remap(yrd)),
    FilterInfo::new(FilterId::Yds, "YDS (Yellow Deep Stretch)", FilterKind::Remap(yds)),
    FilterInfo::new(FilterId::Ybk, "YBK (Yellow-Black)", FilterKind::Remap(ybk)),
    FilterInfo::new(FilterId::Ybr, "YBR (Yellow-Blue-Red)", FilterKind::Remap(ybr)),
    FilterInfo::new(FilterId::Yye, "YYE (Yellow-Yellow Enhancement)", FilterKind::Remap(yye)),
    FilterInfo::new(FilterId::Ywe, "YWE (Yellow-White Enhancement)", FilterKind::Remap(ywe)),
    FilterInfo::new(FilterId::Lre, "LRE (Long Red Enhancement)", FilterKind::Remap(lre)),
    FilterInfo::new(FilterId::Lrd, "LRD (Long Red-Deep)", FilterKind::Remap(lrd)),
    FilterInfo::new(FilterId::Lds, "LDS (Long Deep Stretch)", FilterKind::Remap(lds)),
    FilterInfo::new(FilterId::Lbk, "LBK (Long Black)", FilterKind::Remap(lbk)),
    FilterInfo::new(FilterId::Lbl, "LBL (Long Blue)", FilterKind::Remap(lbl)),
    FilterInfo::new(FilterId::Lwe, "LWE (Long White Enhancement)", FilterKind::Remap(lwe)),
    FilterInfo::new(FilterId::Lab, "LAB (L*A*B Enhancement)", FilterKind::Remap(lab)),
    FilterInfo::new(FilterId::Labi, "LABI (LAB Invert)", FilterKind::Remap(labi)),
    FilterInfo::new(FilterId::Lax, "LAX (LAB Axis Exaggeration)", FilterKind::Remap(lax)),
    FilterInfo::new(FilterId::Crgb, "CRGB (Color RGB)", FilterKind::Remap(crgb)),
    FilterInfo::new(FilterId::Rgb0, "RGB0 (Mean Deviation Stretch)", FilterKind::Remap(rgb0)),
    FilterInfo::new(FilterId::Yuv, "YUV (Chroma Stretch)", FilterKind::Remap(yuv)),
];

fn yre([r, g, b]: [f32; 3]) -> [f32; 3] {
    [r * 1.3, g * 0.7, b * 0.5]
}

fn yrd([r, g, b]: [f32; 3]) -> [f32; 3] {
    [r * 1.4 + 20.0, g * 0.8, b * 0.3]
}

fn yds([r, g, b]: [f32; 3]) -> [f32; 3] {
    [r * 1.25 + 10.0, g * 1.05, b * 0.35]
}

fn ybk([r, g, b]: [f32; 3]) -> [f32; 3] {
    [r * 0.6, g * 0.8, b * 1.6]
}

fn ybr([r, g, b]: [f32; 3]) -> [f32; 3] {
    [r * 1.2, g * 1.2, b * 1.5]
}

fn yye([r, g, b]: [f32; 3]) -> [f32; 3] {
    [r * 1.3, g * 1.25, b * 0.5]
}

fn ywe([r, g, b]: [f32; 3]) -> [f32; 3] {
    [r * 1.15 + 10.0, g * 1.15 + 10.0, b * 0.7]
}

fn lre([r, g, b]: [f32; 3]) -> [f32; 3] {
    [r * 1.5, g * 0.5, b * 0.5]
}

fn lrd([r, g, b]: [f32; 3]) -> [f32; 3] {
    [r * 1.6 + 10.0, g * 0.6, b * 0.4]
}

fn lds([r, g, b]: [f32; 3]) -> [f32; 3] {
    let gray = (r + g + b) / 3.0;
    let diff = r - gray;
    [r + diff * 2.0, g - diff, b - diff]
}

fn lbk(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(|c| c - (255.0 - c) * 0.4)
}

fn lbl([r, g, b]: [f32; 3]) -> [f32; 3] {
    [r * 0.5, g * 0.9, b * 1.6]
}

fn lwe(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(|c| c * 1.1 + 20.0)
}

/// Lightness with the legacy 0.3/0.59/0.11 weights the LAB family uses.
fn lab_lightness(r: f32, g: f32, b: f32) -> f32 {
    0.3 * r + 0.59 * g + 0.11 * b
}

fn lab([r, g, b]: [f32; 3]) -> [f32; 3] {
    let l = lab_lightness(r, g, b);
    let a = (r - g) * 1.5;
    let bb = (g - b) * 1.5;
    [l + a, l, l - bb]
}

fn labi([r, g, b]: [f32; 3]) -> [f32; 3] {
    let l = lab_lightness(r, g, b);
    let a = (g - r) * 1.5;
    let bb = (b - g) * 1.5;
    [255.0 - (l + a), 255.0 - l, 255.0 - (l - bb)]
}

fn lax([r, g, b]: [f32; 3]) -> [f32; 3] {
    let l = lab_lightness(r, g, b);
    let a = (r - g) * 2.5;
    let bb = ((r + g) / 2.0 - b) * 1.5;
    [l + a, l - a * 0.5, l - bb]
}

fn crgb([r, g, b]: [f32; 3]) -> [f32; 3] {
    let max = r.max(g).max(b);
    [r, g, b].map(|c| if c == max { 255.0 } else { c * 0.5 })
}

fn rgb0(rgb: [f32; 3]) -> [f32; 3] {
    let mean = (rgb[0] + rgb[1] + rgb[2]) / 3.0;
    rgb.map(|c| mean + (c - mean) * 2.5)
}

fn yuv([r, g, b]: [f32; 3]) -> [f32; 3] {
    let y = luminance(r, g, b);
    let u = 0.492 * (b - y) * 2.0;
    let v = 0.877 * (r - y) * 2.0;
    [
        y + 1.140 * v,
        y - 0.395 * u - 0.581 * v,
        y + 2.032 * u,
    ]
}

const VEGETATION_GREENNESS: f32 = 15.0;
const DARK_ROCK_LUMINANCE: f32 = 80.0;

/// Per-pixel classifier behind [`FilterId::Adaptive`].
pub(super) fn adaptive([r, g, b]: [f32; 3], shadow_recovery_active: bool) -> [f32; 3] {
    let lum = luminance(r, g, b);
    let greenness = crate::common::greenness(r, g, b);

    if greenness > VEGETATION_GREENNESS {
        // vegetation
        [r * 1.3, g * 0.4, b * 1.2]
    } else if lum < DARK_ROCK_LUMINANCE && shadow_recovery_active {
        // dark rock
        [r * 1.4, g * 0.8, b * 0.6]
    } else {
        [r * 1.2, g * 0.9, b * 0.8]
    }
}
