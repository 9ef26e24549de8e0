//! Named channel-remap filters and the stage that applies them.
//!
//! Filters are a closed set. [`FilterId`] is the tag; the behavior lives in
//! [`FILTER_CATALOG`], indexed by the tag's discriminant, so dispatch never
//! compares strings.

mod catalog;


use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use crate::common::color::{rgb_f32, store_rgb};
use crate::common::{Error, Result};
use crate::image::PixelBuffer;
use crate::mask::inclusion::permits;
use crate::mask::{InclusionMask, ZoneMask};

pub use catalog::FILTER_CATALOG;

/// Identifier of a catalog filter.
///
/// Variant order matches [`FILTER_CATALOG`].
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
    EnumCount,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FilterId {
    #[default]
    None,
    Adaptive,
    Yre,
    Yrd,
    Yds,
    Ybk,
    Ybr,
    Yye,
    Ywe,
    Lre,
    Lrd,
    Lds,
    Lbk,
    Lbl,
    Lwe,
    Lab,
    Labi,
    Lax,
    Crgb,
    Rgb0,
    Yuv,
}

impl FilterId {
    /// Parses a catalog identifier such as `"yre"`.
    pub fn parse(id: &str) -> Result<FilterId> {
        FilterId::from_str(id).map_err(|_| Error::UnknownFilter(id.to_string()))
    }

    pub fn info(self) -> &'static FilterInfo {
        &FILTER_CATALOG[self as usize]
    }

    /// Human-readable name shown in a filter picker.
    pub fn label(self) -> &'static str {
        self.info().label
    }

    #[inline]
    pub fn apply(self, rgb: [f32; 3], ctx: FilterContext) -> [f32; 3] {
        match self.info().kind {
            FilterKind::Identity => rgb,
            FilterKind::Adaptive => catalog::adaptive(rgb, ctx.shadow_recovery_active),
            FilterKind::Remap(remap) => remap(rgb),
        }
    }
}

/// How a catalog entry transforms a pixel.
#[derive(Clone, Copy)]
pub enum FilterKind {
    Identity,
    /// Chooses a profile per pixel from its luminance and greenness.
    Adaptive,
    Remap(fn([f32; 3]) -> [f32; 3]),
}

impl std::fmt::Debug for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterKind::Identity => write!(f, "Identity"),
            FilterKind::Adaptive => write!(f, "Adaptive"),
            FilterKind::Remap(_) => write!(f, "Remap"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FilterInfo {
    pub id: FilterId,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterInfo {
    pub const fn new(id: FilterId, label: &'static str, kind: FilterKind) -> Self {
        Self { id, label, kind }
    }
}

/// Render-wide inputs the adaptive classifier depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterContext {
    pub shadow_recovery_active: bool,
}

/// Applies the global filter, or a zone's filter where one contains the
/// pixel. Pixels the inclusion mask rejects pass through untouched.
#[derive(Debug, Clone, Copy)]
pub struct FilterStage<'a> {
    pub filter: FilterId,
    pub zones: Option<&'a ZoneMask>,
    pub mask: Option<&'a InclusionMask>,
    pub ctx: FilterContext,
}

impl<'a> FilterStage<'a> {
    pub fn new(filter: FilterId) -> Self {
        Self {
            filter,
            zones: None,
            mask: None,
            ctx: FilterContext::default(),
        }
    }

    /// Zones only take effect when at least one is present.
    pub fn with_zones(mut self, zones: Option<&'a ZoneMask>) -> Self {
        self.zones = zones.filter(|zones| !zones.is_empty());
        self
    }

    pub fn with_mask(mut self, mask: Option<&'a InclusionMask>) -> Self {
        self.mask = mask;
        self
    }

    pub fn with_context(mut self, ctx: FilterContext) -> Self {
        self.ctx = ctx;
        self
    }

    pub fn is_noop(&self) -> bool {
        self.filter == FilterId::None
            && self
                .zones
                .is_none_or(|zones| zones.zones().iter().all(|z| z.filter == FilterId::None))
    }

    /// Filter in effect for pixel `(x, y)`.
    #[inline]
    pub fn filter_at(&self, x: usize, y: usize) -> FilterId {
        self.zones
            .and_then(|zones| zones.filter_at(x, y))
            .unwrap_or(self.filter)
    }

    pub fn apply(&self, mut buffer: PixelBuffer) -> PixelBuffer {
        if self.is_noop() {
            return buffer;
        }

        super::map_pixels(&mut buffer, |x, y, px| {
            if !permits(self.mask, x, y) {
                return;
            }

            let filter = self.filter_at(x, y);
            if filter == FilterId::None {
                return;
            }

            store_rgb(px, filter.apply(rgb_f32(px), self.ctx));
        });

        buffer
    }
}
