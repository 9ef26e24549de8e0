use serde::{Deserialize, Serialize};

use crate::ops::FilterId;

/// A drag must exceed this many pixels on both axes to create a zone.
pub const MIN_DRAG_EXTENT: f32 = 10.0;

/// Rectangle in image-pixel space that overrides the active filter.
///
/// Edges are inclusive: a pixel at `x + width` is still inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub filter: FilterId,
}

impl Zone {
    /// Creates a zone, flipping negative extents so the origin is top-left.
    pub fn new(x: f32, y: f32, width: f32, height: f32, filter: FilterId) -> Self {
        Zone {
            x,
            y,
            width,
            height,
            filter,
        }
        .normalized()
    }

    /// Builds a zone from a pointer drag, or `None` when the drag is too small.
    pub fn from_drag(start: (f32, f32), end: (f32, f32), filter: FilterId) -> Option<Zone> {
        let width = end.0 - start.0;
        let height = end.1 - start.1;

        if width.abs() > MIN_DRAG_EXTENT && height.abs() > MIN_DRAG_EXTENT {
            Some(Zone::new(start.0, start.1, width, height, filter))
        } else {
            None
        }
    }

    pub fn normalized(self) -> Zone {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };

        Zone {
            x,
            y,
            width,
            height,
            filter: self.filter,
        }
    }

    /// Zero-area or non-finite rectangles never become active.
    pub fn is_degenerate(&self) -> bool {
        let finite = self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();

        !finite || self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Ordered zone list; the first zone containing a pixel supplies its filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneMask {
    zones: Vec<Zone>,
}

impl ZoneMask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes each zone and silently drops degenerate ones.
    pub fn from_zones<I: IntoIterator<Item = Zone>>(zones: I) -> Self {
        let mut mask = ZoneMask::new();
        for zone in zones {
            mask.push(zone);
        }
        mask
    }

    /// Appends a zone. Returns `false` if it was degenerate and dropped.
    pub fn push(&mut self, zone: Zone) -> bool {
        let zone = zone.normalized();
        if zone.is_degenerate() {
            return false;
        }

        self.zones.push(zone);
        true
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Filter of the first zone containing pixel `(x, y)`.
    #[inline]
    pub fn filter_at(&self, x: usize, y: usize) -> Option<FilterId> {
        let (x, y) = (x as f32, y as f32);
        self.zones
            .iter()
            .find(|zone| zone.contains(x, y))
            .map(|zone| zone.filter)
    }
}
