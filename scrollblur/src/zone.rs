// Copyright 2026 the Scrollblur Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping viewport geometry to a blur radius.
//!
//! The viewport carries a fade zone along each horizontal edge, sized as a
//! fraction of the current viewport height. An element's blur depends only
//! on where its bounding rect sits relative to those zones at the instant
//! of the recompute: nothing is interpolated over time, so scrubbing the
//! scroll position back and forth lands on identical values.
//!
//! The ramp is quadratic in the zone progress: the blur sets in slowly at
//! the zone boundary and steepens as the element approaches the viewport
//! edge.

use crate::BlurParams;
use peniko::kurbo::Rect;

/// Pixel heights of the two fade zones, derived from the viewport height.
///
/// Recomputed from the configured ratios on every refresh, so a resize
/// rescales both zones with the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Height of the fade zone adjacent to the viewport's bottom edge.
    pub top: f64,
    /// Height of the fade zone adjacent to the viewport's top edge.
    pub bottom: f64,
}

impl Thresholds {
    /// Derive the zone heights for a viewport of `viewport_height` pixels.
    pub fn from_ratios(viewport_height: f64, top_ratio: f64, bottom_ratio: f64) -> Self {
        Self {
            top: viewport_height * top_ratio,
            bottom: viewport_height * bottom_ratio,
        }
    }
}

/// Where an element sits relative to the viewport's fade zones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Clear of both fade zones; at least partially visible.
    Onscreen,
    /// The bottom edge has entered the fade zone at the top of the
    /// viewport: the element is on its way out upwards. `progress` runs
    /// from 0 (edge at the zone boundary) to 1 (edge at the viewport top).
    ExitingTop {
        /// How far the edge has moved through the zone, in `(0, 1]`.
        progress: f64,
    },
    /// The top edge has entered the fade zone at the bottom of the
    /// viewport: the element is on its way out downwards.
    ExitingBottom {
        /// How far the edge has moved through the zone, in `(0, 1]`.
        progress: f64,
    },
    /// Entirely above or below the viewport.
    Offscreen,
}

/// Classify a bounding rect against the fade zones.
///
/// `rect` is relative to the viewport's top-left corner; only the vertical
/// extent matters. The rules are checked in order and the first match
/// wins; the ranges can overlap at the extremes (a rect can satisfy an
/// exiting rule and the offscreen rule when the zones cover most of the
/// viewport), and the exiting rules take priority.
pub fn classify(rect: Rect, viewport_height: f64, thresholds: Thresholds) -> Placement {
    if rect.y1 > 0.0 && rect.y1 < thresholds.bottom {
        let distance = thresholds.bottom - rect.y1;
        Placement::ExitingTop {
            progress: (distance / thresholds.bottom).min(1.0),
        }
    } else if rect.y0 < viewport_height && rect.y0 > viewport_height - thresholds.top {
        let distance = rect.y0 - (viewport_height - thresholds.top);
        Placement::ExitingBottom {
            progress: (distance / thresholds.top).min(1.0),
        }
    } else if rect.y1 <= 0.0 || rect.y0 >= viewport_height {
        Placement::Offscreen
    } else {
        Placement::Onscreen
    }
}

/// Map a bounding rect to a blur radius in CSS pixels.
///
/// The result is always in `[0, max_blur]`: zero while onscreen,
/// `max_blur` while offscreen, and an ease-in ramp through the fade zones
/// in between.
pub fn blur_radius(rect: Rect, viewport_height: f64, params: &BlurParams) -> f64 {
    let thresholds = Thresholds::from_ratios(
        viewport_height,
        params.threshold_top_ratio,
        params.threshold_bottom_ratio,
    );
    match classify(rect, viewport_height, thresholds) {
        Placement::Onscreen => 0.0,
        Placement::ExitingTop { progress } | Placement::ExitingBottom { progress } => {
            progress * progress * params.max_blur
        }
        Placement::Offscreen => params.max_blur,
    }
}
