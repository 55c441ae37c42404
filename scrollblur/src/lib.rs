// Copyright 2026 the Scrollblur Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-position driven blur for page sections.
//!
//! Scrollblur maps each candidate element's bounding geometry, taken
//! relative to the current viewport, to a blur radius, and writes the
//! resulting filter value back to the element. The radius ramps up with an
//! ease-in curve as an element's edge moves through a fade zone near the
//! viewport's top or bottom edge, holds at the configured maximum while the
//! element is offscreen, and clears while the element is clear of both
//! zones. See the [`zone`] module for the exact mapping.
//!
//! The crate does not talk to a real browser. Hosts implement the
//! [`Page`] trait over whatever UI tree they own and forward their
//! ready/scroll/resize signals to a [`ViewportBlurController`], which
//! re-queries the candidate set and recomputes every element on each
//! signal. No state is carried between recomputes.
//!
//! # Features
//!
//! - `pico_page`: a minimal in-memory [`Page`] with a tiny selector
//!   engine. This is only intended for development and testing of
//!   Scrollblur itself.

// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![forbid(unsafe_code)]

// Only the pico page has a parse surface; keep the error-derive dependency
// satisfied when it is compiled out.
#[cfg(not(feature = "pico_page"))]
use thiserror as _;

pub mod controller;
pub mod filter;
pub mod page;
#[cfg(feature = "pico_page")]
pub mod pico_page;
pub mod zone;

/// 2D geometry, with a focus on curves.
pub use peniko::kurbo;

pub use controller::ViewportBlurController;
pub use filter::Filter;
pub use page::{NodeId, Page, PageSignal};

/// Selector used when the configuration provider does not supply one.
///
/// Matches the inner containers of the host theme's full-width sections.
pub const DEFAULT_SELECTOR: &str = ".fusion-fullwidth > div";

/// Maximum blur radius, in CSS pixels, used when none is supplied.
pub const DEFAULT_MAX_BLUR: f64 = 20.0;

/// Default fraction of viewport height for the bottom-edge fade zone.
pub const DEFAULT_THRESHOLD_TOP_RATIO: f64 = 0.40;

/// Default fraction of viewport height for the top-edge fade zone.
pub const DEFAULT_THRESHOLD_BOTTOM_RATIO: f64 = 0.33;

/// Parameters used by every refresh that are configurable by the client.
///
/// A value of this is fixed for the lifetime of a
/// [`ViewportBlurController`]; only the viewport and element geometry vary
/// between refreshes. Build one directly, or resolve a partial
/// [`BlurOptions`] record against the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct BlurParams {
    /// Selector picking the candidate elements. Re-run on every refresh,
    /// so elements entering or leaving the page are picked up naturally.
    pub selector: String,

    /// Radius, in CSS pixels, applied to fully offscreen elements and
    /// approached by the fade ramps. Never exceeded.
    pub max_blur: f64,

    /// Fraction of viewport height forming the fade zone adjacent to the
    /// viewport's *bottom* edge. An element's top edge ramps the blur up
    /// as it moves through this zone while the element leaves downwards.
    pub threshold_top_ratio: f64,

    /// Fraction of viewport height forming the fade zone adjacent to the
    /// viewport's *top* edge. An element's bottom edge ramps the blur up
    /// as it moves through this zone while the element leaves upwards.
    pub threshold_bottom_ratio: f64,
}

impl Default for BlurParams {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            max_blur: DEFAULT_MAX_BLUR,
            threshold_top_ratio: DEFAULT_THRESHOLD_TOP_RATIO,
            threshold_bottom_ratio: DEFAULT_THRESHOLD_BOTTOM_RATIO,
        }
    }
}

/// Settings as delivered by an external configuration provider.
///
/// Every field is optional and falls back to its default independently.
/// The provider is trusted: values are used as handed over, without
/// validation or sanitization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlurOptions {
    /// Overrides [`DEFAULT_SELECTOR`].
    pub selector: Option<String>,
    /// Overrides [`DEFAULT_MAX_BLUR`].
    pub max_blur: Option<f64>,
    /// Overrides [`DEFAULT_THRESHOLD_TOP_RATIO`].
    pub threshold_top_ratio: Option<f64>,
    /// Overrides [`DEFAULT_THRESHOLD_BOTTOM_RATIO`].
    pub threshold_bottom_ratio: Option<f64>,
}

impl BlurOptions {
    /// Resolve against the defaults.
    pub fn resolve(self) -> BlurParams {
        let defaults = BlurParams::default();
        BlurParams {
            selector: self.selector.unwrap_or(defaults.selector),
            max_blur: self.max_blur.unwrap_or(defaults.max_blur),
            threshold_top_ratio: self
                .threshold_top_ratio
                .unwrap_or(defaults.threshold_top_ratio),
            threshold_bottom_ratio: self
                .threshold_bottom_ratio
                .unwrap_or(defaults.threshold_bottom_ratio),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_resolve_to_defaults() {
        assert_eq!(BlurOptions::default().resolve(), BlurParams::default());
    }

    #[test]
    fn each_option_overrides_independently() {
        let params = BlurOptions {
            max_blur: Some(8.0),
            ..Default::default()
        }
        .resolve();
        assert_eq!(params.max_blur, 8.0);
        assert_eq!(params.selector, DEFAULT_SELECTOR);
        assert_eq!(params.threshold_top_ratio, DEFAULT_THRESHOLD_TOP_RATIO);
        assert_eq!(
            params.threshold_bottom_ratio,
            DEFAULT_THRESHOLD_BOTTOM_RATIO
        );
    }
}
