// Copyright 2026 the Scrollblur Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The filter value written back to elements.
//!
//! Follows the blur filter function of the W3C Filter Effects
//! specification; the controller only ever produces a blur or the explicit
//! no-filter value, never a filter list.
//!
//! See: <https://drafts.fxtf.org/filter-effects/#filter-functions>

use std::fmt;

/// A filter style value for a single element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    /// No filtering: the explicit CSS value `none`, clearing any blur the
    /// element carried.
    None,
    /// Gaussian blur effect.
    Blur {
        /// Blur radius in pixels.
        radius: f64,
    },
}

impl Filter {
    /// The filter for a computed radius: any positive radius blurs, zero
    /// clears.
    pub fn from_radius(radius: f64) -> Self {
        if radius > 0.0 {
            Self::Blur { radius }
        } else {
            Self::None
        }
    }

    /// CSS text for this value.
    ///
    /// The radius is rounded to two decimals here, and only here; the
    /// stored radius stays exact.
    pub fn to_css_string(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Blur { radius } => write!(f, "blur({radius:.2}px)"),
        }
    }
}
