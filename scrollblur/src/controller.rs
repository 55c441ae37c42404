// Copyright 2026 the Scrollblur Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recomputing and applying section blur on host triggers.

use crate::filter::Filter;
use crate::page::{Page, PageSignal};
use crate::zone::blur_radius;
use crate::BlurParams;
use log::trace;

/// Opt-out marker: an element with any class name containing this fragment
/// is never touched, regardless of geometry.
pub const OPT_OUT_CLASS_FRAGMENT: &str = "-mesh";

/// Recomputes every candidate element's blur from its current viewport
/// geometry and writes the result back, on each relevant host trigger.
///
/// The controller keeps no per-element state. Each [`refresh`] re-queries
/// the candidate set, reads geometry, and writes filters in one pass, so
/// elements added to or removed from the page between triggers are picked
/// up or dropped without bookkeeping, and two refreshes over unchanged
/// geometry write identical values.
///
/// Wiring: call [`attach`] once when the host starts delivering signals,
/// then [`handle`] for every signal. The eager first refresh runs as soon
/// as the document is ready (immediately on attach if it already is,
/// otherwise when [`PageSignal::Ready`] arrives); scroll and resize
/// signals before that point are ignored.
///
/// [`refresh`]: Self::refresh
/// [`attach`]: Self::attach
/// [`handle`]: Self::handle
#[derive(Debug)]
pub struct ViewportBlurController {
    params: BlurParams,
    /// Set when the eager ready-time refresh has run; latched so a
    /// repeated ready signal cannot run it twice.
    armed: bool,
}

impl ViewportBlurController {
    /// Create a controller with the given parameters.
    pub fn new(params: BlurParams) -> Self {
        Self {
            params,
            armed: false,
        }
    }

    /// The parameters this controller was created with.
    pub fn params(&self) -> &BlurParams {
        &self.params
    }

    /// Hook the controller up to a page.
    ///
    /// If the document is already ready, the eager refresh runs now;
    /// otherwise the controller waits for [`PageSignal::Ready`].
    pub fn attach(&mut self, page: &mut impl Page) {
        if !self.armed && page.is_ready() {
            self.armed = true;
            self.refresh(page);
        }
    }

    /// React to a host signal.
    pub fn handle(&mut self, signal: PageSignal, page: &mut impl Page) {
        match signal {
            PageSignal::Ready => {
                if !self.armed {
                    self.armed = true;
                    self.refresh(page);
                }
            }
            PageSignal::Scrolled | PageSignal::Resized => {
                if self.armed {
                    self.refresh(page);
                }
            }
        }
    }

    /// Recompute and apply the blur of every candidate element.
    ///
    /// Runs to completion synchronously and never fails; a selector that
    /// matches nothing makes this a no-op. Every element is computed
    /// independently from the page's current geometry.
    pub fn refresh(&self, page: &mut impl Page) {
        let viewport_height = page.viewport_height();
        let nodes = page.query(&self.params.selector);
        if nodes.is_empty() {
            return;
        }
        trace!(
            "refreshing {} candidate(s) against a {viewport_height}px viewport",
            nodes.len()
        );
        for node in nodes {
            let opted_out = page
                .class_names(node)
                .iter()
                .any(|class| class.contains(OPT_OUT_CLASS_FRAGMENT));
            if opted_out {
                continue;
            }
            let rect = page.bounding_rect(node);
            let radius = blur_radius(rect, viewport_height, &self.params);
            page.set_filter(node, Filter::from_radius(radius));
        }
    }
}
