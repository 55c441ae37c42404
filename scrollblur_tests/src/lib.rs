// Copyright 2026 the Scrollblur Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for Scrollblur integration tests.

use scrollblur::kurbo::Rect;
use scrollblur::pico_page::PicoPage;
use scrollblur::{BlurParams, NodeId, ViewportBlurController};

/// Viewport height every fixture page starts with.
pub const VIEWPORT_HEIGHT: f64 = 1000.0;

/// Horizontal extent of fixture sections. The mapping only looks at the
/// vertical extent.
pub const PAGE_WIDTH: f64 = 800.0;

/// A page of stacked full-width sections plus the handles of the inner
/// divs the default selector matches.
pub struct SectionPage {
    pub page: PicoPage,
    pub sections: Vec<NodeId>,
}

/// Build `count` sections of `section_height` pixels, stacked from the
/// viewport top downwards, each wrapped the way the default selector
/// expects.
pub fn stacked_sections(count: usize, section_height: f64) -> SectionPage {
    let mut page = PicoPage::new(VIEWPORT_HEIGHT);
    let mut sections = Vec::new();
    for index in 0..count {
        let top = index as f64 * section_height;
        let rect = Rect::new(0.0, top, PAGE_WIDTH, top + section_height);
        let wrapper = page.insert("div", &["fusion-fullwidth"], None, rect);
        sections.push(page.insert("div", &[], Some(wrapper), rect));
    }
    SectionPage { page, sections }
}

/// A page with a single wrapped section spanning the given vertical
/// extent, relative to the viewport top.
pub fn single_section(top: f64, bottom: f64) -> (PicoPage, NodeId) {
    let mut page = PicoPage::new(VIEWPORT_HEIGHT);
    let rect = Rect::new(0.0, top, PAGE_WIDTH, bottom);
    let wrapper = page.insert("div", &["fusion-fullwidth"], None, rect);
    let section = page.insert("div", &[], Some(wrapper), rect);
    (page, section)
}

/// A controller with default parameters, attached to `page` (running the
/// eager refresh if the page is ready).
pub fn attached_controller(page: &mut PicoPage) -> ViewportBlurController {
    let mut controller = ViewportBlurController::new(BlurParams::default());
    controller.attach(page);
    controller
}
