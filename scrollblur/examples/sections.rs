// Copyright 2026 the Scrollblur Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrolls a small page of stacked sections and prints the filter each one
//! ends up with at every step.
//!
//! Run with `cargo run --example sections --features pico_page`.

use scrollblur::kurbo::Rect;
use scrollblur::pico_page::PicoPage;
use scrollblur::{BlurOptions, PageSignal, ViewportBlurController};

const VIEWPORT_HEIGHT: f64 = 1000.0;
const SECTION_HEIGHT: f64 = 700.0;
const SECTIONS: usize = 4;
const SCROLL_STEP: f64 = 250.0;

fn main() {
    let mut page = PicoPage::new(VIEWPORT_HEIGHT);

    // Stack full-width sections below each other, each wrapped the way the
    // default selector expects.
    let mut sections = Vec::new();
    for index in 0..SECTIONS {
        let top = index as f64 * SECTION_HEIGHT;
        let rect = Rect::new(0.0, top, 800.0, top + SECTION_HEIGHT);
        let wrapper = page.insert("div", &["fusion-fullwidth"], None, rect);
        sections.push(page.insert("div", &[], Some(wrapper), rect));
    }

    let mut controller = ViewportBlurController::new(BlurOptions::default().resolve());
    controller.attach(&mut page);

    let mut offset = 0.0;
    loop {
        println!("scroll offset {offset:>6.0}px");
        for (index, section) in sections.iter().enumerate() {
            let filter = page.filter(*section).unwrap_or("<untouched>");
            println!("  section {index}: {filter}");
        }
        if offset >= SECTIONS as f64 * SECTION_HEIGHT {
            break;
        }
        page.scroll_by(SCROLL_STEP);
        offset += SCROLL_STEP;
        controller.handle(PageSignal::Scrolled, &mut page);
    }
}
