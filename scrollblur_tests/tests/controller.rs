// Copyright 2026 the Scrollblur Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end properties of a full refresh over a pico page.

use scrollblur::kurbo::Rect;
use scrollblur::pico_page::PicoPage;
use scrollblur::{BlurOptions, PageSignal, ViewportBlurController};
use scrollblur_tests::{
    attached_controller, single_section, stacked_sections, SectionPage, PAGE_WIDTH,
    VIEWPORT_HEIGHT,
};

#[test]
fn onscreen_section_is_written_clear() {
    let (mut page, section) = single_section(400.0, 600.0);
    attached_controller(&mut page);
    assert_eq!(page.filter(section), Some("none"));
}

#[test]
fn offscreen_section_gets_max_blur() {
    let (mut page, below) = single_section(1000.0, 1200.0);
    attached_controller(&mut page);
    assert_eq!(page.filter(below), Some("blur(20.00px)"));

    let (mut page, above) = single_section(-400.0, -200.0);
    attached_controller(&mut page);
    assert_eq!(page.filter(above), Some("blur(20.00px)"));
}

#[test]
fn halfway_into_the_top_zone_blurs_a_quarter_of_max() {
    // Bottom edge at 165px, half of the 330px top zone: the quadratic
    // ramp yields 0.25 * 20.
    let (mut page, section) = single_section(-335.0, 165.0);
    attached_controller(&mut page);
    assert_eq!(page.filter(section), Some("blur(5.00px)"));
}

#[test]
fn mesh_sections_are_never_touched() {
    let mut page = PicoPage::new(VIEWPORT_HEIGHT);
    let rect = Rect::new(0.0, 1000.0, PAGE_WIDTH, 1200.0);
    let wrapper = page.insert("div", &["fusion-fullwidth"], None, rect);
    let section = page.insert("div", &["gradient-mesh"], Some(wrapper), rect);

    let mut controller = attached_controller(&mut page);
    assert_eq!(page.filter(section), None);

    // Still untouched after moving through every zone.
    for _ in 0..20 {
        page.scroll_by(150.0);
        controller.handle(PageSignal::Scrolled, &mut page);
    }
    assert_eq!(page.filter(section), None);
}

#[test]
fn refresh_is_idempotent_over_unchanged_geometry() {
    let (mut page, section) = single_section(-335.0, 165.0);
    let controller = attached_controller(&mut page);
    let first = page.filter(section).map(str::to_owned);
    controller.refresh(&mut page);
    assert_eq!(page.filter(section).map(str::to_owned), first);
}

#[test]
fn no_matching_elements_is_a_quiet_noop() {
    let mut page = PicoPage::new(VIEWPORT_HEIGHT);
    let stray = page.insert("span", &["sidebar"], None, Rect::new(0.0, 0.0, 200.0, 100.0));
    attached_controller(&mut page);
    assert_eq!(page.filter(stray), None);
}

#[test]
fn membership_is_requeried_on_every_refresh() {
    let SectionPage { mut page, sections } = stacked_sections(1, 500.0);
    let mut controller = attached_controller(&mut page);
    assert_eq!(page.filter(sections[0]), Some("none"));

    // A section added after the eager refresh is picked up by the next one.
    let rect = Rect::new(0.0, 1500.0, PAGE_WIDTH, 2000.0);
    let wrapper = page.insert("div", &["fusion-fullwidth"], None, rect);
    let late = page.insert("div", &[], Some(wrapper), rect);
    assert_eq!(page.filter(late), None);
    controller.handle(PageSignal::Scrolled, &mut page);
    assert_eq!(page.filter(late), Some("blur(20.00px)"));

    // A detached section keeps whatever was last written to it, while the
    // rest of the page moves on.
    page.detach(sections[0]);
    page.scroll_by(600.0);
    controller.handle(PageSignal::Scrolled, &mut page);
    assert_eq!(page.filter(sections[0]), Some("none"));
    assert_eq!(page.filter(late), Some("blur(11.25px)"));
}

#[test]
fn options_override_selector_and_maximum() {
    let mut page = PicoPage::new(VIEWPORT_HEIGHT);
    let panel = page.insert(
        "section",
        &["panel"],
        None,
        Rect::new(0.0, 1200.0, PAGE_WIDTH, 1600.0),
    );
    let params = BlurOptions {
        selector: Some(".panel".to_string()),
        max_blur: Some(10.0),
        ..Default::default()
    }
    .resolve();
    let mut controller = ViewportBlurController::new(params);
    controller.attach(&mut page);
    assert_eq!(page.filter(panel), Some("blur(10.00px)"));
}
