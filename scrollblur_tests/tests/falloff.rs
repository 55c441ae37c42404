// Copyright 2026 the Scrollblur Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape of the radius curve across a full scroll of the viewport.

use scrollblur::kurbo::Rect;
use scrollblur::zone::{blur_radius, classify, Placement, Thresholds};
use scrollblur::BlurParams;

const VIEWPORT: f64 = 1000.0;
const SECTION_HEIGHT: f64 = 500.0;

fn rect(top: f64, bottom: f64) -> Rect {
    Rect::new(0.0, top, 800.0, bottom)
}

fn params() -> BlurParams {
    BlurParams::default()
}

#[test]
fn radius_stays_within_bounds_across_a_full_scroll() {
    let params = params();
    for step in 0..=400 {
        let top = -900.0 + f64::from(step) * 6.0;
        let radius = blur_radius(rect(top, top + SECTION_HEIGHT), VIEWPORT, &params);
        assert!(
            (0.0..=params.max_blur).contains(&radius),
            "radius {radius} out of range at top {top}"
        );
    }
}

#[test]
fn top_exit_ramp_is_monotonic() {
    // Bottom edge moving from the zone boundary (330px) up to the
    // viewport top; the radius may only grow.
    let params = params();
    let mut last = 0.0;
    let mut bottom = 330.0;
    while bottom >= 0.0 {
        let radius = blur_radius(rect(bottom - SECTION_HEIGHT, bottom), VIEWPORT, &params);
        assert!(
            radius >= last,
            "radius regressed from {last} to {radius} at bottom {bottom}"
        );
        last = radius;
        bottom -= 0.5;
    }
    // The edge leaving the viewport lands exactly on the offscreen value.
    assert_eq!(last, params.max_blur);
}

#[test]
fn bottom_exit_ramp_is_monotonic() {
    // Top edge moving from the zone boundary (600px) down to the
    // viewport bottom.
    let params = params();
    let mut last = 0.0;
    let mut top = 600.0;
    while top <= 1000.0 {
        let radius = blur_radius(rect(top, top + SECTION_HEIGHT), VIEWPORT, &params);
        assert!(
            radius >= last,
            "radius regressed from {last} to {radius} at top {top}"
        );
        last = radius;
        top += 0.5;
    }
    assert_eq!(last, params.max_blur);
}

#[test]
fn ramps_approach_max_near_the_viewport_edge() {
    let params = params();
    let near_top = blur_radius(rect(-499.0, 1.0), VIEWPORT, &params);
    assert!(near_top > 19.0 && near_top < params.max_blur);
    let near_bottom = blur_radius(rect(999.0, 1499.0), VIEWPORT, &params);
    assert!(near_bottom > 19.0 && near_bottom < params.max_blur);
}

#[test]
fn quadratic_ramp_sits_below_linear() {
    // At any partial progress the squared curve is below the straight
    // line between 0 and max.
    let params = params();
    for step in 1..10 {
        let bottom = 330.0 * f64::from(step) / 10.0;
        let radius = blur_radius(rect(bottom - SECTION_HEIGHT, bottom), VIEWPORT, &params);
        let linear = (330.0 - bottom) / 330.0 * params.max_blur;
        assert!(
            radius < linear,
            "expected {radius} below the linear {linear} at bottom {bottom}"
        );
    }
}

#[test]
fn classification_is_exhaustive_over_a_scroll() {
    let thresholds = Thresholds::from_ratios(VIEWPORT, 0.40, 0.33);
    assert_eq!(
        classify(rect(-700.0, -200.0), VIEWPORT, thresholds),
        Placement::Offscreen
    );
    assert!(matches!(
        classify(rect(-400.0, 100.0), VIEWPORT, thresholds),
        Placement::ExitingTop { .. }
    ));
    assert_eq!(
        classify(rect(350.0, 550.0), VIEWPORT, thresholds),
        Placement::Onscreen
    );
    assert!(matches!(
        classify(rect(700.0, 1200.0), VIEWPORT, thresholds),
        Placement::ExitingBottom { .. }
    ));
    assert_eq!(
        classify(rect(1100.0, 1600.0), VIEWPORT, thresholds),
        Placement::Offscreen
    );
}

#[test]
fn thresholds_scale_with_the_viewport() {
    let thresholds = Thresholds::from_ratios(500.0, 0.40, 0.33);
    assert_eq!(thresholds.top, 200.0);
    assert_eq!(thresholds.bottom, 165.0);
}
