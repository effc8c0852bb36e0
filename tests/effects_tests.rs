// Host-side tests for the shader parameter sets.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod effects {
    include!("../src/core/effects.rs");
}

use constants::*;
use effects::*;

fn fresh_pair() -> (PortalEffect, FireflyEffect) {
    (
        PortalEffect::new([0.62, 0.0, 0.81], [0.8, 0.52, 1.0]),
        FireflyEffect::new(1.0),
    )
}

#[test]
fn sync_writes_the_same_time_into_both_effects() {
    let (mut portal, mut fireflies) = fresh_pair();
    for t in [0.0_f32, 0.016, 1.5, 60.0, 1.0e6] {
        sync_time(&mut portal, &mut fireflies, t);
        assert_eq!(portal.time, t);
        assert_eq!(fireflies.time, t);
        assert_eq!(portal.time, fireflies.time);
    }
}

#[test]
fn sync_overwrites_stale_values() {
    let (mut portal, mut fireflies) = fresh_pair();
    sync_time(&mut portal, &mut fireflies, 10.0);
    // A panel write between ticks must not desynchronize the clocks
    portal.time = 3.0;
    sync_time(&mut portal, &mut fireflies, 10.5);
    assert_eq!(portal.time, 10.5);
    assert_eq!(fireflies.time, 10.5);
}

#[test]
fn pixel_ratio_is_capped_at_two() {
    let fx = FireflyEffect::new(3.0);
    assert_eq!(fx.pixel_ratio(), 2.0);

    let mut fx = FireflyEffect::new(1.0);
    fx.set_pixel_ratio(2.5);
    assert_eq!(fx.pixel_ratio(), 2.0);
}

#[test]
fn pixel_ratio_never_drops_below_one() {
    let fx = FireflyEffect::new(0.5);
    assert_eq!(fx.pixel_ratio(), 1.0);
}

#[test]
fn size_reads_back_exactly_at_the_slider_maximum() {
    let mut fx = FireflyEffect::new(1.0);
    fx.set_size(500.0);
    assert_eq!(fx.size(), 500.0);
}

#[test]
fn out_of_range_sizes_are_clamped_not_rejected() {
    let mut fx = FireflyEffect::new(1.0);
    fx.set_size(-25.0);
    assert_eq!(fx.size(), FIREFLY_SIZE_MIN);
    fx.set_size(10_000.0);
    assert_eq!(fx.size(), FIREFLY_SIZE_MAX);
}

#[test]
fn size_defaults_to_the_configured_value() {
    let fx = FireflyEffect::new(2.0);
    assert_eq!(fx.size(), FIREFLY_SIZE_DEFAULT);
}
