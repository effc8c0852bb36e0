// Host-side tests for viewport bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod viewport {
    include!("../src/core/viewport.rs");
}
mod fireflies {
    include!("../src/core/fireflies.rs");
}

use constants::*;
use fireflies::FireflyField;
use rand::rngs::StdRng;
use rand::SeedableRng;
use viewport::Viewport;

#[test]
fn resize_updates_the_projection_aspect() {
    let mut vp = Viewport::new(800, 600, 1.0);
    assert!((vp.aspect() - 800.0 / 600.0).abs() < 1e-6);

    vp.resize(1200, 900, 1.0);
    assert!((vp.aspect() - 1200.0 / 900.0).abs() < 1e-6);
}

#[test]
fn device_pixel_ratio_is_capped() {
    let vp = Viewport::new(800, 600, 3.0);
    assert_eq!(vp.pixel_ratio(), 2.0);

    let mut vp = Viewport::new(800, 600, 1.0);
    vp.resize(800, 600, 2.5);
    assert_eq!(vp.pixel_ratio(), 2.0);
}

#[test]
fn physical_size_uses_the_capped_ratio() {
    let vp = Viewport::new(800, 600, 3.0);
    assert_eq!(vp.physical_size(), (1600, 1200));
}

#[test]
fn zero_dimensions_are_rounded_up_to_one() {
    let vp = Viewport::new(0, 0, 1.0);
    assert_eq!((vp.width, vp.height), (1, 1));
    assert!(vp.aspect().is_finite());
}

#[test]
fn resize_leaves_firefly_data_unchanged() {
    let field = FireflyField::generate(&mut StdRng::seed_from_u64(5), FIREFLY_COUNT);
    let before = field.clone();

    let mut vp = Viewport::new(800, 600, 1.0);
    vp.resize(1200, 900, 2.0);

    assert_eq!(field, before);
}
