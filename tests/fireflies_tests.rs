// Host-side tests for firefly field generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod fireflies {
    include!("../src/core/fireflies.rs");
}

use constants::*;
use fireflies::FireflyField;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn field_has_the_configured_particle_count() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = FireflyField::generate(&mut rng, FIREFLY_COUNT);
    assert_eq!(field.len(), FIREFLY_COUNT);
}

#[test]
fn particles_lie_inside_the_configured_box() {
    let mut rng = StdRng::seed_from_u64(42);
    let field = FireflyField::generate(&mut rng, 1000);
    let half = FIREFLY_SPREAD_XZ / 2.0;
    for inst in field.instances() {
        let [x, y, z] = inst.position;
        assert!((-half..=half).contains(&x), "x out of range: {x}");
        assert!((0.0..FIREFLY_HEIGHT_MAX).contains(&y), "y out of range: {y}");
        assert!((-half..=half).contains(&z), "z out of range: {z}");
        assert!((0.0..1.0).contains(&inst.scale), "scale out of range: {}", inst.scale);
    }
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let a = FireflyField::generate(&mut StdRng::seed_from_u64(9), FIREFLY_COUNT);
    let b = FireflyField::generate(&mut StdRng::seed_from_u64(9), FIREFLY_COUNT);
    assert_eq!(a, b);

    let c = FireflyField::generate(&mut StdRng::seed_from_u64(10), FIREFLY_COUNT);
    assert_ne!(a, c);
}

#[test]
fn empty_field_is_allowed() {
    let mut rng = StdRng::seed_from_u64(0);
    let field = FireflyField::generate(&mut rng, 0);
    assert!(field.is_empty());
}
