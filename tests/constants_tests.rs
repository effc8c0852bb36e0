// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn firefly_field_constants_are_sane() {
    assert!(FIREFLY_COUNT > 0);
    assert!(FIREFLY_SPREAD_XZ > 0.0);
    assert!(FIREFLY_HEIGHT_MAX > 0.0);

    // Slider range contains the default
    assert!(FIREFLY_SIZE_MIN <= FIREFLY_SIZE_DEFAULT);
    assert!(FIREFLY_SIZE_DEFAULT <= FIREFLY_SIZE_MAX);
    assert!(FIREFLY_SIZE_MIN < FIREFLY_SIZE_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pixel_ratio_cap_is_at_least_one() {
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_limits_are_ordered() {
    assert!(ORBIT_POLAR_MIN <= ORBIT_POLAR_MAX);
    assert!(ORBIT_POLAR_MAX <= std::f32::consts::PI);
    assert!(ORBIT_RADIUS_MIN > 0.0);
    assert!(ORBIT_RADIUS_MIN < ORBIT_RADIUS_MAX);

    // Damping is a per-frame blend weight
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING <= 1.0);
    assert!(ORBIT_ROTATE_SPEED > 0.0);
    assert!(ORBIT_ZOOM_STEP > 0.0 && ORBIT_ZOOM_STEP < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_projection_constants_are_sane() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOV_Y > 0.0 && CAMERA_FOV_Y < std::f32::consts::PI);

    // The starting eye is above the horizon, inside the zoom range
    let [x, y, z] = CAMERA_EYE_START;
    assert!(y > 0.0);
    let dist = (x * x + y * y + z * z).sqrt();
    assert!(dist >= ORBIT_RADIUS_MIN && dist <= ORBIT_RADIUS_MAX);
}

#[test]
fn pole_light_color_is_normalized() {
    for c in POLE_LIGHT_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
}
