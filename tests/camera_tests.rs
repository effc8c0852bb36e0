// Host-side tests for the orbit camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}

use camera::OrbitCamera;
use constants::*;
use glam::Vec3;

#[test]
fn polar_stays_clamped_under_extreme_drag() {
    let mut cam = OrbitCamera::default();

    // Huge upward drag
    cam.rotate(0.0, 1000.0);
    for _ in 0..300 {
        cam.update();
        assert!(cam.polar >= ORBIT_POLAR_MIN && cam.polar <= ORBIT_POLAR_MAX);
    }

    // Huge downward drag
    cam.rotate(0.0, -2000.0);
    for _ in 0..300 {
        cam.update();
        assert!(cam.polar >= ORBIT_POLAR_MIN && cam.polar <= ORBIT_POLAR_MAX);
    }
}

#[test]
fn damping_converges_to_the_drag_target() {
    let mut cam = OrbitCamera::default();
    let yaw_before = cam.yaw;
    cam.rotate(0.5, 0.0);

    // Immediately after input the orientation has not jumped
    assert!((cam.yaw - yaw_before).abs() < 1e-6);

    for _ in 0..500 {
        cam.update();
    }
    assert!((cam.yaw - (yaw_before + 0.5)).abs() < 1e-3);
}

#[test]
fn from_eye_reproduces_the_eye_position() {
    let eye = Vec3::new(4.0, 2.0, 4.0);
    let cam = OrbitCamera::from_eye(eye, Vec3::ZERO);
    assert!((cam.eye() - eye).length() < 1e-3);
    assert!((cam.radius - 6.0).abs() < 1e-4);
}

#[test]
fn zoom_is_clamped_to_the_distance_range() {
    let mut cam = OrbitCamera::default();
    for _ in 0..200 {
        cam.zoom(0.5);
        cam.update();
    }
    for _ in 0..500 {
        cam.update();
    }
    assert!(cam.radius >= ORBIT_RADIUS_MIN - 1e-3);

    for _ in 0..200 {
        cam.zoom(2.0);
        cam.update();
    }
    for _ in 0..500 {
        cam.update();
    }
    assert!(cam.radius <= ORBIT_RADIUS_MAX + 1e-3);
}

#[test]
fn view_matrix_is_finite_at_the_pole() {
    let mut cam = OrbitCamera::default();
    // Drive straight to the top of the allowed arc
    cam.rotate(0.0, -100.0);
    for _ in 0..1000 {
        cam.update();
    }
    assert!(cam.polar >= ORBIT_POLAR_MIN);

    let m = cam.view_proj(16.0 / 9.0);
    for v in m.to_cols_array() {
        assert!(v.is_finite());
    }
}

#[test]
fn eye_stays_above_the_horizon() {
    let mut cam = OrbitCamera::default();
    cam.rotate(0.3, 500.0); // try to push below the horizon
    for _ in 0..1000 {
        cam.update();
        assert!(cam.eye().y >= -1e-3);
    }
}
