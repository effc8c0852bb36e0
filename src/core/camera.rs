use crate::constants::*;
use glam::{Mat4, Vec3};

// look_at needs a forward vector that is not parallel to up; the stored polar
// angle itself honors the [ORBIT_POLAR_MIN, ORBIT_POLAR_MAX] clamp exactly.
const POLE_EPS: f32 = 1e-4;

/// Orbit camera around a fixed target with damped convergence.
///
/// Drag input moves the yaw/polar targets; [`OrbitCamera::update`] blends the
/// current angles toward them once per frame. The polar angle is clamped to
/// [0, pi/2] both at input time and after every update, so the camera never
/// dips below the horizon no matter how large the drag.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub polar: f32,
    pub radius: f32,
    yaw_goal: f32,
    polar_goal: f32,
    radius_goal: f32,
    damping: f32,
}

impl OrbitCamera {
    /// Build from an eye position looking at `target`, deriving the spherical
    /// orientation from the offset.
    pub fn from_eye(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(ORBIT_RADIUS_MIN);
        let yaw = offset.x.atan2(offset.z);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let polar = polar.clamp(ORBIT_POLAR_MIN, ORBIT_POLAR_MAX);
        Self {
            target,
            yaw,
            polar,
            radius,
            yaw_goal: yaw,
            polar_goal: polar,
            radius_goal: radius,
            damping: ORBIT_DAMPING,
        }
    }

    /// Apply a drag delta (radians). Clamps the polar goal immediately.
    pub fn rotate(&mut self, d_yaw: f32, d_polar: f32) {
        self.yaw_goal += d_yaw;
        self.polar_goal = (self.polar_goal + d_polar).clamp(ORBIT_POLAR_MIN, ORBIT_POLAR_MAX);
    }

    /// Scale the radius goal, clamped to the configured distance range.
    pub fn zoom(&mut self, factor: f32) {
        self.radius_goal = (self.radius_goal * factor).clamp(ORBIT_RADIUS_MIN, ORBIT_RADIUS_MAX);
    }

    /// One damping step toward the goals. Called once per tick by the frame
    /// driver; never skipped, so released drags keep easing to rest.
    pub fn update(&mut self) {
        let a = self.damping;
        self.yaw += (self.yaw_goal - self.yaw) * a;
        self.polar += (self.polar_goal - self.polar) * a;
        self.radius += (self.radius_goal - self.radius) * a;
        self.polar = self.polar.clamp(ORBIT_POLAR_MIN, ORBIT_POLAR_MAX);
    }

    /// Eye position in world space.
    pub fn eye(&self) -> Vec3 {
        // Guard the pole only when converting to cartesian
        let polar = self.polar.max(POLE_EPS);
        let (sp, cp) = polar.sin_cos();
        self.target + Vec3::new(sp * self.yaw.sin(), cp, sp * self.yaw.cos()) * self.radius
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(CAMERA_FOV_Y, aspect.max(1e-3), CAMERA_NEAR, CAMERA_FAR);
        proj * self.view()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_eye(Vec3::from(CAMERA_EYE_START), Vec3::ZERO)
    }
}
