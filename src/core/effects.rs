use crate::constants::*;

/// Parameter set owned by the portal glow effect.
#[derive(Clone, Copy, Debug)]
pub struct PortalEffect {
    pub time: f32,
    pub start_color: [f32; 3],
    pub end_color: [f32; 3],
}

impl PortalEffect {
    pub fn new(start_color: [f32; 3], end_color: [f32; 3]) -> Self {
        Self {
            time: 0.0,
            start_color,
            end_color,
        }
    }
}

/// Parameter set owned by the firefly point effect.
#[derive(Clone, Copy, Debug)]
pub struct FireflyEffect {
    pub time: f32,
    pixel_ratio: f32,
    size: f32,
}

impl FireflyEffect {
    pub fn new(pixel_ratio: f64) -> Self {
        let mut fx = Self {
            time: 0.0,
            pixel_ratio: 1.0,
            size: FIREFLY_SIZE_DEFAULT,
        };
        fx.set_pixel_ratio(pixel_ratio);
        fx
    }

    /// Store the device pixel ratio, capped at [`MAX_PIXEL_RATIO`] and never
    /// below 1.
    pub fn set_pixel_ratio(&mut self, dpr: f64) {
        self.pixel_ratio = dpr.clamp(1.0, MAX_PIXEL_RATIO) as f32;
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Store the panel-controlled point size, clamped to the slider range
    /// rather than rejected.
    pub fn set_size(&mut self, size: f32) {
        self.size = size.clamp(FIREFLY_SIZE_MIN, FIREFLY_SIZE_MAX);
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

/// Write one elapsed-time value into both effects.
///
/// This is the frame driver's single synchronization point: both effects
/// always animate from the same clock sample, so they cannot drift apart.
pub fn sync_time(portal: &mut PortalEffect, fireflies: &mut FireflyEffect, elapsed: f32) {
    portal.time = elapsed;
    fireflies.time = elapsed;
}
