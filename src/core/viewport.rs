use crate::constants::MAX_PIXEL_RATIO;

/// Canvas size and device pixel ratio, owned by the resize handler.
///
/// The pixel ratio is capped at [`MAX_PIXEL_RATIO`] on every write; the
/// renderer and the firefly effect only ever see the capped value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32, device_pixel_ratio: f64) -> Self {
        let mut vp = Self {
            width: width.max(1),
            height: height.max(1),
            pixel_ratio: 1.0,
        };
        vp.set_pixel_ratio(device_pixel_ratio);
        vp
    }

    pub fn resize(&mut self, width: u32, height: u32, device_pixel_ratio: f64) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.set_pixel_ratio(device_pixel_ratio);
    }

    fn set_pixel_ratio(&mut self, dpr: f64) {
        self.pixel_ratio = dpr.clamp(1.0, MAX_PIXEL_RATIO);
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Projection aspect ratio.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Backing-store size in physical pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        (
            ((self.width as f64 * self.pixel_ratio) as u32).max(1),
            ((self.height as f64 * self.pixel_ratio) as u32).max(1),
        )
    }
}
