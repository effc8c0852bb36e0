use crate::constants::*;
use rand::Rng;

/// Per-particle instance data, uploaded once as a vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FireflyInstance {
    pub position: [f32; 3],
    pub scale: f32,
}

/// The fixed firefly field: positions and scales sampled once at startup,
/// immutable afterwards. Resizes and reloads never regenerate it.
#[derive(Clone, Debug, PartialEq)]
pub struct FireflyField {
    instances: Vec<FireflyInstance>,
}

impl FireflyField {
    /// Sample `count` particles inside the configured box: x and z in
    /// ±(spread/2), y in [0, height), scale in [0, 1).
    pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Self {
        let instances = (0..count)
            .map(|_| FireflyInstance {
                position: [
                    (rng.gen::<f32>() - 0.5) * FIREFLY_SPREAD_XZ,
                    rng.gen::<f32>() * FIREFLY_HEIGHT_MAX,
                    (rng.gen::<f32>() - 0.5) * FIREFLY_SPREAD_XZ,
                ],
                scale: rng.gen::<f32>(),
            })
            .collect();
        Self { instances }
    }

    pub fn instances(&self) -> &[FireflyInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
