pub mod camera;
pub mod config;
pub mod effects;
pub mod fireflies;
pub mod scene;
pub mod viewport;

pub use camera::*;
pub use config::*;
pub use effects::*;
pub use fireflies::*;
pub use scene::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static PORTAL_WGSL: &str = include_str!("../../shaders/portal.wgsl");
pub static FIREFLIES_WGSL: &str = include_str!("../../shaders/fireflies.wgsl");
