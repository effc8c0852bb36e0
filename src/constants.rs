/// Scene tuning constants.
///
/// These constants express intended behavior (counts, clamp limits, default
/// colors) and keep magic numbers out of the code.
// Firefly field
pub const FIREFLY_COUNT: usize = 50;
// Horizontal extent is ±(FIREFLY_SPREAD_XZ / 2) on x and z
pub const FIREFLY_SPREAD_XZ: f32 = 4.0;
pub const FIREFLY_HEIGHT_MAX: f32 = 1.5;

// Firefly point size (CSS-pixel scale before per-particle attenuation)
pub const FIREFLY_SIZE_DEFAULT: f32 = 200.0;
pub const FIREFLY_SIZE_MIN: f32 = 0.0;
pub const FIREFLY_SIZE_MAX: f32 = 500.0;

// Device pixel ratio is capped so 3x+ displays don't quadruple fill cost
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Camera
pub const CAMERA_FOV_Y: f32 = std::f32::consts::FRAC_PI_4; // 45 degrees
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_EYE_START: [f32; 3] = [4.0, 2.0, 4.0];

// Orbit control limits
pub const ORBIT_POLAR_MIN: f32 = 0.0;
pub const ORBIT_POLAR_MAX: f32 = std::f32::consts::FRAC_PI_2;
pub const ORBIT_RADIUS_MIN: f32 = 1.0;
pub const ORBIT_RADIUS_MAX: f32 = 20.0;
// Per-frame blend toward the drag target; smaller is floatier
pub const ORBIT_DAMPING: f32 = 0.08;
// Radians per canvas pixel of drag
pub const ORBIT_ROTATE_SPEED: f32 = 0.005;
// Radius multiplier per wheel notch
pub const ORBIT_ZOOM_STEP: f32 = 0.95;

// Default colors (hex, panel-facing) and their RGB forms
pub const PORTAL_COLOR_START_HEX: &str = "#9e00cf";
pub const PORTAL_COLOR_END_HEX: &str = "#cd84ff";
pub const CLEAR_COLOR_HEX: &str = "#3a364d";
pub const POLE_LIGHT_COLOR: [f32; 3] = [0.973, 0.878, 0.6]; // #f8e099

// Static assets fetched at startup
pub const SCENE_ASSET_URL: &str = "portal.scn";
pub const BAKED_TEXTURE_URL: &str = "baked.jpg";
