use crate::constants::*;

/// Panel-facing scene configuration.
///
/// An explicit struct rather than a shared untyped bag: each panel control
/// reads its default from here and writes through a narrow setter on the
/// owning effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub portal_color_start: [f32; 3],
    pub portal_color_end: [f32; 3],
    pub firefly_size: f32,
    pub clear_color: [f32; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            // The hex defaults are compile-time constants; a parse failure
            // here would be a typo in constants.rs, caught by tests.
            portal_color_start: parse_hex_color(PORTAL_COLOR_START_HEX).unwrap_or([1.0; 3]),
            portal_color_end: parse_hex_color(PORTAL_COLOR_END_HEX).unwrap_or([1.0; 3]),
            firefly_size: FIREFLY_SIZE_DEFAULT,
            clear_color: parse_hex_color(CLEAR_COLOR_HEX).unwrap_or([0.0; 3]),
        }
    }
}

/// Parse a `#rrggbb` string (as produced by `<input type="color">`) into
/// normalized RGB. Returns `None` for anything malformed.
pub fn parse_hex_color(hex: &str) -> Option<[f32; 3]> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
}

/// Format normalized RGB back into `#rrggbb` for seeding color inputs.
pub fn format_hex_color(rgb: [f32; 3]) -> String {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        to_byte(rgb[0]),
        to_byte(rgb[1]),
        to_byte(rgb[2])
    )
}
