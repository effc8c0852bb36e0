// Host-side tests for configuration and color parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}

use config::*;
use constants::*;

#[test]
fn parses_the_panel_color_format() {
    let rgb = parse_hex_color("#9e00cf").expect("parse");
    assert!((rgb[0] - 158.0 / 255.0).abs() < 1e-6);
    assert_eq!(rgb[1], 0.0);
    assert!((rgb[2] - 207.0 / 255.0).abs() < 1e-6);
}

#[test]
fn rejects_malformed_colors() {
    assert!(parse_hex_color("9e00cf").is_none()); // missing '#'
    assert!(parse_hex_color("#9e00c").is_none()); // too short
    assert!(parse_hex_color("#9e00cf00").is_none()); // too long
    assert!(parse_hex_color("#gg00cf").is_none()); // not hex
    assert!(parse_hex_color("").is_none());
}

#[test]
fn format_parse_roundtrip() {
    for hex in [PORTAL_COLOR_START_HEX, PORTAL_COLOR_END_HEX, CLEAR_COLOR_HEX] {
        let rgb = parse_hex_color(hex).expect("parse");
        assert_eq!(format_hex_color(rgb), hex);
    }
}

#[test]
fn defaults_come_from_the_configured_hex_colors() {
    let cfg = SceneConfig::default();
    assert_eq!(
        Some(cfg.portal_color_start),
        parse_hex_color(PORTAL_COLOR_START_HEX)
    );
    assert_eq!(
        Some(cfg.portal_color_end),
        parse_hex_color(PORTAL_COLOR_END_HEX)
    );
    assert_eq!(Some(cfg.clear_color), parse_hex_color(CLEAR_COLOR_HEX));
    assert_eq!(cfg.firefly_size, FIREFLY_SIZE_DEFAULT);
}
