//! Debug panel bindings.
//!
//! Each control holds a narrow closure writing one parameter on the owning
//! effect; there is no shared mutable bag behind the panel. Values are seeded
//! from [`SceneConfig`] so the inputs reflect the actual defaults.

use crate::core::{format_hex_color, parse_hex_color, FireflyEffect, PortalEffect, SceneConfig};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct PanelWiring {
    pub document: web::Document,
    pub portal: Rc<RefCell<PortalEffect>>,
    pub fireflies: Rc<RefCell<FireflyEffect>>,
    pub config: Rc<RefCell<SceneConfig>>,
}

pub fn wire_panel(w: &PanelWiring) {
    let doc = &w.document;
    {
        let cfg = w.config.borrow();
        dom::set_input_value(
            doc,
            "portal-color-start",
            &format_hex_color(cfg.portal_color_start),
        );
        dom::set_input_value(
            doc,
            "portal-color-end",
            &format_hex_color(cfg.portal_color_end),
        );
        dom::set_input_value(doc, "firefly-size", &format!("{}", cfg.firefly_size));
        dom::set_input_value(doc, "clear-color", &format_hex_color(cfg.clear_color));
    }

    let portal = Rc::clone(&w.portal);
    let config = Rc::clone(&w.config);
    dom::add_input_listener(doc, "portal-color-start", move |value| {
        if let Some(rgb) = parse_hex_color(&value) {
            portal.borrow_mut().start_color = rgb;
            config.borrow_mut().portal_color_start = rgb;
        }
    });

    let portal = Rc::clone(&w.portal);
    let config = Rc::clone(&w.config);
    dom::add_input_listener(doc, "portal-color-end", move |value| {
        if let Some(rgb) = parse_hex_color(&value) {
            portal.borrow_mut().end_color = rgb;
            config.borrow_mut().portal_color_end = rgb;
        }
    });

    let fireflies = Rc::clone(&w.fireflies);
    let config = Rc::clone(&w.config);
    dom::add_input_listener(doc, "firefly-size", move |value| {
        if let Ok(size) = value.parse::<f32>() {
            // The setter clamps to the slider range; stale markup can't
            // push an out-of-range value through
            fireflies.borrow_mut().set_size(size);
            config.borrow_mut().firefly_size = fireflies.borrow().size();
        }
    });

    let config = Rc::clone(&w.config);
    dom::add_input_listener(doc, "clear-color", move |value| {
        if let Some(rgb) = parse_hex_color(&value) {
            config.borrow_mut().clear_color = rgb;
        }
    });
}
