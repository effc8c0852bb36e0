use crate::constants::{ORBIT_ROTATE_SPEED, ORBIT_ZOOM_STEP};
use crate::core::OrbitCamera;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub last_x: f32,
    pub last_y: f32,
}

#[derive(Clone)]
pub struct OrbitWiring {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub drag: Rc<RefCell<DragState>>,
}

/// Wire pointer drag (orbit) and wheel (dolly) onto the canvas. The handlers
/// only move the camera's goals; damping toward them happens on the tick.
pub fn wire_orbit_controls(w: OrbitWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &OrbitWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut drag = w.drag.borrow_mut();
        drag.active = true;
        drag.last_x = ev.client_x() as f32;
        drag.last_y = ev.client_y() as f32;
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &OrbitWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut drag = w.drag.borrow_mut();
        if !drag.active {
            return;
        }
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        let dx = x - drag.last_x;
        let dy = y - drag.last_y;
        drag.last_x = x;
        drag.last_y = y;
        // Dragging right orbits left, dragging up tips toward the top
        w.camera
            .borrow_mut()
            .rotate(-dx * ORBIT_ROTATE_SPEED, -dy * ORBIT_ROTATE_SPEED);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &OrbitWiring) {
    let canvas = w.canvas.clone();
    let drag_up = Rc::clone(&w.drag);
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        drag_up.borrow_mut().active = false;
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
    // A pointer leaving the canvas mid-drag also ends the drag
    let drag_leave = Rc::clone(&w.drag);
    let leave = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        drag_leave.borrow_mut().active = false;
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", leave.as_ref().unchecked_ref());
    leave.forget();
}

fn wire_wheel(w: &OrbitWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let factor = if ev.delta_y() < 0.0 {
            ORBIT_ZOOM_STEP
        } else {
            1.0 / ORBIT_ZOOM_STEP
        };
        w.camera.borrow_mut().zoom(factor);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
