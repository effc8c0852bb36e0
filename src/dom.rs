use crate::constants::MAX_PIXEL_RATIO;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Capped device pixel ratio, shared by the canvas backing store and the
/// firefly effect.
#[inline]
pub fn capped_pixel_ratio(window: &web::Window) -> f64 {
    window.device_pixel_ratio().clamp(1.0, MAX_PIXEL_RATIO)
}

/// Keep the canvas backing store at CSS size * capped pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = capped_pixel_ratio(&w);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// CSS size of the canvas in logical pixels.
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let rect = canvas.get_bounding_client_rect();
    ((rect.width() as u32).max(1), (rect.height() as u32).max(1))
}

/// Wire an `input` listener on an `<input>` element, passing its current
/// value to the handler on every change. Missing elements are skipped — the
/// panel is optional chrome, not a hard dependency.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("panel control #{element_id} not found");
        return;
    };
    let Ok(input) = el.dyn_into::<web::HtmlInputElement>() else {
        log::warn!("panel control #{element_id} is not an <input>");
        return;
    };
    let input_for_read = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        handler(input_for_read.value());
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Seed an `<input>` element's value so the panel reflects the defaults.
pub fn set_input_value(document: &web::Document, element_id: &str, value: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Ok(input) = el.dyn_into::<web::HtmlInputElement>() {
            input.set_value(value);
        }
    }
}
