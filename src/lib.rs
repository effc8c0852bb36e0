#![cfg(target_arch = "wasm32")]
use crate::core::{FireflyEffect, FireflyField, OrbitCamera, PortalEffect, SceneConfig, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod panel;
mod render;

use constants::FIREFLY_COUNT;

fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    viewport: Rc<RefCell<Viewport>>,
    fireflies: Rc<RefCell<FireflyEffect>>,
) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        if let Some(w) = web::window() {
            let dpr = dom::capped_pixel_ratio(&w);
            let (css_w, css_h) = dom::canvas_css_size(&canvas_resize);
            viewport.borrow_mut().resize(css_w, css_h, dpr);
            // The firefly point size scales with the capped pixel ratio
            fireflies.borrow_mut().set_pixel_ratio(dpr);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portal-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("portal-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #portal-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = Rc::new(RefCell::new(SceneConfig::default()));
    let dpr = dom::capped_pixel_ratio(&window);
    let (css_w, css_h) = dom::canvas_css_size(&canvas);
    let viewport = Rc::new(RefCell::new(Viewport::new(css_w, css_h, dpr)));

    let (start_color, end_color) = {
        let cfg = config.borrow();
        (cfg.portal_color_start, cfg.portal_color_end)
    };
    let portal = Rc::new(RefCell::new(PortalEffect::new(start_color, end_color)));
    let fireflies = Rc::new(RefCell::new(FireflyEffect::new(dpr)));
    let camera = Rc::new(RefCell::new(OrbitCamera::default()));

    wire_canvas_resize(&canvas, viewport.clone(), fireflies.clone());

    // Positions and scales are sampled once here and never regenerated
    let field = FireflyField::generate(&mut rand::thread_rng(), FIREFLY_COUNT);

    let clear_color = config.borrow().clear_color;
    let gpu = frame::init_gpu(&canvas, &field, clear_color).await;

    // Kick off both asset fetches; either may land first
    let pending_scene: assets::SceneSlot = Rc::new(RefCell::new(None));
    let pending_texture: assets::TextureSlot = Rc::new(RefCell::new(None));
    assets::spawn_scene_load(pending_scene.clone());
    assets::spawn_texture_load(pending_texture.clone());

    events::wire_orbit_controls(events::OrbitWiring {
        canvas: canvas.clone(),
        camera: camera.clone(),
        drag: Rc::new(RefCell::new(events::DragState::default())),
    });

    panel::wire_panel(&panel::PanelWiring {
        document: document.clone(),
        portal: portal.clone(),
        fireflies: fireflies.clone(),
        config: config.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        portal,
        fireflies,
        camera,
        viewport,
        config,
        canvas: canvas.clone(),
        pending_scene,
        pending_texture,
        gpu,
        started: Instant::now(),
        running: Rc::new(RefCell::new(false)),
    }));
    // No stop path in this design; the loop runs for the life of the page
    let _running = frame::start_loop(frame_ctx);

    Ok(())
}
