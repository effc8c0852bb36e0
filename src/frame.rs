use crate::assets::{SceneSlot, TextureSlot};
use crate::core::{sync_time, FireflyEffect, FireflyField, OrbitCamera, PortalEffect, SceneConfig, Viewport};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one tick touches. One instance lives for the page's lifetime
/// inside the requestAnimationFrame closure.
pub struct FrameContext<'a> {
    pub portal: Rc<RefCell<PortalEffect>>,
    pub fireflies: Rc<RefCell<FireflyEffect>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub viewport: Rc<RefCell<Viewport>>,
    pub config: Rc<RefCell<SceneConfig>>,

    pub canvas: web::HtmlCanvasElement,
    pub pending_scene: SceneSlot,
    pub pending_texture: TextureSlot,
    pub gpu: Option<render::GpuState<'a>>,

    pub started: Instant,
    /// Cleared by [`stop`]; the loop declines to reschedule once false.
    pub running: Rc<RefCell<bool>>,
}

impl<'a> FrameContext<'a> {
    /// One tick: read the clock once, push the same elapsed value into both
    /// effects, advance camera damping, attach whatever assets arrived, and
    /// render. No frame-rate cap and no catch-up logic; the effective rate
    /// tracks the display refresh rate.
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        sync_time(
            &mut self.portal.borrow_mut(),
            &mut self.fireflies.borrow_mut(),
            elapsed,
        );

        self.camera.borrow_mut().update();

        let Some(gpu) = &mut self.gpu else {
            return;
        };

        // Assets arrive in either order; each is applied independently
        if let Some((scene, slots)) = self.pending_scene.borrow_mut().take() {
            gpu.attach_scene(&scene, &slots);
        }
        if let Some(tex) = self.pending_texture.borrow_mut().take() {
            gpu.set_baked_texture(tex.width, tex.height, &tex.rgba);
        }

        gpu.set_clear_color(self.config.borrow().clear_color);

        // Canvas backing size is ground truth; the resize handler already
        // synced it to CSS size * capped pixel ratio
        let w = self.canvas.width();
        let h = self.canvas.height();
        gpu.resize_if_needed(w, h);

        let view_proj = self
            .camera
            .borrow()
            .view_proj(self.viewport.borrow().aspect());
        if let Err(e) = gpu.render(
            view_proj,
            &self.portal.borrow(),
            &self.fireflies.borrow(),
        ) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    field: &FireflyField,
    clear_color: [f32; 3],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, field, clear_color).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Clear the stop flag so the loop ends after the current tick. There is no
/// teardown: GPU resources live as long as the page.
pub fn stop(running: &Rc<RefCell<bool>>) {
    *running.borrow_mut() = false;
}

/// Start the requestAnimationFrame loop and return the stop flag handle.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> Rc<RefCell<bool>> {
    let running = frame_ctx.borrow().running.clone();
    *running.borrow_mut() = true;

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if !*running_tick.borrow() {
            return;
        }
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    running
}
