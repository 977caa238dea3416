//! Per-frame tick: read the published chapter, ease the shared visual state
//! toward its target, advance decorations, and hand everything to the
//! renderer.

use crate::core::chapters;
use crate::core::choreography::{CameraRig, VisualState};
use crate::core::decorations::{DecorationSet, Sprite};
use crate::events::PointerState;
use crate::overlay;
use crate::render;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub chapter: Rc<Cell<usize>>,
    pub pointer: Rc<Cell<PointerState>>,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,

    // Single-writer interpolation state, owned by this loop
    pub visual: VisualState,
    pub camera: CameraRig,
    pub decorations: DecorationSet,
    pub core_phase: f32,

    pub gpu: Option<render::GpuState<'a>>,

    // Owned here so the scroll listener lives exactly as long as the loop;
    // dropping the context detaches it.
    pub scroll: Option<Rc<crate::scroll::ScrollBinding>>,

    pub last_instant: Instant,
    pub shown_chapter: Option<usize>,
    sprites: Vec<Sprite>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        chapter: Rc<Cell<usize>>,
        pointer: Rc<Cell<PointerState>>,
        document: web::Document,
        canvas: web::HtmlCanvasElement,
        decorations: DecorationSet,
        gpu: Option<render::GpuState<'a>>,
        scroll: Option<Rc<crate::scroll::ScrollBinding>>,
    ) -> Self {
        let initial = chapters::target_for(chapter.get());
        Self {
            chapter,
            pointer,
            document,
            canvas,
            visual: VisualState::from_target(initial),
            camera: CameraRig::new(initial.camera_eye),
            decorations,
            core_phase: 0.0,
            gpu,
            scroll,
            last_instant: Instant::now(),
            shown_chapter: None,
            sprites: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        // The tick only ever sees the most recently published index; scroll
        // events that raced in between simply retarget earlier.
        let chapter = self.chapter.get();
        let target = chapters::target_for(chapter);

        self.visual.advance(target, dt_sec);
        self.core_phase += self.visual.anim_speed * dt_sec;

        let p = self.pointer.get();
        self.camera
            .advance(target.camera_eye, Vec2::new(p.x, p.y), dt_sec);

        self.decorations.update(chapter, dt_sec);
        self.sprites.clear();
        self.decorations.emit(&mut self.sprites);

        if self.shown_chapter != Some(chapter) {
            overlay::set_active_dot(&self.document, chapter);
            self.shown_chapter = Some(chapter);
        }

        if let Some(g) = &mut self.gpu {
            g.set_camera(self.camera.eye, self.camera.look_target());
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(
                dt_sec,
                &self.visual,
                self.core_phase,
                &self.sprites,
                chapters::star_speed_for(chapter),
            ) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    camera_eye: glam::Vec3,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, camera_eye).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive the frame loop from requestAnimationFrame until `running` clears.
///
/// Teardown flips the flag; the pending callback then returns without
/// rescheduling, which is the whole cancellation story for the tick side.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>, running: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
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
}
