use crate::overlay::{self, Presented};
use crate::render::{self, InstanceData};
use heart_core::{CameraPose, Scene};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Long pauses (background tab) should not fast-forward the scene.
const MAX_FRAME_DT_SEC: f32 = 0.1;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
    pub presented: Option<Presented>,
    pub instances: Vec<InstanceData>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        scene: Rc<RefCell<Scene>>,
        canvas: web::HtmlCanvasElement,
        document: web::Document,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        Self {
            scene,
            canvas,
            document,
            gpu,
            last_instant: Instant::now(),
            presented: None,
            instances: Vec::new(),
        }
    }

    /// Returns false once the scene has been disposed and the loop should stop.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let mut scene = self.scene.borrow_mut();
        if scene.is_disposed() {
            return false;
        }
        scene.update(dt_sec);
        overlay::sync(&self.document, &scene, &mut self.presented);
        render::collect_instances(&scene, &mut self.instances);
        let camera = scene.camera();
        drop(scene);

        if let Some(g) = &mut self.gpu {
            g.set_camera(camera);
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(dt_sec, &self.instances) {
                log::error!("render error: {:?}", e);
            }
        }
        true
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    camera: CameraPose,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, camera).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow_mut().frame() {
            log::info!("[frame] scene disposed, stopping loop");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
