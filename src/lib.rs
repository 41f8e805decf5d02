#![cfg(target_arch = "wasm32")]
use heart_core::{RevealMode, Scene, SceneConfig, SoundRequest};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use constants::*;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// `<canvas data-reveal="clouds">` selects the cloud-parting opening.
fn reveal_mode(canvas: &web::HtmlCanvasElement) -> RevealMode {
    match canvas.get_attribute("data-reveal").as_deref() {
        Some("clouds") => RevealMode::CloudParting,
        _ => RevealMode::Flight,
    }
}

// Runs an interaction against the scene and plays whatever it asked for.
fn with_sounds(
    scene: &Rc<RefCell<Scene>>,
    audio: &audio::AudioBus,
    f: impl FnOnce(&mut Scene, &mut Vec<SoundRequest>),
) {
    let mut sounds = Vec::new();
    f(&mut scene.borrow_mut(), &mut sounds);
    audio.play_all(&mut sounds);
}

fn wire_buttons(document: &web::Document, scene: &Rc<RefCell<Scene>>, audio: &Rc<audio::AudioBus>) {
    let (s, a) = (scene.clone(), audio.clone());
    dom::add_click_listener(document, ENTER_BUTTON_ID, move || {
        with_sounds(&s, &a, |scene, sounds| {
            scene.on_enter(sounds);
        });
    });

    let (s, a) = (scene.clone(), audio.clone());
    dom::add_click_listener(document, YES_BUTTON_ID, move || {
        with_sounds(&s, &a, |scene, sounds| {
            scene.on_accept(sounds);
        });
    });

    let (s, a) = (scene.clone(), audio.clone());
    dom::add_click_listener(document, NO_BUTTON_ID, move || {
        with_sounds(&s, &a, |scene, sounds| {
            if let Some(p) = scene.on_reject(sounds) {
                log::debug!("[no] move {} radius {:.0}", p.moves, p.radius);
            }
        });
    });

    let s = scene.clone();
    dom::add_click_listener(document, MODAL_CLOSE_ID, move || {
        s.borrow_mut().close_modal();
    });
}

fn wire_pagehide(scene: &Rc<RefCell<Scene>>) {
    let s = scene.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        s.borrow_mut().on_page_hide(ev.persisted());
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");

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

    if !dom::has_webgpu(&window) {
        log::warn!("WebGPU not available");
        overlay::show_fallback(&document);
        return Ok(());
    }

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let config = SceneConfig::for_viewport(dom::viewport(&window)).with_mode(reveal_mode(&canvas));
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let scene = Scene::new(config, seed).map_err(|e| anyhow::anyhow!("scene: {}", e))?;
    let scene = Rc::new(RefCell::new(scene));
    let audio = Rc::new(audio::AudioBus::new());

    overlay::build_confetti(&document, scene.borrow().celebration());
    wire_buttons(&document, &scene, &audio);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        audio: audio.clone(),
    });
    wire_pagehide(&scene);

    let camera = scene.borrow().camera();
    let gpu = frame::init_gpu(&canvas, camera).await;
    if gpu.is_none() {
        overlay::show_fallback(&document);
        scene.borrow_mut().dispose();
        return Ok(());
    }
    // Sprites are procedural, so a working device is all the scene waits on.
    scene.borrow_mut().on_assets_ready();

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene, canvas, document, gpu,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
