use crate::audio::AudioBus;
use crate::dom;
use crate::input;
use heart_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub audio: Rc<AudioBus>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(wnd) = web::window() else {
            return;
        };
        let viewport = dom::viewport(&wnd);
        w.scene
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32, viewport);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some([x, y]) = input::pointer_canvas_ndc(&ev, &w.canvas) else {
            return;
        };
        let aspect = input::canvas_aspect(&w.canvas);
        let mut sounds = Vec::new();
        let hit = w
            .scene
            .borrow_mut()
            .on_pointer_down(x, y, aspect, &mut sounds);
        if hit {
            log::info!("[pointer] heart tapped");
            ev.prevent_default();
        }
        // Play inside the gesture so autoplay policy allows it
        w.audio.play_all(&mut sounds);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}
