use crate::constants::*;
use crate::dom;
use glam::Vec2;
use heart_core::{Celebration, RevealState, Scene};
use web_sys as web;

/// What the DOM currently shows; only differences get written.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Presented {
    reveal: RevealState,
    no_offset: Option<Vec2>,
    no_hidden: bool,
    confetti: bool,
    modal: bool,
}

impl Presented {
    fn from_scene(scene: &Scene) -> Self {
        Self {
            reveal: scene.reveal(),
            no_offset: scene.evasive().offset(),
            no_hidden: scene.evasive().is_hidden(),
            confetti: scene.celebration().confetti_visible(),
            modal: scene.celebration().modal_open(),
        }
    }
}

pub fn sync(document: &web::Document, scene: &Scene, shown: &mut Option<Presented>) {
    let next = Presented::from_scene(scene);
    if shown.as_ref() == Some(&next) {
        return;
    }
    let r = next.reveal;

    dom::set_class(document, LOADING_TEXT_ID, CLASS_HIDDEN, r.ready);
    dom::set_class(document, ENTER_BUTTON_ID, CLASS_HIDDEN, !r.ready);
    dom::set_class(document, LOADING_SCREEN_ID, CLASS_FADE_OUT, r.fading);
    dom::set_class(document, LOADING_SCREEN_ID, CLASS_HIDDEN, r.flying);

    // Shown first, revealed a couple of refreshes later so the CSS transition runs.
    for id in [QUESTION_ID, BUTTONS_ID] {
        dom::set_class(document, id, CLASS_HIDDEN, !r.content_shown);
        dom::set_class(document, id, CLASS_REVEALED, r.content_revealed);
    }

    dom::set_class(document, NO_BUTTON_ID, CLASS_HIDDEN, next.no_hidden);
    if let Some(offset) = next.no_offset {
        place_no_button(document, offset);
    }

    dom::set_class(document, CONFETTI_ID, CLASS_HIDDEN, !next.confetti);
    dom::set_class(document, MODAL_OVERLAY_ID, CLASS_HIDDEN, !next.modal);

    *shown = Some(next);
}

fn place_no_button(document: &web::Document, offset: Vec2) {
    dom::set_style(document, NO_BUTTON_ID, "position", "fixed");
    dom::set_style(
        document,
        NO_BUTTON_ID,
        "left",
        &format!("calc(50% + {:.0}px)", offset.x),
    );
    dom::set_style(
        document,
        NO_BUTTON_ID,
        "top",
        &format!("calc(50% + {:.0}px)", offset.y),
    );
    dom::set_style(document, NO_BUTTON_ID, "transform", "translate(-50%, -50%)");
    dom::set_style(document, NO_BUTTON_ID, "z-index", "1001");
}

/// Fill the confetti container once; visibility is toggled by [`sync`].
pub fn build_confetti(document: &web::Document, celebration: &Celebration) {
    let Some(container) = document.get_element_by_id(CONFETTI_ID) else {
        return;
    };
    container.set_inner_html("");
    for piece in celebration.confetti() {
        let Ok(img) = document.create_element("img") else {
            continue;
        };
        let src = HEART_IMAGES[piece.image % HEART_IMAGES.len()];
        _ = img.set_attribute("src", src);
        _ = img.set_attribute("alt", "");
        _ = img.set_attribute("class", CLASS_CONFETTI_HEART);
        let style = format!(
            "left:{:.1}%;width:{:.0}px;height:{:.0}px;animation-delay:{:.2}s;animation-duration:{:.2}s;--sway:{:.0}px;--start-rot:{:.0}deg",
            piece.left_percent,
            piece.size_px,
            piece.size_px,
            piece.delay_sec,
            piece.duration_sec,
            piece.sway_px,
            piece.rotation_deg
        );
        _ = img.set_attribute("style", &style);
        _ = container.append_child(&img);
    }
}

/// Static message shown instead of the scene when WebGPU is unavailable.
pub fn show_fallback(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(FALLBACK_ID) {
        el.set_text_content(Some(FALLBACK_TEXT));
        _ = el.class_list().remove_1(CLASS_HIDDEN);
    }
    dom::set_class(document, LOADING_SCREEN_ID, CLASS_HIDDEN, true);
    dom::set_class(document, CANVAS_ID, CLASS_HIDDEN, true);
}
