//! Pointer and keyboard wiring for the deck.

use crate::core::chapters;
use crate::scroll::ScrollBinding;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Normalized device pointer, both axes in [-1, 1] with +y up. Feeds the
/// camera parallax.
#[derive(Clone, Copy, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

pub fn wire_pointermove(pointer: Rc<Cell<PointerState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(w) = web::window() {
            let width = w
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(1.0)
                .max(1.0);
            let height = w
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(1.0)
                .max(1.0);
            let x = (ev.client_x() as f64 / width) * 2.0 - 1.0;
            let y = 1.0 - (ev.client_y() as f64 / height) * 2.0;
            pointer.set(PointerState {
                x: x as f32,
                y: y as f32,
            });
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    binding: &ScrollBinding,
    chapter: &Rc<Cell<usize>>,
) {
    let key = ev.key();
    let current = chapter.get();
    let destination = match key.as_str() {
        "ArrowDown" | "PageDown" | " " => Some(chapters::next_chapter(current)),
        "ArrowUp" | "PageUp" => Some(chapters::prev_chapter(current)),
        "Home" => Some(0),
        "End" => Some(chapters::last_chapter()),
        k => k.chars().next().and_then(chapters::chapter_for_digit),
    };
    if let Some(dest) = destination {
        ev.prevent_default();
        binding.go_to_chapter(dest);
    }
}

pub fn wire_global_keydown(binding: Rc<ScrollBinding>, chapter: Rc<Cell<usize>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &binding, &chapter);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
