//! Scroll-to-chapter mapping against the deck's scroll container.
//!
//! The listener republishes the quantized chapter index on every scroll
//! event, changed or not; subscribers treat repeats as no-ops. Unlike the
//! long-lived listeners elsewhere in the app, the binding keeps ownership of
//! its closure and detaches it on drop, so tearing down the deck cannot leak
//! the subscription.

use crate::core::chapters;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ScrollBinding {
    container: web::Element,
    listener: Closure<dyn FnMut()>,
}

impl ScrollBinding {
    /// Attach to the container and start publishing into `chapter`.
    ///
    /// Also publishes once immediately so a mid-document reload lands on the
    /// right chapter before the first scroll event arrives.
    pub fn bind(container: web::Element, chapter: Rc<Cell<usize>>) -> Self {
        chapter.set(current_chapter(&container));

        let container_events = container.clone();
        let listener = Closure::wrap(Box::new(move || {
            chapter.set(current_chapter(&container_events));
        }) as Box<dyn FnMut()>);
        let _ = container
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        Self {
            container,
            listener,
        }
    }

    /// Smooth-scroll so the given chapter fills the viewport.
    ///
    /// No bounds check against the chapter count: out-of-range requests run
    /// into the content edges and the DOM clamps them there.
    pub fn go_to_chapter(&self, index: usize) {
        let opts = web::ScrollToOptions::new();
        opts.set_top(chapters::scroll_top_for_chapter(
            index,
            dom::viewport_height(),
        ));
        opts.set_behavior(web::ScrollBehavior::Smooth);
        self.container.scroll_to_with_scroll_to_options(&opts);
    }
}

impl Drop for ScrollBinding {
    fn drop(&mut self) {
        let _ = self
            .container
            .remove_event_listener_with_callback("scroll", self.listener.as_ref().unchecked_ref());
    }
}

#[inline]
fn current_chapter(container: &web::Element) -> usize {
    chapters::chapter_for_offset(container.scroll_top() as f64, dom::viewport_height())
}
