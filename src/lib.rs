#![cfg(target_arch = "wasm32")]
use crate::core::decorations::DecorationSet;
use crate::core::market::{ChatMessage, Role};
use crate::events::PointerState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod scroll;
mod services;

use constants::DECOR_SEED;

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

/// Fill the ticker strip once the mock market call resolves.
fn wire_market_ticker(document: web::Document) {
    spawn_local(async move {
        let quotes = services::fetch_market_overview().await;
        overlay::render_ticker(&document, &quotes);
    });
}

/// Demo panel: one button that runs the canned analyst report against the
/// sample book, with a busy guard so double clicks don't stack runs.
fn wire_demo_panel(document: &web::Document) {
    let portfolio = Rc::new(RefCell::new(crate::core::market::demo_portfolio()));
    overlay::render_holdings(document, &portfolio.borrow());

    let busy = Rc::new(Cell::new(false));
    let doc = document.clone();
    dom::add_click_listener(document, "demo-run", move || {
        if busy.get() {
            return;
        }
        busy.set(true);
        overlay::set_demo_busy(&doc, true);

        let doc = doc.clone();
        let busy = busy.clone();
        let portfolio = portfolio.clone();
        spawn_local(async move {
            // Nudge the fake prices so repeated runs look alive
            services::update_portfolio_prices(&mut portfolio.borrow_mut());
            overlay::render_holdings(&doc, &portfolio.borrow());

            // Snapshot the book; no RefCell borrow may live across the await
            let book = portfolio.borrow().clone();
            let report = services::generate_action_report(&book).await;
            overlay::render_report(&doc, &report);
            overlay::set_demo_busy(&doc, false);
            busy.set(false);
        });
    });
}

fn wire_chat_panel(document: &web::Document) {
    let history: Rc<RefCell<Vec<ChatMessage>>> = Rc::new(RefCell::new(Vec::new()));
    let doc = document.clone();
    dom::add_click_listener(document, "chat-send", move || {
        let Some(input) = doc
            .get_element_by_id("chat-input")
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        else {
            return;
        };
        let message = input.value();
        if message.trim().is_empty() {
            return;
        }
        input.set_value("");

        overlay::push_chat_message(&doc, Role::User, &message);
        history.borrow_mut().push(ChatMessage {
            role: Role::User,
            text: message.clone(),
        });

        let doc = doc.clone();
        let history = history.clone();
        spawn_local(async move {
            let portfolio = crate::core::market::demo_portfolio();
            let snapshot = history.borrow().clone();
            let reply = services::chat_with_muse(&snapshot, &message, &portfolio).await;
            overlay::push_chat_message(&doc, Role::Model, &reply);
            history.borrow_mut().push(ChatMessage {
                role: Role::Model,
                text: reply,
            });
        });
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("muse-deck starting");

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
        .get_element_by_id("scene-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #scene-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    // Published chapter index, recomputed from scroll position on every event
    let chapter = Rc::new(Cell::new(0usize));

    // The deck degrades to a static intro scene if the scroll container is
    // missing; nothing below may assume it exists.
    let scroll_binding = match document.get_element_by_id("deck-root") {
        Some(container) => Some(Rc::new(scroll::ScrollBinding::bind(
            container,
            chapter.clone(),
        ))),
        None => {
            log::warn!("missing #deck-root; chapter mapping disabled");
            None
        }
    };

    if let Some(binding) = &scroll_binding {
        overlay::build_nav(&document, binding);
        events::wire_global_keydown(binding.clone(), chapter.clone());
    }

    let pointer = Rc::new(Cell::new(PointerState::default()));
    events::wire_pointermove(pointer.clone());

    wire_market_ticker(document.clone());
    wire_demo_panel(&document);
    wire_chat_panel(&document);

    let initial_eye = crate::core::chapters::target_for(chapter.get()).camera_eye;
    let gpu = frame::init_gpu(&canvas, initial_eye).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        chapter,
        pointer,
        document,
        canvas,
        DecorationSet::new(DECOR_SEED),
        gpu,
        scroll_binding,
    )));

    // Cleared on teardown; the pending rAF callback then stops rescheduling
    let running = Rc::new(Cell::new(true));
    frame::start_loop(frame_ctx, running);

    Ok(())
}
