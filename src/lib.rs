#![cfg(target_arch = "wasm32")]
use crate::audio::WebAudioSink;
use crate::constants::{OVERLAY_BUTTON_ID, STAGE_ID};
use crate::core::{
    accidental_notes, natural_notes, validate as validate_catalog, DispatcherConfig,
    InputDispatcher, KeyBindings, KeyboardLayout, LoadTicket, WarmUpControl, CONTAINER_WIDTH,
};
use crate::scene::DomSceneSink;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
pub mod core;
mod dom;
mod events;
mod keys;
mod overlay;
mod scene;

/// The session's single dispatcher, shared by every DOM listener.
pub(crate) type Dispatcher = Rc<RefCell<InputDispatcher<WebAudioSink, DomSceneSink>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("xylophone starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    validate_catalog(natural_notes(), accidental_notes())?;
    let layout = KeyboardLayout::resolve(natural_notes(), accidental_notes(), CONTAINER_WIDTH)?;
    let bindings = KeyBindings::standard()?;
    let stage = dom::html_element_by_id(&document, STAGE_ID);

    let dispatcher: Dispatcher = Rc::new(RefCell::new(InputDispatcher::new(
        layout,
        bindings,
        DispatcherConfig::default(),
        WebAudioSink::new(),
        DomSceneSink::new(stage.clone()),
    )));

    keys::render_keyboard(&document, &dispatcher)?;
    keys::render_pads(&document, &dispatcher)?;
    events::wire_global_keydown(dispatcher.clone(), stage);

    let for_button = dispatcher.clone();
    dom::add_click_listener(&document, OVERLAY_BUTTON_ID, move || {
        warm_up(for_button.clone());
    });
    wire_teardown(dispatcher.clone());

    overlay::sync(&document, dispatcher_control(&dispatcher));
    Ok(())
}

// Start the one-shot engine load; the button is the only retry path.
fn warm_up(dispatcher: Dispatcher) {
    let Some(ticket) = dispatcher.borrow_mut().begin_load() else {
        log::debug!("[load] warm-up already in progress or done");
        return;
    };
    if let Some(doc) = dom::window_document() {
        overlay::sync(&doc, dispatcher_control(&dispatcher));
        overlay::show_message(&doc, "");
    }
    spawn_local(async move {
        let result = audio::open_context().await;
        finish_load(&dispatcher, ticket, result);
    });
}

fn finish_load(
    dispatcher: &Dispatcher,
    ticket: LoadTicket,
    result: anyhow::Result<web::AudioContext>,
) {
    let mut d = dispatcher.borrow_mut();
    let doc = dom::window_document();
    if !d.is_current_load(ticket) {
        // session ended while loading; a newer load may be in flight
        log::debug!("[load] dropping stale audio context");
        if let Ok(ctx) = result {
            _ = ctx.close();
        }
    } else {
        let attached = result.and_then(|ctx| {
            d.sound_mut()
                .attach(ctx)
                .map_err(|e| anyhow::anyhow!("{}", e))
        });
        match attached {
            Ok(()) => {
                if d.on_load_complete(ticket) {
                    d.sound().beep();
                }
            }
            Err(e) => {
                log::error!("[load] audio setup failed: {:?}", e);
                if d.on_load_failed(ticket) {
                    if let Some(doc) = &doc {
                        overlay::show_message(doc, &format!("Audio unavailable: {}", e));
                    }
                }
            }
        }
    }
    if let Some(doc) = &doc {
        overlay::sync(doc, d.readiness().warm_up_control());
    }
}

fn dispatcher_control(dispatcher: &Dispatcher) -> WarmUpControl {
    dispatcher.borrow().readiness().warm_up_control()
}

fn wire_teardown(dispatcher: Dispatcher) {
    // pagehide also fires when the page enters the back/forward cache; the
    // overlay is reset here so a restored page can warm up again
    let closure = Closure::wrap(Box::new(move || {
        let mut d = dispatcher.borrow_mut();
        d.teardown();
        d.sound_mut().close();
        if let Some(doc) = dom::window_document() {
            overlay::show_message(&doc, "");
            overlay::sync(&doc, d.readiness().warm_up_control());
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
