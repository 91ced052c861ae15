use crate::Dispatcher;
use wasm_bindgen::JsCast;
use web_sys as web;

// Auto-repeat and shortcut chords are not instrument input
#[inline]
fn is_instrument_press(ev: &web::KeyboardEvent) -> bool {
    !(ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key())
}

fn toggle_fullscreen(stage: Option<&web::HtmlElement>) {
    if let Some(doc) = crate::dom::window_document() {
        if doc.fullscreen_element().is_some() {
            doc.exit_fullscreen();
        } else if let Some(stage) = stage {
            _ = stage.request_fullscreen();
        }
    }
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    dispatcher: &Dispatcher,
    stage: Option<&web::HtmlElement>,
) {
    if !is_instrument_press(ev) {
        return;
    }
    let code = ev.code();
    match code.as_str() {
        "Enter" => {
            toggle_fullscreen(stage);
            ev.prevent_default();
            return;
        }
        "Escape" => {
            if let Some(doc) = crate::dom::window_document() {
                doc.exit_fullscreen();
            }
            return;
        }
        _ => {}
    }

    let bound = dispatcher.borrow().bindings().symbol_for(&code).is_some();
    if let Some(played) = dispatcher.borrow_mut().on_key_trigger(&code) {
        log::debug!("[keys] {} -> {}", code, played.note);
    }
    if bound {
        // keep bound keys like Slash or Comma from reaching browser shortcuts
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(dispatcher: Dispatcher, stage: Option<web::HtmlElement>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &dispatcher, stage.as_ref());
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
