use crate::Dispatcher;
use wasm_bindgen::JsCast;
use web_sys as web;

fn wire_pointerdown(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        handler();
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_key_pointerdown(el: &web::Element, dispatcher: Dispatcher, midi: u8) {
    wire_pointerdown(el, move || {
        if let Some(ev) = dispatcher.borrow_mut().on_pointer_trigger(midi) {
            log::debug!("[pointer] played {}", ev.note);
        }
    });
}

pub fn wire_pad_pointerdown(el: &web::Element, dispatcher: Dispatcher, name: &'static str) {
    wire_pointerdown(el, move || {
        if let Some(ev) = dispatcher.borrow_mut().on_pad_trigger(name) {
            log::debug!("[pointer] played {}", ev.note);
        }
    });
}
