use crate::constants::{DRUM_PADS_ID, KEYBOARD_ID};
use crate::core::{drum_pads, KeySlot, NoteId};
use crate::dom;
use crate::events;
use crate::Dispatcher;
use web_sys as web;

fn key_style(slot: &KeySlot) -> String {
    format!(
        "position:absolute;left:{:.4}%;bottom:{}%;width:{}%;height:{}%;\
         background-color:{};border:1px solid rgba(0,0,0,0.2);border-radius:0 0 8px 8px;\
         z-index:{};transform:translateX(-50%);cursor:pointer;",
        slot.offset,
        slot.bottom,
        slot.width,
        slot.height,
        slot.color,
        if slot.is_accidental() { 2 } else { 1 },
    )
}

fn label_style(color: &str) -> String {
    format!(
        "position:absolute;bottom:10px;width:100%;text-align:center;\
         color:{};font-weight:500;font-size:1.2rem;pointer-events:none;",
        color
    )
}

const HINT_STYLE: &str = "position:absolute;top:6px;width:100%;text-align:center;\
     font:11px monospace;opacity:0.6;pointer-events:none;";

/// Build one element per key slot inside `#xylophone`.
pub fn render_keyboard(document: &web::Document, dispatcher: &Dispatcher) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id(KEYBOARD_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", KEYBOARD_ID))?;
    container.set_inner_html("");

    let d = dispatcher.borrow();
    for slot in d.layout().slots() {
        let class = if slot.is_accidental() {
            format!("key accidental midi-{}", slot.midi)
        } else {
            format!("key natural midi-{}", slot.midi)
        };
        let key = dom::div(document, &class, &key_style(slot))?;

        let label = dom::div(document, "key-label", &label_style(slot.label_color))?;
        label.set_text_content(Some(slot.note.label));
        dom::append(&key, &label)?;

        if let Some(symbol) = d
            .bindings()
            .melodic
            .symbol_for_note(NoteId::Midi(slot.midi))
        {
            let hint = dom::div(
                document,
                "key-hint",
                &format!("{}color:{};", HINT_STYLE, slot.label_color),
            )?;
            hint.set_text_content(Some(symbol));
            dom::append(&key, &hint)?;
        }

        events::wire_key_pointerdown(&key, dispatcher.clone(), slot.midi);
        dom::append(&container, &key)?;
    }
    log::info!("[keys] rendered {} keys", d.layout().slots().len());
    Ok(())
}

/// Drum pads are optional; pages without `#drum-pads` only get key bindings.
pub fn render_pads(document: &web::Document, dispatcher: &Dispatcher) -> anyhow::Result<()> {
    let Some(container) = document.get_element_by_id(DRUM_PADS_ID) else {
        return Ok(());
    };
    container.set_inner_html("");

    let d = dispatcher.borrow();
    for pad in drum_pads() {
        let style = format!(
            "display:inline-block;margin:4px;padding:12px 16px;border-radius:8px;\
             background-color:{};cursor:pointer;user-select:none;",
            pad.color
        );
        let el = dom::div(document, &format!("pad pad-{}", pad.name), &style)?;
        let text = match d
            .bindings()
            .percussion
            .symbol_for_note(NoteId::Sample(pad.name))
        {
            Some(symbol) => format!("{} ({})", pad.label, symbol),
            None => pad.label.to_string(),
        };
        el.set_text_content(Some(&text));
        events::wire_pad_pointerdown(&el, dispatcher.clone(), pad.name);
        dom::append(&container, &el)?;
    }
    Ok(())
}
