use crate::constants::{HIDDEN_CLASS, OVERLAY_BUTTON_ID, OVERLAY_ID, OVERLAY_MESSAGE_ID};
use crate::core::WarmUpControl;
use web_sys as web;

const START_LABEL: &str = "Click to Enable Audio";
const LOADING_LABEL: &str = "Loading...";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Flip the start button between its idle and loading states.
pub fn set_loading(document: &web::Document, loading: bool) {
    if let Some(button) = document.get_element_by_id(OVERLAY_BUTTON_ID) {
        if loading {
            button.set_text_content(Some(LOADING_LABEL));
            _ = button.set_attribute("disabled", "");
            _ = button.set_attribute("style", "cursor:wait");
        } else {
            button.set_text_content(Some(START_LABEL));
            _ = button.remove_attribute("disabled");
            _ = button.set_attribute("style", "cursor:pointer");
        }
    }
}

pub fn show_message(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(OVERLAY_MESSAGE_ID) {
        el.set_text_content(Some(message));
    }
}

/// Put the overlay and its button in the state the dispatcher's readiness asks for.
pub fn sync(document: &web::Document, control: WarmUpControl) {
    match control {
        WarmUpControl::Offer => {
            set_loading(document, false);
            show(document);
        }
        WarmUpControl::Busy => {
            set_loading(document, true);
            show(document);
        }
        WarmUpControl::Hidden => hide(document),
    }
}
