use crate::constants::{SHAKE_CLASS, SPAWN_EVENT};
use crate::core::{LaunchShape, NoteCategory, PlayEvent, SceneFeedbackSink, SinkError};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn category_name(category: NoteCategory) -> &'static str {
    match category {
        NoteCategory::Natural => "natural",
        NoteCategory::Accidental => "accidental",
        NoteCategory::Percussion => "percussion",
    }
}

fn shape_name(shape: LaunchShape) -> &'static str {
    match shape {
        LaunchShape::Cube => "cube",
        LaunchShape::Sphere => "sphere",
    }
}

fn set(obj: &js_sys::Object, key: &str, value: JsValue) -> Result<(), SinkError> {
    js_sys::Reflect::set(obj, &JsValue::from_str(key), &value)
        .map(|_| ())
        .map_err(|e| SinkError::Rejected(format!("detail.{}: {:?}", key, e)))
}

/// Hands visual feedback to the page's 3D renderer.
///
/// Spawns are published as `xylophone:spawn` CustomEvents on the window
/// (the renderer owns physics and meshes); shakes toggle a CSS class on the
/// stage element for the requested duration.
pub struct DomSceneSink {
    stage: Option<web::HtmlElement>,
}

impl DomSceneSink {
    pub fn new(stage: Option<web::HtmlElement>) -> Self {
        Self { stage }
    }
}

impl SceneFeedbackSink for DomSceneSink {
    fn spawn(&mut self, event: &PlayEvent) -> Result<(), SinkError> {
        let window = web::window().ok_or(SinkError::Unavailable("window"))?;
        let detail = js_sys::Object::new();
        set(&detail, "note", JsValue::from_str(&event.note.to_string()))?;
        set(&detail, "x", JsValue::from_f64(event.position.x as f64))?;
        set(&detail, "y", JsValue::from_f64(event.position.y as f64))?;
        set(&detail, "z", JsValue::from_f64(event.position.z as f64))?;
        set(&detail, "color", JsValue::from_str(event.color))?;
        set(
            &detail,
            "category",
            JsValue::from_str(category_name(event.category)),
        )?;
        set(&detail, "shape", JsValue::from_str(shape_name(event.shape)))?;
        set(&detail, "velocity", JsValue::from_f64(event.velocity as f64))?;

        let init = web::CustomEventInit::new();
        init.set_detail(&detail);
        let ev = web::CustomEvent::new_with_event_init_dict(SPAWN_EVENT, &init)
            .map_err(|e| SinkError::Rejected(format!("CustomEvent: {:?}", e)))?;
        window
            .dispatch_event(&ev)
            .map_err(|e| SinkError::Rejected(format!("dispatch_event: {:?}", e)))?;
        Ok(())
    }

    fn shake(&mut self, duration: Duration) -> Result<(), SinkError> {
        let stage = self.stage.as_ref().ok_or(SinkError::Unavailable("stage"))?;
        let window = web::window().ok_or(SinkError::Unavailable("window"))?;
        _ = stage.class_list().add_1(SHAKE_CLASS);
        let el = stage.clone();
        let clear = Closure::once_into_js(move || {
            _ = el.class_list().remove_1(SHAKE_CLASS);
        });
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                clear.unchecked_ref(),
                duration.as_millis() as i32,
            )
            .map_err(|e| SinkError::Rejected(format!("set_timeout: {:?}", e)))?;
        Ok(())
    }
}
