use crate::core::{key_action, KeyAction};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Keys typed into form controls belong to the control.
fn targets_form_control(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| {
            matches!(
                el.tag_name().to_ascii_uppercase().as_str(),
                "INPUT" | "SELECT" | "TEXTAREA" | "BUTTON"
            )
        })
        .unwrap_or(false)
}

pub fn wire_lab_keydown(handler: impl Fn(KeyAction) + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || targets_form_control(&ev) {
            return;
        }
        if let Some(action) = key_action(&ev.key()) {
            log::info!("[keys] {:?}", action);
            handler(action);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
