use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Create an element, set its class and optional text, append to `parent`.
pub fn append(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if let Some(t) = text {
        el.set_text_content(Some(t));
    }
    parent
        .append_child(&el)
        .map_err(|e| anyhow!("append <{}>: {:?}", tag, e))?;
    Ok(el)
}

pub fn append_as<T: JsCast>(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
) -> anyhow::Result<T> {
    append(document, parent, tag, class, None)?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("<{}> has unexpected type: {:?}", tag, e))
}

/// Attach `handler` to `event` on `target` for the page lifetime.
#[inline]
pub fn listen(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Blocking notification.
pub fn alert(message: &str) {
    if let Some(w) = web::window() {
        _ = w.alert_with_message(message);
    }
}

pub fn location_origin() -> Option<String> {
    web::window().and_then(|w| w.location().origin().ok())
}

pub fn location_search() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Rewrite the address bar without navigating.
pub fn replace_url(path: &str) {
    if let Some(w) = web::window() {
        if let Ok(history) = w.history() {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
                log::warn!("[share] history.replaceState failed: {:?}", e);
            }
        }
    }
}
