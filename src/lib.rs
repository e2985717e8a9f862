#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod compare_page;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod lab_page;
mod panel;
mod render;
mod view;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("camera-lab starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

// The host page decides which view to show by providing its mount point.
fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Some(root) = document.get_element_by_id(constants::LAB_ROOT_ID) {
        return lab_page::mount(&document, &root);
    }
    if let Some(root) = document.get_element_by_id(constants::COMPARE_ROOT_ID) {
        return compare_page::mount(&document, &root);
    }
    Err(anyhow::anyhow!(
        "missing #{} or #{}",
        constants::LAB_ROOT_ID,
        constants::COMPARE_ROOT_ID
    ))
}
