use crate::constants::{LAB_CANVAS_SIZE, SHARE_COPIED_PREFIX};
use crate::core::{
    decode_query, share_link, share_path, KeyAction, ParamPatch, Side, SideLabel, LAB_SLIDERS,
};
use crate::dom;
use crate::events;
use crate::panel::Panel;
use crate::view::SimView;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

type LabSide = Rc<RefCell<Side>>;

/// Single-view camera lab: canvas, parameter panel, reset and share.
pub fn mount(document: &web::Document, root: &web::Element) -> anyhow::Result<()> {
    let viewport = Vec2::new(LAB_CANVAS_SIZE.0 as f32, LAB_CANVAS_SIZE.1 as f32);
    let side: LabSide = Rc::new(RefCell::new(Side::new(SideLabel::A, viewport)));

    let search = dom::location_search();
    let from_url = decode_query(&search);
    side.borrow_mut().hydrate_from(&ParamPatch::from(from_url));
    log::info!("[lab] hydrated from {:?}: {:?}", search, from_url);

    let layout = dom::append(document, root, "div", "lab-layout", None)?;
    let view = SimView::mount(
        document,
        &layout,
        side.clone(),
        LAB_CANVAS_SIZE,
        "Camera Follow Lab",
    )?;
    dom::append(
        document,
        &view.card,
        "p",
        "lab-help",
        Some("Move your mouse to create velocity. Click canvas to add screen shake."),
    )?;

    let aside = dom::append(document, &layout, "aside", "card", None)?;
    dom::append(document, &aside, "h2", "panel-title", Some("Parameters"))?;
    let controls = dom::append(document, &aside, "div", "panel-controls", None)?;
    let view_for_panel = view.clone();
    Panel::mount(
        document,
        &controls,
        side.clone(),
        &LAB_SLIDERS,
        true,
        Rc::new(move || view_for_panel.params_changed()),
    )?;

    let actions = dom::append(document, &aside, "div", "panel-actions", None)?;
    let reset_button =
        dom::append(document, &actions, "button", "reset", Some("Reset to defaults"))?;
    let share_button =
        dom::append(document, &actions, "button", "share", Some("Copy Share URL"))?;
    let share_text = dom::append(document, &actions, "p", "share-path", None)?;

    share_text.set_text_content(Some(&share_path(&side.borrow().store.params())));
    let share_text_obs = share_text.clone();
    side.borrow_mut()
        .store
        .subscribe(move |p| share_text_obs.set_text_content(Some(&share_path(p))));

    let reset = {
        let side = side.clone();
        let view = view.clone();
        move || {
            side.borrow_mut().reset();
            sync_url(&side);
            view.params_changed();
        }
    };
    let share = {
        let side = side.clone();
        move || copy_share_link(&side)
    };

    dom::listen(&reset_button, "click", reset.clone());
    dom::listen(&share_button, "click", share.clone());

    let view_keys = view.clone();
    events::wire_lab_keydown(move |action| match action {
        KeyAction::TogglePause => view_keys.toggle_running(),
        KeyAction::ResetDefaults => reset(),
        KeyAction::Share => share(),
    });

    log::info!("[lab] mounted");
    Ok(())
}

fn sync_url(side: &LabSide) {
    let path = share_path(&side.borrow().store.params());
    dom::replace_url(&path);
}

/// Update the address bar, copy the absolute link and tell the user.
fn copy_share_link(side: &LabSide) {
    sync_url(side);
    let params = side.borrow().store.params();
    let link = share_link(&dom::location_origin().unwrap_or_default(), &params);
    log::info!("[share] {}", link);

    if let Some(w) = web::window() {
        let promise = w.navigator().clipboard().write_text(&link);
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[share] clipboard write failed: {:?}", e);
            }
        });
    }
    dom::alert(&format!("{}{}", SHARE_COPIED_PREFIX, link));
}
