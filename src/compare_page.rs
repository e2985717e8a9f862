use crate::constants::{COMPARE_CANVAS_SIZE, INVALID_URL_MESSAGE};
use crate::core::{Comparison, SideLabel, COMPARE_SLIDERS};
use crate::dom;
use crate::panel::Panel;
use crate::view::{ComparedSide, SimView};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Two independent labs side by side; a pasted share link loads into A.
pub fn mount(document: &web::Document, root: &web::Element) -> anyhow::Result<()> {
    let viewport = Vec2::new(COMPARE_CANVAS_SIZE.0 as f32, COMPARE_CANVAS_SIZE.1 as f32);
    let comparison = Rc::new(RefCell::new(Comparison::new(viewport)));

    dom::append(document, root, "h1", "compare-title", Some("Compare Presets"))?;
    dom::append(
        document,
        root,
        "p",
        "compare-intro",
        Some(
            "Compare two sets of parameters side by side. \
             Load your custom preset into A or adjust both manually.",
        ),
    )?;
    let grid = dom::append(document, root, "div", "compare-grid", None)?;

    for label in [SideLabel::A, SideLabel::B] {
        mount_side(document, &grid, comparison.clone(), label)?;
    }
    log::info!("[compare] mounted");
    Ok(())
}

fn mount_side(
    document: &web::Document,
    grid: &web::Element,
    comparison: Rc<RefCell<Comparison>>,
    label: SideLabel,
) -> anyhow::Result<()> {
    let class = match label {
        SideLabel::A => "preset preset-a",
        SideLabel::B => "preset preset-b",
    };
    let section = dom::append(document, grid, "div", class, None)?;
    dom::append(document, &section, "h2", "preset-title", Some(label.title()))?;

    let side = ComparedSide {
        comparison: comparison.clone(),
        label,
    };
    let view = SimView::mount(
        document,
        &section,
        side.clone(),
        COMPARE_CANVAS_SIZE,
        "Camera Follow Lab",
    )?;

    if label == SideLabel::A {
        let import = dom::append(document, &section, "div", "preset-import", None)?;
        let input: web::HtmlInputElement =
            dom::append_as(document, &import, "input", "preset-url")?;
        input.set_type("text");
        input.set_placeholder("Paste Camera Lab URL here...");
        let button =
            dom::append(document, &import, "button", "preset-load", Some("Load Preset A"))?;

        let view_a = view.clone();
        dom::listen(&button, "click", move || {
            let link = input.value();
            let result = comparison.borrow_mut().import_into_a(&link);
            match result {
                Ok(params) => {
                    log::info!("[compare] loaded preset A: {:?}", params);
                    view_a.params_changed();
                }
                Err(e) => {
                    log::warn!("[compare] import failed: {}", e);
                    dom::alert(INVALID_URL_MESSAGE);
                }
            }
        });
    }

    let controls = dom::append(document, &section, "div", "preset-controls", None)?;
    let view_for_panel = view.clone();
    Panel::mount(
        document,
        &controls,
        side,
        &COMPARE_SLIDERS,
        false,
        Rc::new(move || view_for_panel.params_changed()),
    )?;
    Ok(())
}
