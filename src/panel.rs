use crate::core::{
    format_value, CameraParams, Easing, ParamKey, ParamUpdate, SliderSpec, EASING_NOTE,
};
use crate::dom;
use crate::view::SideAccess;
use std::rc::Rc;
use web_sys as web;

struct SliderWidget {
    spec: SliderSpec,
    input: web::HtmlInputElement,
    readout: web::Element,
}

/// Parameter controls for one side. Widgets write into the side's store;
/// a store subscription keeps them in sync with changes from elsewhere.
pub struct Panel {
    sliders: Vec<SliderWidget>,
    easing: Option<(web::HtmlSelectElement, web::Element)>,
}

impl Panel {
    pub fn mount<S: SideAccess>(
        document: &web::Document,
        parent: &web::Element,
        side: S,
        specs: &[SliderSpec],
        with_easing: bool,
        on_change: Rc<dyn Fn()>,
    ) -> anyhow::Result<Rc<Self>> {
        let mut sliders = Vec::with_capacity(specs.len());
        for spec in specs {
            let widget = build_slider(document, parent, *spec)?;
            let input = widget.input.clone();
            let spec = widget.spec;
            let side = side.clone();
            let on_change = on_change.clone();
            dom::listen(&widget.input, "input", move || {
                let value = input.value_as_number() as f32;
                if let Some(update) = spec.update(value) {
                    side.with_side(|s| s.set_param(update));
                    on_change();
                }
            });
            sliders.push(widget);
        }

        let easing = if with_easing {
            let (select, readout) = build_easing_select(document, parent)?;
            let select_for_change = select.clone();
            let side = side.clone();
            let on_change = on_change.clone();
            dom::listen(&select, "change", move || {
                match Easing::from_name(&select_for_change.value()) {
                    Some(e) => {
                        side.with_side(|s| s.set_param(ParamUpdate::Easing(e)));
                        on_change();
                    }
                    None => log::warn!("[panel] unknown easing {:?}", select_for_change.value()),
                }
            });
            Some((select, readout))
        } else {
            None
        };

        let panel = Rc::new(Self { sliders, easing });
        let initial = side.with_side(|s| s.store.params());
        panel.refresh(&initial);

        let panel_obs = panel.clone();
        side.with_side(|s| s.store.subscribe(move |p| panel_obs.refresh(p)));
        Ok(panel)
    }

    pub fn refresh(&self, params: &CameraParams) {
        for w in &self.sliders {
            let value = match w.spec.key {
                ParamKey::FollowSpeed => params.follow_speed,
                ParamKey::Lag => params.lag,
                ParamKey::Shake => params.shake,
                ParamKey::Easing => continue,
            };
            w.input.set_value_as_number(value as f64);
            w.readout.set_text_content(Some(&format_value(value)));
        }
        if let Some((select, readout)) = &self.easing {
            select.set_value(params.easing.as_str());
            readout.set_text_content(Some(params.easing.as_str()));
        }
    }
}

fn build_slider(
    document: &web::Document,
    parent: &web::Element,
    spec: SliderSpec,
) -> anyhow::Result<SliderWidget> {
    let label = dom::append(document, parent, "label", "slider", None)?;
    let row = dom::append(document, &label, "div", "slider-row", None)?;
    dom::append(document, &row, "span", "slider-label", Some(spec.label))?;
    let readout = dom::append(document, &row, "span", "slider-value", None)?;

    let input: web::HtmlInputElement = dom::append_as(document, &label, "input", "slider-input")?;
    input.set_type("range");
    input.set_min(&spec.min.to_string());
    input.set_max(&spec.max.to_string());
    input.set_step(&spec.step.to_string());

    if let Some(note) = spec.note {
        dom::append(document, &label, "p", "slider-note", Some(note))?;
    }
    Ok(SliderWidget {
        spec,
        input,
        readout,
    })
}

fn build_easing_select(
    document: &web::Document,
    parent: &web::Element,
) -> anyhow::Result<(web::HtmlSelectElement, web::Element)> {
    let label = dom::append(document, parent, "label", "slider", None)?;
    let row = dom::append(document, &label, "div", "slider-row", None)?;
    dom::append(document, &row, "span", "slider-label", Some("Easing"))?;
    let readout = dom::append(document, &row, "span", "slider-value", None)?;

    let select: web::HtmlSelectElement =
        dom::append_as(document, &label, "select", "easing-select")?;
    for easing in Easing::ALL {
        let option = dom::append(document, &select, "option", "", Some(easing.as_str()))?;
        _ = option.set_attribute("value", easing.as_str());
    }
    dom::append(document, &label, "p", "slider-note", Some(EASING_NOTE))?;
    Ok((select, readout))
}
