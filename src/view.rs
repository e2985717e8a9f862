use crate::core::{Comparison, LoopState, Side, SideLabel};
use crate::dom;
use crate::events;
use crate::frame::{FrameContext, FrameLoop};
use crate::render::SceneRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Scoped access to one store + simulation pair, wherever it is owned.
pub trait SideAccess: Clone + 'static {
    fn with_side<R>(&self, f: impl FnOnce(&mut Side) -> R) -> R;
}

impl SideAccess for Rc<RefCell<Side>> {
    fn with_side<R>(&self, f: impl FnOnce(&mut Side) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// One side of a shared `Comparison`.
#[derive(Clone)]
pub struct ComparedSide {
    pub comparison: Rc<RefCell<Comparison>>,
    pub label: SideLabel,
}

impl SideAccess for ComparedSide {
    fn with_side<R>(&self, f: impl FnOnce(&mut Side) -> R) -> R {
        f(self.comparison.borrow_mut().side_mut(self.label))
    }
}

/// A canvas bound to one side, with its frame loop and pause button.
pub struct SimView<S: SideAccess> {
    pub side: S,
    pub card: web::Element,
    frame_loop: FrameLoop<S>,
    toggle_button: web::HtmlElement,
}

impl<S: SideAccess> SimView<S> {
    /// Build header, pause button and canvas under `parent`, wire pointer
    /// input and start the loop.
    pub fn mount(
        document: &web::Document,
        parent: &web::Element,
        side: S,
        canvas_size: (u32, u32),
        title: &str,
    ) -> anyhow::Result<Rc<Self>> {
        let card = dom::append(document, parent, "div", "card", None)?;
        let header = dom::append(document, &card, "div", "card-header", None)?;
        dom::append(document, &header, "h1", "card-title", Some(title))?;
        let toggle_button: web::HtmlElement =
            dom::append_as(document, &header, "button", "toggle-running")?;

        let canvas: web::HtmlCanvasElement =
            dom::append_as(document, &card, "canvas", "lab-canvas")?;
        canvas.set_width(canvas_size.0);
        canvas.set_height(canvas_size.1);
        _ = canvas.set_attribute("aria-label", crate::constants::CANVAS_HINT);
        _ = canvas.set_attribute("title", crate::constants::CANVAS_HINT);

        let renderer = SceneRenderer::new(&canvas)?;
        let frame_loop = FrameLoop::new(FrameContext::new(side.clone(), renderer));

        let view = Rc::new(Self {
            side: side.clone(),
            card,
            frame_loop,
            toggle_button,
        });

        events::wire_canvas_pointer(&canvas, side);
        let view_toggle = view.clone();
        dom::listen(&view.toggle_button, "click", move || view_toggle.toggle_running());

        view.refresh_toggle_label();
        view.frame_loop.schedule();
        Ok(view)
    }

    pub fn loop_state(&self) -> LoopState {
        self.side.with_side(|s| s.sim.loop_state())
    }

    /// Pause withdraws the next frame; resume restarts from center.
    pub fn toggle_running(&self) {
        let state = self.side.with_side(|s| s.sim.toggle());
        match state {
            LoopState::Running => {
                self.frame_loop.ctx.borrow_mut().reset_clock();
                self.frame_loop.schedule();
            }
            LoopState::Paused => self.frame_loop.cancel(),
        }
        log::info!("[loop] {:?}", state);
        self.refresh_toggle_label();
    }

    /// Call after the side's parameters changed (the simulation has already
    /// been restarted by `Side`). Paused views show the reset frame once.
    pub fn params_changed(&self) {
        self.frame_loop.ctx.borrow_mut().reset_clock();
        match self.loop_state() {
            LoopState::Running => self.frame_loop.schedule(),
            LoopState::Paused => self.frame_loop.ctx.borrow_mut().redraw(),
        }
    }

    fn refresh_toggle_label(&self) {
        let label = match self.loop_state() {
            LoopState::Running => "Pause",
            LoopState::Paused => "Resume",
        };
        self.toggle_button.set_text_content(Some(label));
    }
}
