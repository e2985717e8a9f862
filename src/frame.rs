use crate::render::SceneRenderer;
use crate::view::SideAccess;
use instant::Instant;
use rand::rngs::ThreadRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<S: SideAccess> {
    pub side: S,
    pub renderer: SceneRenderer,
    pub last_instant: Instant,
    rng: ThreadRng,
}

impl<S: SideAccess> FrameContext<S> {
    pub fn new(side: S, renderer: SceneRenderer) -> Self {
        Self {
            side,
            renderer,
            last_instant: Instant::now(),
            rng: rand::thread_rng(),
        }
    }

    /// Step and draw one frame; returns whether another should follow.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let rng = &mut self.rng;
        let (keep_going, view) = self.side.with_side(|s| {
            let keep_going = s.sim.step(dt_sec);
            (keep_going, s.sim.frame_view(rng))
        });
        self.renderer.draw(&view);
        keep_going
    }

    /// Draw the current state without advancing it.
    pub fn redraw(&mut self) {
        let rng = &mut self.rng;
        let view = self.side.with_side(|s| s.sim.frame_view(rng));
        self.renderer.draw(&view);
    }

    #[inline]
    pub fn reset_clock(&mut self) {
        self.last_instant = Instant::now();
    }
}

/// requestAnimationFrame driver with cooperative cancellation: `cancel`
/// withdraws the pending frame; a frame already running always finishes.
pub struct FrameLoop<S: SideAccess> {
    pub ctx: Rc<RefCell<FrameContext<S>>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl<S: SideAccess> FrameLoop<S> {
    pub fn new(ctx: FrameContext<S>) -> Self {
        let ctx = Rc::new(RefCell::new(ctx));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let ctx_tick = ctx.clone();
        let pending_tick = pending.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            let keep_going = ctx_tick.borrow_mut().frame();
            if keep_going {
                request_frame(&tick_clone, &pending_tick);
            }
        }) as Box<dyn FnMut()>));

        Self { ctx, pending, tick }
    }

    /// Schedule the next frame unless one is already pending.
    pub fn schedule(&self) {
        if self.pending.get().is_none() {
            request_frame(&self.tick, &self.pending);
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
            log::debug!("[loop] cancelled frame {}", id);
        }
    }
}

fn request_frame(
    tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: &Rc<Cell<Option<i32>>>,
) {
    let Some(w) = web::window() else {
        return;
    };
    let tick_ref = tick.borrow();
    let Some(closure) = tick_ref.as_ref() else {
        return;
    };
    match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => pending.set(Some(id)),
        Err(e) => log::error!("[loop] requestAnimationFrame failed: {:?}", e),
    }
}
