use crate::input;
use crate::view::SideAccess;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer movement feeds the target's velocity; a click adds shake.
pub fn wire_canvas_pointer<S: SideAccess>(canvas: &web::HtmlCanvasElement, side: S) {
    wire_pointermove(canvas, side.clone());
    wire_click(canvas, side);
}

fn wire_pointermove<S: SideAccess>(canvas: &web::HtmlCanvasElement, side: S) {
    let canvas_for_move = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_for_move);
        if pos.x.is_finite() && pos.y.is_finite() {
            side.with_side(|s| s.sim.pointer_moved(pos));
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click<S: SideAccess>(canvas: &web::HtmlCanvasElement, side: S) {
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        let shake = side.with_side(|s| {
            s.sim.trigger_shake();
            s.sim.state().shake
        });
        log::debug!("[click] shake={:.2}", shake);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
