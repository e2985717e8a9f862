pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_lab_keydown;
pub use pointer::wire_canvas_pointer;
