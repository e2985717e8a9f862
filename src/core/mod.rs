pub mod codec;
pub mod compare;
pub mod constants;
pub mod controls;
pub mod easing;
pub mod params;
pub mod share;
pub mod sim;
pub mod store;

pub use codec::*;
pub use compare::*;
pub use constants::*;
pub use controls::*;
pub use params::*;
pub use share::*;
pub use sim::*;
pub use store::*;
