//! Eventing - Resolver Event Surface
//!
//! Consumers subscribe to culture events through an explicit registry with
//! per-subscriber channels; there is no ambient broadcast bus.

mod bus;
mod event;

pub use bus::*;
pub use event::*;
