//! Robot/conveyor bridge
//!
//! The bridge couples one robot and one conveyor and exposes a single
//! working state for the pair. Its link state machine is explicit, finite
//! and deterministic.

pub mod actuator;
pub mod link;

#[allow(clippy::module_inception)]
mod bridge;

pub use actuator::{Actuator, Direction};
pub use bridge::Bridge;
pub use link::{LinkEvent, LinkState};
