//! Board-agnostic state propagation core for a production line
//!
//! This crate contains the logic that keeps equipment state in sync,
//! independent of how the equipment is built or driven:
//!
//! - Observable capability (observer registry, broadcast, re-entrancy guard)
//! - Equipment units (sensor, conveyor, robot)
//! - Bridge coupling robot and conveyor, with its link state machine
//! - Line monitoring for external observers
//! - Configuration type definitions
//!
//! # Propagation
//!
//! ```text
//!  Sensor ──update──► Robot (mirrors sensor state)
//!
//!  Bridge::connect()
//!     ├─► Conveyor.attach(Robot)
//!     └─► Bridge.set_working_state(Working) ──update──► monitors
//!
//!  Conveyor::fail() ──update──► Robot (ignored), monitors
//! ```
//!
//! Every broadcast is synchronous and in registry order. A subject that is
//! asked to broadcast while it is already broadcasting reports
//! [`PropagationError::NotificationCycle`] instead of recursing.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod bridge;
pub mod config;
pub mod equipment;
pub mod error;
pub mod monitor;
pub mod observe;

pub use bridge::{Actuator, Bridge, Direction, LinkEvent, LinkState};
pub use equipment::{Conveyor, Robot, Sensor};
pub use error::PropagationError;
pub use monitor::{LineMonitor, LineStatus};
pub use observe::{
    FnObserver, Observable, Observer, ObserverRegistry, Subject, SubjectKind, SubjectState,
    WorkingState,
};
