//! Production line assembly
//!
//! Builds a line on top of `prodline-core`:
//!
//! - Equipment factory (high-speed and low-speed variants)
//! - Production coordinator (start/stop production through the bridge)
//! - Configuration loading from TOML
//!
//! ```text
//! LineConfig ──► LineFactory ──► ProductionSystem
//!                                 ├─ Robot   (observes Sensor)
//!                                 ├─ Conveyor
//!                                 ├─ Sensor
//!                                 └─ Bridge(Robot, Conveyor)
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod config;
pub mod factory;
pub mod system;

pub use config::{parse_config, ConfigError};
pub use factory::{EquipmentFactory, LineFactory};
pub use system::ProductionSystem;
