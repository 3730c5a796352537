//! Configuration types
//!
//! Board-agnostic line configuration: which speed profile the equipment is
//! built for and optional per-unit rating overrides.

pub mod types;

pub use types::*;
