//! Actuation hook
//!
//! Motion itself is not modelled here. A bridge forwards move requests to
//! an installed [`Actuator`] and does nothing without one.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Travel direction along the line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Downstream, toward the end of the line
    #[default]
    Forward,
    /// Upstream, back toward the feed
    Backward,
}

/// Drives the coupled robot/conveyor pair
pub trait Actuator {
    /// Move the pair one step in `direction`
    fn drive(&self, direction: Direction);
}

