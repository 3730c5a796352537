//! Bridge link state machine

use crate::observe::WorkingState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Link states of a bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LinkState {
    /// Robot not registered on the conveyor; initial state
    #[default]
    Disconnected,
    /// Robot registered on the conveyor; production running
    Connected,
    /// Bridge forced down by a fault
    Failed,
}

/// Events that drive the link state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// Production start requested
    Connect,
    /// Production stop requested
    Disconnect,
    /// Fault reported
    Fail,
}

impl LinkState {
    /// Working state the bridge reports in this link state
    pub fn working(self) -> WorkingState {
        match self {
            LinkState::Connected => WorkingState::Working,
            LinkState::Disconnected | LinkState::Failed => WorkingState::Failed,
        }
    }

    /// Check if actuation is allowed
    pub fn motion_allowed(self) -> bool {
        matches!(self, LinkState::Connected)
    }

    /// Check if this is the fault state
    pub fn is_failed(self) -> bool {
        matches!(self, LinkState::Failed)
    }

    /// Process an event and return the next state
    ///
    /// Every event is accepted from every state.
    pub fn transition(self, event: LinkEvent) -> Self {
        match event {
            LinkEvent::Connect => LinkState::Connected,
            LinkEvent::Disconnect => LinkState::Disconnected,
            LinkEvent::Fail => LinkState::Failed,
        }
    }
}
