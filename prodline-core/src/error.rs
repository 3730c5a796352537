//! Propagation errors
//!
//! Attach, detach and update on an unrecognised subject are total. The only
//! failure the core reports is a broadcast that re-enters itself.

use core::fmt;

use crate::observe::SubjectKind;

/// Errors raised while propagating state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PropagationError {
    /// A subject was asked to broadcast while its own broadcast was still
    /// running, which means two or more subjects observe each other.
    NotificationCycle {
        /// Kind of the subject whose broadcast was re-entered
        subject: SubjectKind,
    },
}

impl fmt::Display for PropagationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropagationError::NotificationCycle { subject } => {
                write!(f, "notification cycle detected on {}", subject.name())
            }
        }
    }
}

impl core::error::Error for PropagationError {}
