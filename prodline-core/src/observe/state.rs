//! Working state and broadcast snapshots

use crate::bridge::LinkState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operational status of a unit
///
/// There is no "unknown" value: every unit starts out `Failed` and only
/// becomes `Working` through an explicit write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WorkingState {
    /// Unit is operating
    Working,
    /// Unit is stopped or faulted
    #[default]
    Failed,
}

impl WorkingState {
    /// Check if the unit is operating
    pub fn is_working(self) -> bool {
        matches!(self, WorkingState::Working)
    }
}

impl From<bool> for WorkingState {
    fn from(working: bool) -> Self {
        if working {
            WorkingState::Working
        } else {
            WorkingState::Failed
        }
    }
}

impl From<WorkingState> for bool {
    fn from(state: WorkingState) -> Self {
        state.is_working()
    }
}

/// The closed set of subject kinds that can broadcast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SubjectKind {
    /// Part-presence sensor
    Sensor,
    /// Transport conveyor
    Conveyor,
    /// Robot/conveyor coupling
    Bridge,
}

impl SubjectKind {
    /// All kinds, in monitoring priority order
    pub const ALL: [SubjectKind; 3] = [
        SubjectKind::Sensor,
        SubjectKind::Conveyor,
        SubjectKind::Bridge,
    ];

    /// Lower-case name used in messages
    pub fn name(self) -> &'static str {
        match self {
            SubjectKind::Sensor => "sensor",
            SubjectKind::Conveyor => "conveyor",
            SubjectKind::Bridge => "bridge",
        }
    }

    /// Position of this kind in [`SubjectKind::ALL`]
    pub(crate) fn index(self) -> usize {
        match self {
            SubjectKind::Sensor => 0,
            SubjectKind::Conveyor => 1,
            SubjectKind::Bridge => 2,
        }
    }
}

/// Snapshot of a subject taken at broadcast time
///
/// Observers match on the arm they care about and ignore the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SubjectState {
    Sensor {
        working: WorkingState,
    },
    Conveyor {
        working: WorkingState,
    },
    Bridge {
        working: WorkingState,
        link: LinkState,
    },
}

impl SubjectState {
    /// Kind of subject this snapshot came from
    pub fn kind(&self) -> SubjectKind {
        match self {
            SubjectState::Sensor { .. } => SubjectKind::Sensor,
            SubjectState::Conveyor { .. } => SubjectKind::Conveyor,
            SubjectState::Bridge { .. } => SubjectKind::Bridge,
        }
    }

    /// Working state carried by the snapshot
    pub fn working(&self) -> WorkingState {
        match *self {
            SubjectState::Sensor { working }
            | SubjectState::Conveyor { working }
            | SubjectState::Bridge { working, .. } => working,
        }
    }

    /// Check if this snapshot describes a fault
    ///
    /// Sensors and conveyors are faulted whenever they are not working. A
    /// bridge that was merely disconnected is stopped, not faulted.
    pub fn is_fault(&self) -> bool {
        match *self {
            SubjectState::Sensor { working } | SubjectState::Conveyor { working } => {
                !working.is_working()
            }
            SubjectState::Bridge { link, .. } => link.is_failed(),
        }
    }
}
