//! Robot unit

use core::cell::Cell;

use crate::config::{EquipmentRatings, RobotRating};
use crate::error::PropagationError;
use crate::observe::{Observer, SubjectState, WorkingState};

/// Pick-and-place robot
///
/// The robot only ever mirrors sensor state. Broadcasts from conveyors and
/// bridges reach it (a connected bridge registers it on the conveyor) but
/// are ignored.
pub struct Robot {
    mirrored: Cell<WorkingState>,
    rating: RobotRating,
}

impl Robot {
    /// Create a robot with a `Failed` mirrored state
    pub fn new(rating: RobotRating) -> Self {
        Self {
            mirrored: Cell::new(WorkingState::Failed),
            rating,
        }
    }

    /// Last sensor state seen
    pub fn mirrored_state(&self) -> WorkingState {
        self.mirrored.get()
    }

    /// Get the rating
    pub fn rating(&self) -> RobotRating {
        self.rating
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new(EquipmentRatings::default().robot)
    }
}

impl Observer for Robot {
    fn update(&self, subject: &SubjectState) -> Result<(), PropagationError> {
        if let SubjectState::Sensor { working } = *subject {
            self.mirrored.set(working);
        }
        Ok(())
    }
}
