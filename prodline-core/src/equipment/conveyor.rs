//! Conveyor unit

use crate::config::{ConveyorRating, EquipmentRatings};
use crate::error::PropagationError;
use crate::observe::{Observable, Subject, SubjectState, WorkingState};

/// Conveyor belt
///
/// While a [`Bridge`](crate::Bridge) is connected, the bridge's robot is
/// registered here. The conveyor's own working state is independent of the
/// bridge's.
pub struct Conveyor {
    core: Observable,
    rating: ConveyorRating,
}

impl Conveyor {
    /// Create a conveyor in the `Failed` state
    pub fn new(rating: ConveyorRating) -> Self {
        Self {
            core: Observable::new(),
            rating,
        }
    }

    /// Get the rating
    pub fn rating(&self) -> ConveyorRating {
        self.rating
    }

    /// Mark the conveyor as failed
    ///
    /// Broadcasts exactly once.
    pub fn fail(&self) -> Result<(), PropagationError> {
        warn!("conveyor failed");
        self.set_working_state(WorkingState::Failed)
    }
}

impl Default for Conveyor {
    fn default() -> Self {
        Self::new(EquipmentRatings::default().conveyor)
    }
}

impl Subject for Conveyor {
    fn observable(&self) -> &Observable {
        &self.core
    }

    fn snapshot(&self) -> SubjectState {
        SubjectState::Conveyor {
            working: self.working_state(),
        }
    }
}
