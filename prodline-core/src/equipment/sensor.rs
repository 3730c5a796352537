//! Sensor unit

use crate::config::{EquipmentRatings, SensorRating};
use crate::observe::{Observable, Subject, SubjectState};

/// Line sensor
///
/// Broadcasts its working state to observers; a [`Robot`](super::Robot)
/// attached here mirrors it.
pub struct Sensor {
    core: Observable,
    rating: SensorRating,
}

impl Sensor {
    /// Create a sensor in the `Failed` state
    pub fn new(rating: SensorRating) -> Self {
        Self {
            core: Observable::new(),
            rating,
        }
    }

    /// Get the rating
    pub fn rating(&self) -> SensorRating {
        self.rating
    }
}

impl Default for Sensor {
    fn default() -> Self {
        Self::new(EquipmentRatings::default().sensor)
    }
}

impl Subject for Sensor {
    fn observable(&self) -> &Observable {
        &self.core
    }

    fn snapshot(&self) -> SubjectState {
        SubjectState::Sensor {
            working: self.working_state(),
        }
    }
}
