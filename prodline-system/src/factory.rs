//! Equipment factory
//!
//! The coordinator only depends on the three-method creation contract of
//! [`EquipmentFactory`]. Which variant supplies the units is chosen when
//! the factory is configured, through [`SpeedProfile`].

use prodline_core::config::{EquipmentRatings, LineConfig, SpeedProfile};
use prodline_core::{Conveyor, Robot, Sensor};

/// Creation contract for line equipment
///
/// Every call returns a fresh, ready-to-use unit.
pub trait EquipmentFactory {
    /// Build a robot, not yet attached to anything
    fn create_robot(&self) -> Robot;

    /// Build a conveyor with an empty observer registry
    fn create_conveyor(&self) -> Conveyor;

    /// Build a sensor with an empty observer registry
    fn create_sensor(&self) -> Sensor;
}

/// Factory building units rated for one speed profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFactory {
    profile: SpeedProfile,
    ratings: EquipmentRatings,
}

impl LineFactory {
    /// Create a factory with the stock ratings of `profile`
    pub const fn new(profile: SpeedProfile) -> Self {
        Self {
            profile,
            ratings: EquipmentRatings::for_profile(profile),
        }
    }

    /// Create a factory from a line config, applying its overrides
    pub fn from_config(config: &LineConfig) -> Self {
        Self {
            profile: config.speed,
            ratings: config.ratings(),
        }
    }

    /// Get the speed profile
    pub fn profile(&self) -> SpeedProfile {
        self.profile
    }

    /// Get the ratings applied to new units
    pub fn ratings(&self) -> EquipmentRatings {
        self.ratings
    }
}

impl From<SpeedProfile> for LineFactory {
    fn from(profile: SpeedProfile) -> Self {
        Self::new(profile)
    }
}

impl Default for LineFactory {
    fn default() -> Self {
        Self::new(SpeedProfile::default())
    }
}

impl EquipmentFactory for LineFactory {
    fn create_robot(&self) -> Robot {
        Robot::new(self.ratings.robot)
    }

    fn create_conveyor(&self) -> Conveyor {
        Conveyor::new(self.ratings.conveyor)
    }

    fn create_sensor(&self) -> Sensor {
        Sensor::new(self.ratings.sensor)
    }
}
