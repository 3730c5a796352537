//! Configuration type definitions

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum label length
pub const MAX_LABEL_LEN: usize = 16;

/// Equipment variant the line is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpeedProfile {
    #[default]
    High,
    Low,
}

/// Conveyor rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConveyorRating {
    /// Nominal belt speed (mm/s)
    pub belt_speed_mm_s: u16,
}

/// Robot rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RobotRating {
    /// Time for one pick/place cycle (ms)
    pub cycle_time_ms: u16,
}

/// Sensor rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorRating {
    /// Interval between samples (ms)
    pub sample_interval_ms: u16,
}

/// Ratings for every unit on one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquipmentRatings {
    pub conveyor: ConveyorRating,
    pub robot: RobotRating,
    pub sensor: SensorRating,
}

impl EquipmentRatings {
    /// Stock ratings for a speed profile
    pub const fn for_profile(profile: SpeedProfile) -> Self {
        match profile {
            SpeedProfile::High => Self {
                conveyor: ConveyorRating {
                    belt_speed_mm_s: 500,
                },
                robot: RobotRating { cycle_time_ms: 800 },
                sensor: SensorRating {
                    sample_interval_ms: 10,
                },
            },
            SpeedProfile::Low => Self {
                conveyor: ConveyorRating {
                    belt_speed_mm_s: 150,
                },
                robot: RobotRating {
                    cycle_time_ms: 2000,
                },
                sensor: SensorRating {
                    sample_interval_ms: 50,
                },
            },
        }
    }
}

impl Default for EquipmentRatings {
    fn default() -> Self {
        Self::for_profile(SpeedProfile::default())
    }
}

/// Line configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineConfig {
    /// Line label
    pub name: String<MAX_LABEL_LEN>,
    /// Equipment variant
    pub speed: SpeedProfile,
    /// Conveyor override (profile rating if None)
    pub conveyor: Option<ConveyorRating>,
    /// Robot override (profile rating if None)
    pub robot: Option<RobotRating>,
    /// Sensor override (profile rating if None)
    pub sensor: Option<SensorRating>,
}

impl LineConfig {
    /// Create a config for `speed` with no overrides
    pub fn new(speed: SpeedProfile) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    /// Effective ratings: profile ratings with overrides applied
    pub fn ratings(&self) -> EquipmentRatings {
        let stock = EquipmentRatings::for_profile(self.speed);
        EquipmentRatings {
            conveyor: self.conveyor.unwrap_or(stock.conveyor),
            robot: self.robot.unwrap_or(stock.robot),
            sensor: self.sensor.unwrap_or(stock.sensor),
        }
    }
}
