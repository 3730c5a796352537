//! Configuration loading
//!
//! Parses a TOML line description into [`LineConfig`]:
//!
//! ```toml
//! name = "line-1"
//! speed = "high"          # "high" | "low"
//!
//! [conveyor]              # optional, overrides the profile rating
//! belt_speed_mm_s = 420
//!
//! [robot]
//! cycle_time_ms = 900
//!
//! [sensor]
//! sample_interval_ms = 20
//! ```

use alloc::string::String;
use core::fmt;

use heapless::String as HString;
use serde::Deserialize;

use prodline_core::config::{
    ConveyorRating, LineConfig, RobotRating, SensorRating, SpeedProfile, MAX_LABEL_LEN,
};

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Document is not valid TOML or does not match the schema
    Parse {
        /// Byte offset of the offending input, when known
        offset: Option<usize>,
    },
    /// Line name exceeds [`MAX_LABEL_LEN`] bytes
    LabelTooLong,
    /// A rating is zero
    InvalidRating(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse { offset: Some(at) } => {
                write!(f, "invalid line config at byte {}", at)
            }
            ConfigError::Parse { offset: None } => f.write_str("invalid line config"),
            ConfigError::LabelTooLong => {
                write!(f, "line name longer than {} bytes", MAX_LABEL_LEN)
            }
            ConfigError::InvalidRating(field) => write!(f, "{} must be non-zero", field),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Document layout as written by users
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LineDocument {
    #[serde(default)]
    name: String,
    #[serde(default)]
    speed: SpeedProfile,
    conveyor: Option<ConveyorRating>,
    robot: Option<RobotRating>,
    sensor: Option<SensorRating>,
}

/// Parse a TOML document into a validated [`LineConfig`]
pub fn parse_config(input: &str) -> Result<LineConfig, ConfigError> {
    let doc: LineDocument = toml::from_str(input).map_err(|e| {
        let offset = e.span().map(|span| span.start);
        warn!("line config rejected at {}", offset);
        ConfigError::Parse { offset }
    })?;

    let name: HString<MAX_LABEL_LEN> =
        HString::try_from(doc.name.as_str()).map_err(|_| ConfigError::LabelTooLong)?;
    let config = LineConfig {
        name,
        speed: doc.speed,
        conveyor: doc.conveyor,
        robot: doc.robot,
        sensor: doc.sensor,
    };
    validate(&config)?;

    info!("line config loaded");
    debug!("  profile {}", config.speed);
    Ok(config)
}

/// Check that every effective rating is usable
pub fn validate(config: &LineConfig) -> Result<(), ConfigError> {
    let ratings = config.ratings();
    if ratings.conveyor.belt_speed_mm_s == 0 {
        return Err(ConfigError::InvalidRating("conveyor.belt_speed_mm_s"));
    }
    if ratings.robot.cycle_time_ms == 0 {
        return Err(ConfigError::InvalidRating("robot.cycle_time_ms"));
    }
    if ratings.sensor.sample_interval_ms == 0 {
        return Err(ConfigError::InvalidRating("sensor.sample_interval_ms"));
    }
    Ok(())
}
