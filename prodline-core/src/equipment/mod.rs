//! Equipment units
//!
//! - [`Sensor`]: subject with no further relationships
//! - [`Conveyor`]: subject that can fail on its own
//! - [`Robot`]: observer that mirrors sensor state

pub mod conveyor;
pub mod robot;
pub mod sensor;

pub use conveyor::Conveyor;
pub use robot::Robot;
pub use sensor::Sensor;
