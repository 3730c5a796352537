//! Line monitoring
//!
//! Observers for external monitoring. They watch broadcasts and classify
//! the line; they never write back to a subject.

pub mod line;

pub use line::{LineMonitor, LineStatus};
