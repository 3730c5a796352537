//! Observable capability
//!
//! Subjects own a working state and a registry of observers. Writing the
//! state always broadcasts a [`SubjectState`] snapshot to every registered
//! observer, in registration order.

pub mod observer;
pub mod registry;
pub mod state;
pub mod subject;

pub use observer::{FnObserver, Observer};
pub use registry::ObserverRegistry;
pub use state::{SubjectKind, SubjectState, WorkingState};
pub use subject::{Observable, Subject};
