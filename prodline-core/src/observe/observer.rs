//! Observer trait

use crate::error::PropagationError;

use super::state::SubjectState;

/// Receives broadcasts from subjects
///
/// `update` takes `&self`: observers are shared through `Rc` handles, so
/// any state they keep lives in `Cell`/`RefCell`.
///
/// Implementations must treat snapshots of kinds they do not recognise as
/// a no-op returning `Ok(())`. An `Err` is reserved for propagating a
/// failure from a nested broadcast the observer itself triggered.
pub trait Observer {
    /// Called once per broadcast per registration
    fn update(&self, subject: &SubjectState) -> Result<(), PropagationError>;
}

/// Function-based observer for simple cases
pub struct FnObserver<F: Fn(&SubjectState)>(pub F);

impl<F: Fn(&SubjectState)> Observer for FnObserver<F> {
    fn update(&self, subject: &SubjectState) -> Result<(), PropagationError> {
        (self.0)(subject);
        Ok(())
    }
}
