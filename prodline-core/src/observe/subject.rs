//! Subject capability
//!
//! [`Observable`] is the state a subject embeds: its working state, its
//! observer registry and a re-entrancy flag. [`Subject`] mixes the
//! attach/detach/notify contract into any type that exposes an
//! `Observable` and can describe itself as a [`SubjectState`].

use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use crate::error::PropagationError;

use super::observer::Observer;
use super::registry::ObserverRegistry;
use super::state::{SubjectState, WorkingState};

/// Working state, observer registry and broadcast guard of one subject
#[derive(Default)]
pub struct Observable {
    working: Cell<WorkingState>,
    registry: RefCell<ObserverRegistry>,
    notifying: Cell<bool>,
}

impl Observable {
    /// Create a subject core in the `Failed` state with no observers
    pub const fn new() -> Self {
        Self {
            working: Cell::new(WorkingState::Failed),
            registry: RefCell::new(ObserverRegistry::new()),
            notifying: Cell::new(false),
        }
    }

    /// Current working state
    pub fn working_state(&self) -> WorkingState {
        self.working.get()
    }

    /// Overwrite the working state without broadcasting
    ///
    /// Only reachable through [`Subject::set_working_state`], which always
    /// broadcasts afterwards.
    pub(crate) fn store(&self, value: WorkingState) {
        self.working.set(value);
    }

    /// Append a registration
    pub fn attach<O: Observer + 'static>(&self, observer: &Rc<O>) {
        self.registry.borrow_mut().attach(observer);
    }

    /// Append a registration for a type-erased observer
    pub fn attach_dyn(&self, observer: &Rc<dyn Observer>) {
        self.registry.borrow_mut().attach_dyn(observer);
    }

    /// Remove the first registration of `observer`, if any
    pub fn detach<O: Observer + ?Sized + 'static>(&self, observer: &Rc<O>) -> bool {
        self.registry.borrow_mut().detach(observer)
    }

    /// Number of live registrations
    pub fn observer_count(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Number of live registrations of `observer`
    pub fn registrations<O: Observer + ?Sized + 'static>(&self, observer: &Rc<O>) -> usize {
        self.registry.borrow().registrations(observer)
    }

    /// Check if a broadcast from this subject is in progress
    pub fn is_notifying(&self) -> bool {
        self.notifying.get()
    }

    /// Deliver `snapshot` to every live observer, in registration order
    ///
    /// The registry is copied before the first call, so observers may
    /// attach or detach while handling the update; the change applies to
    /// the next broadcast. Delivery stops at the first error.
    ///
    /// Fails with [`PropagationError::NotificationCycle`] when called while
    /// this subject is already broadcasting.
    pub fn broadcast(&self, snapshot: &SubjectState) -> Result<(), PropagationError> {
        if self.notifying.replace(true) {
            warn!("notification cycle detected on {}", snapshot.kind());
            return Err(PropagationError::NotificationCycle {
                subject: snapshot.kind(),
            });
        }
        let _guard = NotifyGuard(&self.notifying);

        let observers = {
            let mut registry = self.registry.borrow_mut();
            registry.prune();
            registry.live()
        };
        debug!(
            "{} broadcasting to {} observers",
            snapshot.kind(),
            observers.len()
        );

        observers
            .iter()
            .try_for_each(|observer| observer.update(snapshot))
    }
}

/// Clears the broadcast flag when the broadcast ends, including on error
struct NotifyGuard<'a>(&'a Cell<bool>);

impl Drop for NotifyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Attach/detach/notify contract shared by every subject
pub trait Subject {
    /// The embedded subject core
    fn observable(&self) -> &Observable;

    /// Describe the subject as it is right now
    fn snapshot(&self) -> SubjectState;

    /// Append `observer` to the registry
    ///
    /// No uniqueness check: attaching twice yields two updates per
    /// broadcast. Keeping registrations unique is the caller's job.
    fn attach<O: Observer + 'static>(&self, observer: &Rc<O>) {
        self.observable().attach(observer);
    }

    /// Append an observer held as `Rc<dyn Observer>`
    ///
    /// Same registry semantics as [`Subject::attach`].
    fn attach_dyn(&self, observer: &Rc<dyn Observer>) {
        self.observable().attach_dyn(observer);
    }

    /// Remove the first registration of `observer`
    ///
    /// Detaching an observer that is not registered is a no-op and
    /// returns `false`.
    fn detach<O: Observer + ?Sized + 'static>(&self, observer: &Rc<O>) -> bool {
        self.observable().detach(observer)
    }

    /// Broadcast the current snapshot to every observer
    fn notify(&self) -> Result<(), PropagationError> {
        let snapshot = self.snapshot();
        self.observable().broadcast(&snapshot)
    }

    /// Current working state
    fn working_state(&self) -> WorkingState {
        self.observable().working_state()
    }

    /// Store `value` and broadcast
    ///
    /// Always broadcasts, even when `value` equals the current state.
    fn set_working_state(&self, value: WorkingState) -> Result<(), PropagationError> {
        self.observable().store(value);
        self.notify()
    }

    /// Number of live registrations
    fn observer_count(&self) -> usize {
        self.observable().observer_count()
    }

    /// Number of live registrations of `observer`
    fn registrations<O: Observer + ?Sized + 'static>(&self, observer: &Rc<O>) -> usize {
        self.observable().registrations(observer)
    }
}
