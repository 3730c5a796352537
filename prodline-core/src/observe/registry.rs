//! Ordered observer registry
//!
//! The registry is a plain sequence, not a set:
//! - insertion order is notification order
//! - attaching the same observer twice registers it twice
//! - detach removes only the first matching registration
//!
//! Entries are weak. The registry never keeps an observer alive; entries
//! whose observer has been dropped are skipped and pruned.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;

use super::observer::Observer;

/// Ordered list of weak observer registrations
#[derive(Default)]
pub struct ObserverRegistry {
    entries: Vec<Weak<dyn Observer>>,
}

impl ObserverRegistry {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a registration for `observer`
    pub fn attach<O: Observer + 'static>(&mut self, observer: &Rc<O>) {
        let weak: Weak<O> = Rc::downgrade(observer);
        self.entries.push(weak);
    }

    /// Append a registration for an already type-erased `observer`
    pub fn attach_dyn(&mut self, observer: &Rc<dyn Observer>) {
        self.entries.push(Rc::downgrade(observer));
    }

    /// Remove the first registration for `observer`
    ///
    /// Returns `false` when the observer was not registered.
    pub fn detach<O: Observer + ?Sized + 'static>(&mut self, observer: &Rc<O>) -> bool {
        let target = identity_of(observer);
        match self
            .entries
            .iter()
            .position(|entry| entry.as_ptr().cast::<()>() == target)
        {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of live registrations for `observer`
    pub fn registrations<O: Observer + ?Sized + 'static>(&self, observer: &Rc<O>) -> usize {
        let target = identity_of(observer);
        self.entries
            .iter()
            .filter(|entry| entry.strong_count() > 0 && entry.as_ptr().cast::<()>() == target)
            .count()
    }

    /// Number of live registrations
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }

    /// Check if no live observer is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop registrations whose observer no longer exists
    ///
    /// Returns the number of entries removed.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.strong_count() > 0);
        before - self.entries.len()
    }

    /// Strong handles to every live registration, in order
    pub fn live(&self) -> Vec<Rc<dyn Observer>> {
        self.entries.iter().filter_map(Weak::upgrade).collect()
    }
}

fn identity_of<O: Observer + ?Sized + 'static>(observer: &Rc<O>) -> *const () {
    Rc::as_ptr(observer).cast::<()>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PropagationError;
    use crate::observe::SubjectState;

    struct Nop;

    impl Observer for Nop {
        fn update(&self, _subject: &SubjectState) -> Result<(), PropagationError> {
            Ok(())
        }
    }

    #[test]
    fn test_attach_allows_duplicates() {
        let mut registry = ObserverRegistry::new();
        let a = Rc::new(Nop);

        registry.attach(&a);
        registry.attach(&a);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.registrations(&a), 2);
    }

    #[test]
    fn test_detach_removes_first_only() {
        let mut registry = ObserverRegistry::new();
        let a = Rc::new(Nop);
        let b = Rc::new(Nop);

        registry.attach(&a);
        registry.attach(&b);
        registry.attach(&a);

        assert!(registry.detach(&a));
        assert_eq!(registry.registrations(&a), 1);
        assert_eq!(registry.len(), 2);

        // Remaining order is b, a
        let live = registry.live();
        assert_eq!(Rc::as_ptr(&live[0]).cast::<()>(), identity_of(&b));
        assert_eq!(Rc::as_ptr(&live[1]).cast::<()>(), identity_of(&a));
    }

    #[test]
    fn test_detach_absent_is_noop() {
        let mut registry = ObserverRegistry::new();
        let a = Rc::new(Nop);
        let b = Rc::new(Nop);
        registry.attach(&a);

        assert!(!registry.detach(&b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_dropped_observer_is_not_live() {
        let mut registry = ObserverRegistry::new();
        let a = Rc::new(Nop);
        let b = Rc::new(Nop);
        registry.attach(&a);
        registry.attach(&b);

        drop(a);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.live().len(), 1);
        assert_eq!(registry.prune(), 1);
        assert_eq!(registry.prune(), 0);
    }

    #[test]
    fn test_registry_does_not_own_observer() {
        let mut registry = ObserverRegistry::new();
        let a = Rc::new(Nop);
        registry.attach(&a);
        registry.attach(&a);

        assert_eq!(Rc::strong_count(&a), 1);
    }

    #[test]
    fn test_attach_concrete_and_erased_share_identity() {
        let mut registry = ObserverRegistry::new();
        let a = Rc::new(Nop);
        let erased: Rc<dyn Observer> = a.clone();

        registry.attach(&a);
        registry.attach_dyn(&erased);

        assert_eq!(registry.registrations(&a), 2);
        assert_eq!(registry.registrations(&erased), 2);

        assert!(registry.detach(&erased));
        assert_eq!(registry.registrations(&a), 1);
        assert!(registry.detach(&a));
        assert!(registry.is_empty());
    }
}
