//! Line monitor implementation
//!
//! Attach one [`LineMonitor`] to the sensor, conveyor and bridge of a line
//! to track the last report of each and detect faults.

use core::cell::Cell;

use crate::error::PropagationError;
use crate::observe::{Observer, SubjectKind, SubjectState};

/// Line condition status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineStatus {
    /// No reported fault
    Ok,
    /// Last report from this kind was a fault
    Fault(SubjectKind),
}

impl LineStatus {
    /// Check if a fault is reported
    pub fn is_fault(&self) -> bool {
        matches!(self, LineStatus::Fault(_))
    }
}

/// Fault tracking observer
///
/// Keeps, per subject kind, the last snapshot received and the number of
/// broadcasts seen. Kinds that never reported are ignored by
/// [`check`](Self::check).
#[derive(Debug, Default)]
pub struct LineMonitor {
    last: [Cell<Option<SubjectState>>; 3],
    counts: [Cell<u32>; 3],
}

impl LineMonitor {
    /// Create a monitor with no reports
    pub fn new() -> Self {
        Self::default()
    }

    /// Check all reported conditions
    ///
    /// Returns the first fault in sensor, conveyor, bridge order, or `Ok`.
    /// A disconnected bridge is stopped, not faulted.
    pub fn check(&self) -> LineStatus {
        SubjectKind::ALL
            .iter()
            .copied()
            .find(|kind| {
                self.last_report(*kind)
                    .is_some_and(|snapshot| snapshot.is_fault())
            })
            .map_or(LineStatus::Ok, LineStatus::Fault)
    }

    /// Last snapshot received from `kind`
    pub fn last_report(&self, kind: SubjectKind) -> Option<SubjectState> {
        self.last[kind.index()].get()
    }

    /// Number of broadcasts received from `kind`
    pub fn notifications(&self, kind: SubjectKind) -> u32 {
        self.counts[kind.index()].get()
    }

    /// Number of broadcasts received in total
    pub fn total_notifications(&self) -> u32 {
        self.counts.iter().map(Cell::get).sum()
    }

    /// Forget every report
    pub fn reset(&self) {
        for slot in &self.last {
            slot.set(None);
        }
        for count in &self.counts {
            count.set(0);
        }
    }
}

impl Observer for LineMonitor {
    fn update(&self, subject: &SubjectState) -> Result<(), PropagationError> {
        let index = subject.kind().index();
        let previous = self.last[index].replace(Some(*subject));
        self.counts[index].set(self.counts[index].get().saturating_add(1));

        let was_fault = previous.is_some_and(|snapshot| snapshot.is_fault());
        if subject.is_fault() && !was_fault {
            warn!("fault reported by {}", subject.kind());
        }
        Ok(())
    }
}
