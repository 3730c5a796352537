//! Bridge subject

use alloc::rc::Rc;
use core::cell::Cell;

use crate::equipment::{Conveyor, Robot};
use crate::error::PropagationError;
use crate::observe::{Observable, Subject, SubjectState};

use super::actuator::{Actuator, Direction};
use super::link::{LinkEvent, LinkState};

/// Couples a robot and a conveyor
///
/// The bridge shares the robot and conveyor with whoever built them; it
/// never owns their lifetime. Its working state is its own and is not
/// kept in sync with the conveyor's.
///
/// Connect is idempotent towards the conveyor registry: the bridge keeps
/// at most one registration of its robot there, however many times it is
/// connected.
pub struct Bridge {
    core: Observable,
    robot: Rc<Robot>,
    conveyor: Rc<Conveyor>,
    link: Cell<LinkState>,
    /// The bridge currently holds a registration of the robot on the conveyor
    robot_attached: Cell<bool>,
    actuator: Option<Rc<dyn Actuator>>,
}

impl Bridge {
    /// Create a disconnected bridge
    pub fn new(robot: Rc<Robot>, conveyor: Rc<Conveyor>) -> Self {
        Self {
            core: Observable::new(),
            robot,
            conveyor,
            link: Cell::new(LinkState::Disconnected),
            robot_attached: Cell::new(false),
            actuator: None,
        }
    }

    /// Install the actuator that receives move requests
    pub fn with_actuator(mut self, actuator: Rc<dyn Actuator>) -> Self {
        self.actuator = Some(actuator);
        self
    }

    /// Current link state
    pub fn link_state(&self) -> LinkState {
        self.link.get()
    }

    /// Check if production is running through this bridge
    pub fn is_connected(&self) -> bool {
        self.link.get() == LinkState::Connected
    }

    /// Get the coupled robot
    pub fn robot(&self) -> &Rc<Robot> {
        &self.robot
    }

    /// Get the coupled conveyor
    pub fn conveyor(&self) -> &Rc<Conveyor> {
        &self.conveyor
    }

    /// Register the robot on the conveyor and report `Working`
    pub fn connect(&self) -> Result<(), PropagationError> {
        if !self.robot_attached.replace(true) {
            self.conveyor.attach(&self.robot);
        }
        self.apply(LinkEvent::Connect)
    }

    /// Remove the robot from the conveyor and report `Failed`
    pub fn disconnect(&self) -> Result<(), PropagationError> {
        if self.robot_attached.replace(false) {
            self.conveyor.detach(&self.robot);
        }
        self.apply(LinkEvent::Disconnect)
    }

    /// Force the bridge down
    ///
    /// Broadcasts exactly once. The robot stays registered on the conveyor
    /// until the next [`disconnect`](Self::disconnect).
    pub fn fail(&self) -> Result<(), PropagationError> {
        warn!("bridge failed while {}", self.link.get());
        self.apply(LinkEvent::Fail)
    }

    /// Ask the actuator to move forward
    pub fn move_forward(&self) {
        self.drive(Direction::Forward);
    }

    /// Ask the actuator to move backward
    pub fn move_backward(&self) {
        self.drive(Direction::Backward);
    }

    fn drive(&self, direction: Direction) {
        if !self.link.get().motion_allowed() {
            debug!("move {} ignored while {}", direction, self.link.get());
            return;
        }
        if let Some(actuator) = &self.actuator {
            actuator.drive(direction);
        }
    }

    fn apply(&self, event: LinkEvent) -> Result<(), PropagationError> {
        let prev = self.link.get();
        let next = prev.transition(event);
        self.link.set(next);
        info!("bridge {} -> {} on {}", prev, next, event);
        self.set_working_state(next.working())
    }
}

impl Subject for Bridge {
    fn observable(&self) -> &Observable {
        &self.core
    }

    fn snapshot(&self) -> SubjectState {
        SubjectState::Bridge {
            working: self.working_state(),
            link: self.link.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::LineMonitor;
    use crate::observe::{SubjectKind, WorkingState};
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn bridge() -> Bridge {
        Bridge::new(Rc::new(Robot::default()), Rc::new(Conveyor::default()))
    }

    #[derive(Default)]
    struct Recorder {
        moves: RefCell<Vec<Direction>>,
    }

    impl Actuator for Recorder {
        fn drive(&self, direction: Direction) {
            self.moves.borrow_mut().push(direction);
        }
    }

    #[test]
    fn test_initial_state() {
        let b = bridge();
        assert_eq!(b.link_state(), LinkState::Disconnected);
        assert_eq!(b.working_state(), WorkingState::Failed);
        assert_eq!(b.conveyor().observer_count(), 0);
    }

    #[test]
    fn test_connect_registers_robot() {
        let b = bridge();
        b.connect().unwrap();

        assert_eq!(b.working_state(), WorkingState::Working);
        assert_eq!(b.link_state(), LinkState::Connected);
        assert_eq!(b.conveyor().registrations(b.robot()), 1);
    }

    #[test]
    fn test_disconnect_restores_registry() {
        let b = bridge();
        let other = Rc::new(LineMonitor::new());
        b.conveyor().attach(&other);

        b.connect().unwrap();
        b.disconnect().unwrap();

        assert_eq!(b.working_state(), WorkingState::Failed);
        assert_eq!(b.link_state(), LinkState::Disconnected);
        assert_eq!(b.conveyor().registrations(b.robot()), 0);
        assert_eq!(b.conveyor().observer_count(), 1);
    }

    #[test]
    fn test_double_connect_registers_once() {
        let b = bridge();
        let monitor = Rc::new(LineMonitor::new());
        b.attach(&monitor);

        b.connect().unwrap();
        b.connect().unwrap();

        assert_eq!(b.conveyor().registrations(b.robot()), 1);
        assert_eq!(monitor.notifications(SubjectKind::Bridge), 2);

        b.disconnect().unwrap();
        assert_eq!(b.conveyor().registrations(b.robot()), 0);
    }

    #[test]
    fn test_disconnect_without_connect() {
        let b = bridge();
        assert_eq!(b.disconnect(), Ok(()));
        assert_eq!(b.conveyor().observer_count(), 0);
    }

    #[test]
    fn test_external_robot_registration_is_left_alone() {
        let b = bridge();
        b.conveyor().attach(b.robot());

        b.connect().unwrap();
        assert_eq!(b.conveyor().registrations(b.robot()), 2);

        b.disconnect().unwrap();
        assert_eq!(b.conveyor().registrations(b.robot()), 1);
    }

    #[test]
    fn test_fail_notifies_once_and_keeps_robot() {
        let b = bridge();
        let monitor = Rc::new(LineMonitor::new());
        b.connect().unwrap();
        b.attach(&monitor);

        b.fail().unwrap();

        assert_eq!(monitor.notifications(SubjectKind::Bridge), 1);
        assert_eq!(b.working_state(), WorkingState::Failed);
        assert_eq!(b.link_state(), LinkState::Failed);
        assert_eq!(b.conveyor().registrations(b.robot()), 1);

        b.disconnect().unwrap();
        assert_eq!(b.conveyor().registrations(b.robot()), 0);
    }

    #[test]
    fn test_bridge_state_independent_of_conveyor() {
        let b = bridge();
        b.connect().unwrap();
        assert_eq!(b.conveyor().working_state(), WorkingState::Failed);

        b.conveyor().set_working_state(WorkingState::Working).unwrap();
        b.conveyor().fail().unwrap();
        assert_eq!(b.working_state(), WorkingState::Working);
    }

    #[test]
    fn test_conveyor_broadcast_does_not_touch_robot() {
        let b = bridge();
        b.connect().unwrap();

        b.conveyor().set_working_state(WorkingState::Working).unwrap();

        assert_eq!(b.robot().mirrored_state(), WorkingState::Failed);
    }

    #[test]
    fn test_moves_forwarded_only_when_connected() {
        let actuator = Rc::new(Recorder::default());
        let b = bridge().with_actuator(actuator.clone());

        b.move_forward();
        assert!(actuator.moves.borrow().is_empty());

        b.connect().unwrap();
        b.move_forward();
        b.move_backward();
        assert_eq!(
            *actuator.moves.borrow(),
            [Direction::Forward, Direction::Backward]
        );

        b.fail().unwrap();
        b.move_forward();
        assert_eq!(actuator.moves.borrow().len(), 2);
    }

    #[test]
    fn test_moves_without_actuator_are_noops() {
        let b = bridge();
        b.connect().unwrap();
        b.move_forward();
        b.move_backward();
        assert!(b.is_connected());
    }
}
