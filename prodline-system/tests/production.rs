//! End-to-end production line scenarios

use std::rc::Rc;

use proptest::prelude::*;

use prodline_core::{
    LineMonitor, LineStatus, LinkState, Observer, PropagationError, Subject, SubjectKind,
    SubjectState, WorkingState,
};
use prodline_system::{parse_config, ProductionSystem};

const LINE_TOML: &str = r#"
name = "press-shop"
speed = "high"

[robot]
cycle_time_ms = 650
"#;

/// Fails the bridge as soon as the conveyor reports a fault
struct Interlock {
    line: Rc<ProductionSystem>,
}

impl Observer for Interlock {
    fn update(&self, subject: &SubjectState) -> Result<(), PropagationError> {
        match subject {
            SubjectState::Conveyor { working } if !working.is_working() => {
                self.line.bridge().fail()
            }
            _ => Ok(()),
        }
    }
}

/// Restarts production whenever the bridge goes down
struct AutoRestart {
    line: Rc<ProductionSystem>,
}

impl Observer for AutoRestart {
    fn update(&self, subject: &SubjectState) -> Result<(), PropagationError> {
        match subject {
            SubjectState::Bridge { link, .. } if *link != LinkState::Connected => {
                self.line.start_production()
            }
            _ => Ok(()),
        }
    }
}

#[test]
fn configured_line_runs_a_shift() {
    let config = parse_config(LINE_TOML).unwrap();
    let line = ProductionSystem::from_config(&config);
    let monitor = Rc::new(LineMonitor::new());
    line.attach_monitor(&monitor);

    assert_eq!(line.robot().rating().cycle_time_ms, 650);

    line.start_production().unwrap();
    line.sensor().set_working_state(WorkingState::Working).unwrap();
    line.conveyor().set_working_state(WorkingState::Working).unwrap();

    assert!(line.is_producing());
    assert_eq!(line.robot().mirrored_state(), WorkingState::Working);
    assert_eq!(monitor.check(), LineStatus::Ok);

    line.stop_production().unwrap();

    assert_eq!(monitor.check(), LineStatus::Ok);
    assert_eq!(line.conveyor().registrations(line.robot()), 0);
    assert_eq!(monitor.total_notifications(), 4);
}

#[test]
fn sensor_drop_reaches_robot_and_monitor() {
    let line = ProductionSystem::default();
    let monitor = Rc::new(LineMonitor::new());
    line.attach_monitor(&monitor);
    line.start_production().unwrap();
    line.sensor().set_working_state(WorkingState::Working).unwrap();

    line.sensor().set_working_state(WorkingState::Failed).unwrap();

    assert_eq!(line.robot().mirrored_state(), WorkingState::Failed);
    assert_eq!(monitor.check(), LineStatus::Fault(SubjectKind::Sensor));
    // The bridge is not coupled to the sensor
    assert!(line.is_producing());
}

#[test]
fn conveyor_fault_trips_interlock() {
    let line = Rc::new(ProductionSystem::default());
    let monitor = Rc::new(LineMonitor::new());
    let interlock = Rc::new(Interlock {
        line: Rc::clone(&line),
    });
    line.conveyor().attach(&interlock);
    line.attach_monitor(&monitor);
    line.start_production().unwrap();

    line.conveyor().fail().unwrap();

    assert_eq!(line.bridge().link_state(), LinkState::Failed);
    assert_eq!(line.bridge().working_state(), WorkingState::Failed);
    assert_eq!(monitor.notifications(SubjectKind::Bridge), 2);
    assert_eq!(monitor.check(), LineStatus::Fault(SubjectKind::Conveyor));

    line.stop_production().unwrap();
    assert_eq!(line.conveyor().registrations(line.robot()), 0);
}

#[test]
fn restart_from_own_broadcast_is_a_cycle() {
    let line = Rc::new(ProductionSystem::default());
    let restart = Rc::new(AutoRestart {
        line: Rc::clone(&line),
    });
    line.bridge().attach(&restart);
    line.start_production().unwrap();

    let result = line.stop_production();

    assert_eq!(
        result,
        Err(PropagationError::NotificationCycle {
            subject: SubjectKind::Bridge
        })
    );
    assert!(!line.bridge().observable().is_notifying());

    // Without the offending observer the line stops normally
    line.bridge().detach(&restart);
    line.stop_production().unwrap();
    assert!(!line.is_producing());
    assert_eq!(line.conveyor().registrations(line.robot()), 0);
}

#[test]
fn dropped_monitor_stops_receiving() {
    let line = ProductionSystem::default();
    let monitor = Rc::new(LineMonitor::new());
    line.attach_monitor(&monitor);
    drop(monitor);

    line.start_production().unwrap();

    assert_eq!(line.bridge().observer_count(), 0);
    assert_eq!(line.sensor().observer_count(), 1);
}

proptest! {
    #[test]
    fn start_stop_sequences_keep_registry_bounded(
        starts in prop::collection::vec(any::<bool>(), 0..32),
    ) {
        let line = ProductionSystem::default();
        for start in &starts {
            if *start {
                line.start_production().unwrap();
            } else {
                line.stop_production().unwrap();
            }
        }

        let producing = starts.last().copied().unwrap_or(false);
        prop_assert_eq!(line.is_producing(), producing);
        prop_assert_eq!(line.conveyor().registrations(line.robot()), usize::from(producing));
        prop_assert_eq!(line.conveyor().observer_count(), usize::from(producing));
    }
}
