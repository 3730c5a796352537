//! Production coordinator
//!
//! Holds one robot, one conveyor, one sensor and the bridge coupling robot
//! and conveyor. Production is started and stopped through the bridge.

use alloc::rc::Rc;

use prodline_core::config::LineConfig;
use prodline_core::{
    Actuator, Bridge, Conveyor, Observer, PropagationError, Robot, Sensor, Subject,
};

use crate::factory::{EquipmentFactory, LineFactory};

/// One production line
pub struct ProductionSystem {
    robot: Rc<Robot>,
    conveyor: Rc<Conveyor>,
    sensor: Rc<Sensor>,
    bridge: Bridge,
}

impl ProductionSystem {
    /// Build a line from `factory`
    ///
    /// The robot is registered on the sensor so it mirrors sensor state
    /// from the start. The bridge starts disconnected.
    pub fn new<F: EquipmentFactory + ?Sized>(factory: &F) -> Self {
        let robot = Rc::new(factory.create_robot());
        let conveyor = Rc::new(factory.create_conveyor());
        let sensor = Rc::new(factory.create_sensor());

        sensor.attach(&robot);
        let bridge = Bridge::new(Rc::clone(&robot), Rc::clone(&conveyor));

        debug!("production system assembled");
        Self {
            robot,
            conveyor,
            sensor,
            bridge,
        }
    }

    /// Build a line from a configuration
    pub fn from_config(config: &LineConfig) -> Self {
        info!("assembling line for {} profile", config.speed);
        Self::new(&LineFactory::from_config(config))
    }

    /// Install the actuator the bridge forwards move requests to
    pub fn with_actuator(self, actuator: Rc<dyn Actuator>) -> Self {
        let Self {
            robot,
            conveyor,
            sensor,
            bridge,
        } = self;
        Self {
            robot,
            conveyor,
            sensor,
            bridge: bridge.with_actuator(actuator),
        }
    }

    /// Start production: connect the bridge
    pub fn start_production(&self) -> Result<(), PropagationError> {
        info!("starting production");
        self.bridge.connect()
    }

    /// Stop production: disconnect the bridge
    pub fn stop_production(&self) -> Result<(), PropagationError> {
        info!("stopping production");
        self.bridge.disconnect()
    }

    /// Check if production is running
    pub fn is_producing(&self) -> bool {
        self.bridge.is_connected()
    }

    /// Register `monitor` on the sensor, the conveyor and the bridge
    pub fn attach_monitor<O: Observer + 'static>(&self, monitor: &Rc<O>) {
        self.sensor.attach(monitor);
        self.conveyor.attach(monitor);
        self.bridge.attach(monitor);
    }

    /// Remove one registration of `monitor` from each subject
    pub fn detach_monitor<O: Observer + ?Sized + 'static>(&self, monitor: &Rc<O>) {
        self.sensor.detach(monitor);
        self.conveyor.detach(monitor);
        self.bridge.detach(monitor);
    }

    /// Get the robot
    pub fn robot(&self) -> &Rc<Robot> {
        &self.robot
    }

    /// Get the conveyor
    pub fn conveyor(&self) -> &Rc<Conveyor> {
        &self.conveyor
    }

    /// Get the sensor
    pub fn sensor(&self) -> &Rc<Sensor> {
        &self.sensor
    }

    /// Get the bridge
    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }
}

impl Default for ProductionSystem {
    fn default() -> Self {
        Self::new(&LineFactory::default())
    }
}
