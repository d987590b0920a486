//! Driver registry.
//!
//! Maps a driver class name (`HardwareInfo::class_type`) to a factory that
//! builds a fresh driver and wraps it in the matching adapter. The registry
//! is constructed at startup and passed by value; there is no global state.

use crate::hardware::{ActuatorHardware, SensorHardware, SystemHardware};
use hwif_common::hardware::driver::{
    ActuatorHardwareInterface, SensorHardwareInterface, SystemHardwareInterface,
};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Builds an actuator driver.
pub type ActuatorFactory = fn() -> Box<dyn ActuatorHardwareInterface>;
/// Builds a sensor driver.
pub type SensorFactory = fn() -> Box<dyn SensorHardwareInterface>;
/// Builds a system driver.
pub type SystemFactory = fn() -> Box<dyn SystemHardwareInterface>;

/// Hardware role, as written in `HardwareInfo::hardware_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverKind {
    /// Single-joint actuator.
    Actuator,
    /// Sensor-only hardware.
    Sensor,
    /// Joints and sensors behind one driver.
    System,
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Actuator => "actuator",
            Self::Sensor => "sensor",
            Self::System => "system",
        })
    }
}

impl FromStr for DriverKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actuator" => Ok(Self::Actuator),
            "sensor" => Ok(Self::Sensor),
            "system" => Ok(Self::System),
            other => Err(RegistryError::UnknownKind(other.to_string())),
        }
    }
}

/// Factory tagged with the role of the driver it builds.
#[derive(Debug, Clone, Copy)]
pub enum DriverFactory {
    /// Actuator driver factory.
    Actuator(ActuatorFactory),
    /// Sensor driver factory.
    Sensor(SensorFactory),
    /// System driver factory.
    System(SystemFactory),
}

impl DriverFactory {
    /// Role of the drivers this factory builds.
    pub fn kind(&self) -> DriverKind {
        match self {
            Self::Actuator(_) => DriverKind::Actuator,
            Self::Sensor(_) => DriverKind::Sensor,
            Self::System(_) => DriverKind::System,
        }
    }
}

/// Registry lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No factory under this name.
    #[error("Driver not found: {0}")]
    DriverNotFound(String),

    /// Factory exists but builds another role.
    #[error("Driver {name} is a {found} driver, expected {expected}")]
    KindMismatch {
        /// Requested driver name.
        name: String,
        /// Role the caller asked for.
        expected: DriverKind,
        /// Role the factory builds.
        found: DriverKind,
    },

    /// Hardware type string is not a known role.
    #[error("Unknown hardware type: {0}")]
    UnknownKind(String),
}

/// Registry of available drivers.
pub struct DriverRegistry {
    factories: HashMap<&'static str, DriverFactory>,
}

impl DriverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a driver factory.
    ///
    /// # Panics
    /// Panics if a driver with the same name is already registered.
    pub fn register(&mut self, name: &'static str, factory: DriverFactory) {
        if self.factories.contains_key(name) {
            panic!("Driver '{name}' is already registered");
        }
        self.factories.insert(name, factory);
    }

    /// Get a driver factory by name.
    pub fn get_factory(&self, name: &str) -> Option<DriverFactory> {
        self.factories.get(name).copied()
    }

    /// Build an actuator adapter around a fresh driver.
    ///
    /// # Errors
    /// `DriverNotFound` or `KindMismatch`.
    pub fn create_actuator(&self, name: &str) -> Result<ActuatorHardware, RegistryError> {
        match self.lookup(name, DriverKind::Actuator)? {
            DriverFactory::Actuator(factory) => Ok(ActuatorHardware::new(factory())),
            other => Err(mismatch(name, DriverKind::Actuator, other)),
        }
    }

    /// Build a sensor adapter around a fresh driver.
    ///
    /// # Errors
    /// `DriverNotFound` or `KindMismatch`.
    pub fn create_sensor(&self, name: &str) -> Result<SensorHardware, RegistryError> {
        match self.lookup(name, DriverKind::Sensor)? {
            DriverFactory::Sensor(factory) => Ok(SensorHardware::new(factory())),
            other => Err(mismatch(name, DriverKind::Sensor, other)),
        }
    }

    /// Build a system adapter around a fresh driver.
    ///
    /// # Errors
    /// `DriverNotFound` or `KindMismatch`.
    pub fn create_system(&self, name: &str) -> Result<SystemHardware, RegistryError> {
        match self.lookup(name, DriverKind::System)? {
            DriverFactory::System(factory) => Ok(SystemHardware::new(factory())),
            other => Err(mismatch(name, DriverKind::System, other)),
        }
    }

    /// List all registered driver names.
    pub fn list_drivers(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }

    fn lookup(&self, name: &str, expected: DriverKind) -> Result<DriverFactory, RegistryError> {
        let factory = self
            .get_factory(name)
            .ok_or_else(|| RegistryError::DriverNotFound(name.to_string()))?;
        if factory.kind() != expected {
            return Err(mismatch(name, expected, factory));
        }
        Ok(factory)
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn mismatch(name: &str, expected: DriverKind, factory: DriverFactory) -> RegistryError {
    RegistryError::KindMismatch {
        name: name.to_string(),
        expected,
        found: factory.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwif_common::component_info::HardwareInfo;
    use hwif_common::error::HwResult;
    use hwif_common::hardware::driver::{HardwareLifecycle, InterfaceRequest};
    use hwif_common::hardware::status::StatusMachine;
    use hwif_common::types::Status;

    #[derive(Default)]
    struct NullSensor {
        status: StatusMachine,
    }

    impl HardwareLifecycle for NullSensor {
        fn configure(&mut self, _info: &HardwareInfo) -> HwResult {
            self.status.configured();
            Ok(())
        }

        fn start(&mut self) -> HwResult {
            self.status.start()
        }

        fn stop(&mut self) -> HwResult {
            self.status.stop()
        }

        fn status(&self) -> Status {
            self.status.status()
        }
    }

    impl SensorHardwareInterface for NullSensor {
        fn read_sensor(&mut self, _request: InterfaceRequest<'_>, values: &mut [f64]) -> HwResult {
            values.fill(0.0);
            Ok(())
        }
    }

    fn create_null_sensor() -> Box<dyn SensorHardwareInterface> {
        Box::new(NullSensor::default())
    }

    #[test]
    fn registry_register_and_create() {
        let mut reg = DriverRegistry::new();
        reg.register("null", DriverFactory::Sensor(create_null_sensor));

        let mut hw = reg.create_sensor("null").expect("should create");
        assert_eq!(hw.status(), Status::Unknown);
        hw.configure(&HardwareInfo::new("null")).unwrap();
        assert_eq!(hw.status(), Status::Configured);
    }

    #[test]
    fn registry_driver_not_found() {
        let reg = DriverRegistry::new();
        assert!(matches!(
            reg.create_system("nonexistent"),
            Err(RegistryError::DriverNotFound(_))
        ));
    }

    #[test]
    fn registry_kind_mismatch() {
        let mut reg = DriverRegistry::new();
        reg.register("null", DriverFactory::Sensor(create_null_sensor));

        let err = reg.create_actuator("null").err().unwrap();
        assert_eq!(
            err,
            RegistryError::KindMismatch {
                name: "null".into(),
                expected: DriverKind::Actuator,
                found: DriverKind::Sensor,
            }
        );
        assert_eq!(
            err.to_string(),
            "Driver null is a sensor driver, expected actuator"
        );
    }

    #[test]
    fn registry_list_drivers() {
        let mut reg = DriverRegistry::new();
        reg.register("alpha", DriverFactory::Sensor(create_null_sensor));
        reg.register("beta", DriverFactory::Sensor(create_null_sensor));

        let mut names = reg.list_drivers();
        names.sort();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn registry_duplicate_panics() {
        let mut reg = DriverRegistry::new();
        reg.register("dup", DriverFactory::Sensor(create_null_sensor));
        reg.register("dup", DriverFactory::Sensor(create_null_sensor));
    }

    #[test]
    fn kind_parsing() {
        assert_eq!("system".parse::<DriverKind>().unwrap(), DriverKind::System);
        assert_eq!(DriverKind::Actuator.to_string(), "actuator");
        assert!(matches!(
            "gripper".parse::<DriverKind>(),
            Err(RegistryError::UnknownKind(_))
        ));
    }
}
