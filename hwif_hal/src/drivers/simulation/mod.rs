//! Simulation drivers.
//!
//! Software stand-ins for real hardware, used by the demo runtime and by
//! tests. Joints loop commands back into states; sensors report fixed raw
//! force/torque counts scaled by a factor.
//!
//! | Registry name         | Driver               | Role     |
//! |-----------------------|----------------------|----------|
//! | `simulation/actuator` | [`SimulatedActuator`] | actuator |
//! | `simulation/sensor`   | [`SimulatedSensor`]   | sensor   |
//! | `simulation/system`   | [`SimulatedSystem`]   | system   |

mod actuator;
mod sensor;
mod sources;
mod system;

pub use actuator::{INITIAL_POSITION_PARAMETER, SimulatedActuator};
pub use sensor::{BINARY_TO_VOLTAGE_PARAMETER, SimulatedSensor};
pub use sources::FT_RAW_COUNTS;
pub use system::{INITIAL_POSITIONS_PARAMETER, SimulatedSystem};

use hwif_common::hardware::driver::{
    ActuatorHardwareInterface, SensorHardwareInterface, SystemHardwareInterface,
};

/// Registry name of the simulated actuator.
pub const ACTUATOR_DRIVER: &str = "simulation/actuator";
/// Registry name of the simulated sensor hardware.
pub const SENSOR_DRIVER: &str = "simulation/sensor";
/// Registry name of the simulated system.
pub const SYSTEM_DRIVER: &str = "simulation/system";

/// Factory function for [`SimulatedActuator`].
pub fn create_actuator() -> Box<dyn ActuatorHardwareInterface> {
    Box::new(SimulatedActuator::new())
}

/// Factory function for [`SimulatedSensor`].
pub fn create_sensor() -> Box<dyn SensorHardwareInterface> {
    Box::new(SimulatedSensor::new())
}

/// Factory function for [`SimulatedSystem`].
pub fn create_system() -> Box<dyn SystemHardwareInterface> {
    Box::new(SimulatedSystem::new())
}
