//! Built-in drivers.
//!
//! - [`simulation`] - Software simulation drivers for development and testing
//!
//! # Adding New Drivers
//!
//! 1. Create a new submodule under `drivers/`
//! 2. Implement `HardwareLifecycle` plus one role trait from
//!    `hwif_common::hardware::driver`
//! 3. Register a tagged `DriverFactory` in [`register_all_drivers`]

pub mod simulation;

use crate::driver_registry::{DriverFactory, DriverRegistry};

/// Register every built-in driver with `registry`.
pub fn register_all_drivers(registry: &mut DriverRegistry) {
    registry.register(
        simulation::ACTUATOR_DRIVER,
        DriverFactory::Actuator(simulation::create_actuator),
    );
    registry.register(
        simulation::SENSOR_DRIVER,
        DriverFactory::Sensor(simulation::create_sensor),
    );
    registry.register(
        simulation::SYSTEM_DRIVER,
        DriverFactory::System(simulation::create_system),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_drivers_registered() {
        let mut registry = DriverRegistry::new();
        register_all_drivers(&mut registry);

        let mut names = registry.list_drivers();
        names.sort();
        assert_eq!(
            names,
            [
                simulation::ACTUATOR_DRIVER,
                simulation::SENSOR_DRIVER,
                simulation::SYSTEM_DRIVER
            ]
        );
        assert!(registry.create_system(simulation::SYSTEM_DRIVER).is_ok());
        assert!(registry.create_actuator(simulation::SYSTEM_DRIVER).is_err());
    }
}
