//! Runtime configuration of the demo binary.
//!
//! # TOML Example
//!
//! ```toml
//! cycle_time_us = 1000
//! cycles = 5000
//!
//! [shared]
//! log_level = "info"
//! service_name = "hwif-demo"
//!
//! [[hardware]]
//! name = "arm"
//! type = "system"
//! class_type = "simulation/system"
//!
//! [hardware.hardware_parameters]
//! initial_positions = "0.0, 0.5"
//!
//! [[hardware.joints]]
//! name = "joint1"
//! class_type = "position_joint"
//! ```

use crate::driver_registry::DriverKind;
use hwif_common::component_info::HardwareInfo;
use hwif_common::config::{ConfigError, SharedConfig};
use hwif_common::consts::CYCLE_TIME_US;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn default_cycle_time_us() -> u32 {
    CYCLE_TIME_US
}

/// Top-level runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Shared logging and identity settings.
    pub shared: SharedConfig,

    /// Control cycle period in microseconds.
    #[serde(default = "default_cycle_time_us")]
    pub cycle_time_us: u32,

    /// Stop after this many cycles. `None` runs until interrupted.
    #[serde(default)]
    pub cycles: Option<u64>,

    /// Hardware units, started in this order.
    #[serde(default)]
    pub hardware: Vec<HardwareInfo>,
}

impl RuntimeConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    /// `ConfigError::ValidationError` on a zero cycle time, an unknown
    /// hardware type, an empty or duplicate hardware name, or a component
    /// name used twice anywhere in the runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;

        if self.cycle_time_us == 0 {
            return Err(ConfigError::ValidationError(
                "cycle_time_us must be greater than 0".to_string(),
            ));
        }

        let mut hardware_names = HashSet::new();
        let mut component_names = HashSet::new();
        for hardware in &self.hardware {
            if hardware.name.is_empty() {
                return Err(ConfigError::ValidationError(
                    "hardware name cannot be empty".to_string(),
                ));
            }
            if !hardware_names.insert(hardware.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "Duplicate hardware name: {}",
                    hardware.name
                )));
            }
            let kind = hardware_kind(hardware)?;
            if kind == DriverKind::Sensor && !hardware.joints.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "Sensor hardware '{}' cannot drive joints",
                    hardware.name
                )));
            }
            if kind == DriverKind::Actuator && !hardware.sensors.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "Actuator hardware '{}' cannot read sensors",
                    hardware.name
                )));
            }
            for component in hardware.joints.iter().chain(&hardware.sensors) {
                if !component_names.insert(component.name.as_str()) {
                    return Err(ConfigError::ValidationError(format!(
                        "Duplicate component name: {}",
                        component.name
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Role of `hardware`, parsed from its `type` field.
///
/// # Errors
/// `ConfigError::ValidationError` for anything but actuator, sensor or system.
pub fn hardware_kind(hardware: &HardwareInfo) -> Result<DriverKind, ConfigError> {
    hardware.hardware_type.parse().map_err(|e| {
        ConfigError::ValidationError(format!("Hardware '{}': {e}", hardware.name))
    })
}
