//! Sensor component: state-only interfaces.

use super::access::{InterfaceRead, InterfaceWrite};
use super::interface_set::InterfaceSet;
use super::policy::SensorPolicy;
use hwif_common::component_info::{ComponentInfo, InterfaceInfo};
use hwif_common::error::{HwError, HwResult};
use std::collections::HashMap;

/// Named, validated state storage of a sensor.
///
/// Configure semantics match [`Joint`](super::Joint): policy first, then an
/// atomic swap of the state set. A sensor never has command interfaces.
#[derive(Debug, Clone, Default)]
pub struct Sensor {
    name: String,
    policy: SensorPolicy,
    configured: bool,
    state: InterfaceSet,
    parameters: HashMap<String, String>,
}

impl Sensor {
    /// Unconfigured sensor governed by `policy`.
    pub fn new(policy: SensorPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Select the policy from `info.class_type` and configure.
    ///
    /// # Errors
    /// `HwError::Configuration` on an unknown class type or rejected
    /// interfaces.
    pub fn from_info(info: &ComponentInfo) -> HwResult<Self> {
        let mut sensor = Self::new(info.class_type.parse()?);
        sensor.configure(info)?;
        Ok(sensor)
    }

    /// Component name from the last successful configure.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Policy applied by [`Sensor::configure`].
    pub fn policy(&self) -> &SensorPolicy {
        &self.policy
    }

    /// True after the first successful configure.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Validate `info` and replace the state set with zeroed storage.
    ///
    /// # Errors
    /// `HwError::Configuration` if `info` declares command interfaces, the
    /// policy rejects it, or a name is empty or duplicated. Nothing changes
    /// on error.
    pub fn configure(&mut self, info: &ComponentInfo) -> HwResult {
        if !info.command_interfaces.is_empty() {
            return Err(HwError::Configuration(format!(
                "Sensor {} declares {} command interfaces",
                info.name,
                info.command_interfaces.len()
            )));
        }
        let state = InterfaceSet::new(self.policy.resolve(info)?)?;

        self.name.clone_from(&info.name);
        self.parameters.clone_from(&info.parameters);
        self.state = state;
        self.configured = true;
        Ok(())
    }

    /// Component parameters from the last successful configure.
    pub fn parameters(&self) -> &HashMap<String, String> {
        &self.parameters
    }

    /// Configured state interfaces.
    pub fn state_interfaces(&self) -> &[InterfaceInfo] {
        self.state.interfaces()
    }

    /// State interface names in storage order.
    pub fn state_interface_names(&self) -> &[String] {
        self.state.names()
    }

    /// Write `values[i]` to state interface `names[i]`.
    ///
    /// # Errors
    /// `InterfaceNotProvided`, `InterfaceNotFound` or
    /// `InterfaceValueSizeNotEqual`, checked in that order.
    pub fn set_state<N: AsRef<str>>(&mut self, values: &[f64], names: &[N]) -> HwResult {
        self.state.set(values, names)
    }

    /// Read state interfaces `names` into `values`, in request order.
    ///
    /// # Errors
    /// As [`Sensor::set_state`].
    pub fn get_state<N: AsRef<str>>(&self, values: &mut [f64], names: &[N]) -> HwResult {
        self.state.get(values, names)
    }

    /// Overwrite all states, in storage order.
    ///
    /// # Errors
    /// `InterfaceValueSizeNotEqual` unless `values` covers every interface.
    pub fn set_all_states(&mut self, values: &[f64]) -> HwResult {
        self.state.set_all(values)
    }

    /// Copy all states, in storage order.
    ///
    /// # Errors
    /// `InterfaceValueSizeNotEqual` unless `values` covers every interface.
    pub fn get_all_states(&self, values: &mut [f64]) -> HwResult {
        self.state.get_all(values)
    }
}
