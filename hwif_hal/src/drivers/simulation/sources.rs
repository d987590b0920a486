//! Simulated signal sources shared by the simulation drivers.
//!
//! All storage is `Cell<f64>` so the drivers can export pointer-style handles
//! and still refresh values through `&self`.

use hwif_common::component_info::HardwareInfo;
use hwif_common::consts::{FORCE_TORQUE_INTERFACES, HW_IF_POSITION, HW_IF_VELOCITY};
use hwif_common::error::{HwError, HwResult};
use hwif_common::hardware::handle::{CommandHandle, StateHandle};
use hwif_common::hardware::status::StatusMachine;
use std::cell::Cell;
use std::str::FromStr;

/// Raw force/torque counts reported by every simulated sensor.
pub const FT_RAW_COUNTS: [f64; 6] = [1.34, 5.67, 8.21, 5.63, 5.78, 1.0];

/// Joint whose states follow the last commands.
#[derive(Debug)]
pub(super) struct LoopbackJoint {
    name: String,
    position_state: Cell<f64>,
    velocity_state: Cell<f64>,
    position_command: Cell<f64>,
    velocity_command: Cell<f64>,
}

impl LoopbackJoint {
    pub(super) fn new(name: impl Into<String>, initial_position: f64) -> Self {
        Self {
            name: name.into(),
            position_state: Cell::new(initial_position),
            velocity_state: Cell::new(0.0),
            position_command: Cell::new(initial_position),
            velocity_command: Cell::new(0.0),
        }
    }

    pub(super) fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn refresh(&self) {
        self.position_state.set(self.position_command.get());
        self.velocity_state.set(self.velocity_command.get());
    }

    fn state(&self, interface: &str) -> Option<&Cell<f64>> {
        match interface {
            HW_IF_POSITION => Some(&self.position_state),
            HW_IF_VELOCITY => Some(&self.velocity_state),
            _ => None,
        }
    }

    fn command(&self, interface: &str) -> Option<&Cell<f64>> {
        match interface {
            HW_IF_POSITION => Some(&self.position_command),
            HW_IF_VELOCITY => Some(&self.velocity_command),
            _ => None,
        }
    }

    pub(super) fn read(&self, interfaces: &[String], values: &mut [f64]) -> HwResult {
        self.refresh();
        for (value, interface) in values.iter_mut().zip(interfaces) {
            let slot = self
                .state(interface)
                .ok_or_else(|| unserved(&self.name, interface))?;
            *value = slot.get();
        }
        Ok(())
    }

    pub(super) fn write(&self, interfaces: &[String], values: &[f64]) -> HwResult {
        if let Some(interface) = interfaces.iter().find(|i| self.command(i).is_none()) {
            return Err(unserved(&self.name, interface));
        }
        for (&value, interface) in values.iter().zip(interfaces) {
            if let Some(slot) = self.command(interface) {
                slot.set(value);
            }
        }
        Ok(())
    }

    pub(super) fn state_handles(&self) -> [StateHandle<'_>; 2] {
        [
            StateHandle::new(&self.name, HW_IF_POSITION, &self.position_state),
            StateHandle::new(&self.name, HW_IF_VELOCITY, &self.velocity_state),
        ]
    }

    pub(super) fn command_handles(&self) -> [CommandHandle<'_>; 2] {
        [
            CommandHandle::new(&self.name, HW_IF_POSITION, &self.position_command),
            CommandHandle::new(&self.name, HW_IF_VELOCITY, &self.velocity_command),
        ]
    }
}

/// Six-axis force/torque source: fixed raw counts times a scale factor.
#[derive(Debug)]
pub(super) struct ForceTorqueSource {
    name: String,
    factor: f64,
    values: [Cell<f64>; 6],
}

impl ForceTorqueSource {
    pub(super) fn new(name: impl Into<String>, factor: f64) -> Self {
        Self {
            name: name.into(),
            factor,
            values: Default::default(),
        }
    }

    pub(super) fn refresh(&self) {
        for (cell, raw) in self.values.iter().zip(FT_RAW_COUNTS) {
            cell.set(raw * self.factor);
        }
    }

    pub(super) fn read(&self, interfaces: &[String], values: &mut [f64]) -> HwResult {
        self.refresh();
        for (value, interface) in values.iter_mut().zip(interfaces) {
            let axis = FORCE_TORQUE_INTERFACES
                .iter()
                .position(|n| *n == interface.as_str())
                .ok_or_else(|| unserved(&self.name, interface))?;
            *value = self.values[axis].get();
        }
        Ok(())
    }

    pub(super) fn state_handles(&self) -> impl Iterator<Item = StateHandle<'_>> {
        FORCE_TORQUE_INTERFACES
            .iter()
            .zip(&self.values)
            .map(|(interface, cell)| StateHandle::new(&self.name, *interface, cell))
    }
}

/// Parse an optional hardware parameter.
pub(super) fn parameter<T: FromStr>(info: &HardwareInfo, key: &str) -> HwResult<Option<T>> {
    info.parameter(key)
        .map(|raw| {
            raw.trim().parse().map_err(|_| {
                HwError::Configuration(format!(
                    "Hardware {}: cannot parse parameter {key}='{raw}'",
                    info.name
                ))
            })
        })
        .transpose()
}

/// Parse a required hardware parameter.
pub(super) fn required_parameter<T: FromStr>(info: &HardwareInfo, key: &str) -> HwResult<T> {
    parameter(info, key)?.ok_or_else(|| {
        HwError::Configuration(format!(
            "Hardware {}: missing parameter {key}",
            info.name
        ))
    })
}

/// Cycle primitives are only served in `Started`.
pub(super) fn ensure_started(status: &StatusMachine) -> HwResult {
    if status.is_started() {
        Ok(())
    } else {
        Err(HwError::Driver(format!(
            "Driver is {}, cycles need STARTED",
            status.status()
        )))
    }
}

fn unserved(component: &str, interface: &str) -> HwError {
    HwError::Driver(format!("{component} has no simulated interface {interface}"))
}
