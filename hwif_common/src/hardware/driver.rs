//! Hardware driver contract.
//!
//! This module defines:
//! - `HardwareLifecycle` trait - configure/start/stop/status shared by all drivers
//! - `ActuatorHardwareInterface` - single-joint drivers
//! - `SensorHardwareInterface` - sensor-only drivers
//! - `SystemHardwareInterface` - drivers serving many joints and sensors
//! - `InterfaceRequest` - the per-component addressing passed to cycle primitives
//!
//! Concrete drivers live outside this crate. Adapters and components depend
//! only on these traits, never on a driver's concrete type.

use crate::component_info::HardwareInfo;
use crate::error::HwResult;
use crate::hardware::handle::{CommandHandle, StateHandle};
use crate::types::Status;

/// Addressing for one component in a read/write cycle.
///
/// `interfaces` lists the names whose values the driver must produce or
/// consume, in the order of the accompanying value slice. `position` is the
/// component's index in the caller-ordered collection of this cycle.
#[derive(Debug, Clone, Copy)]
pub struct InterfaceRequest<'a> {
    /// Component name, e.g. "joint1".
    pub component: &'a str,
    /// Index of the component in the current collection.
    pub position: usize,
    /// Interface names, parallel to the value slice.
    pub interfaces: &'a [String],
}

/// Lifecycle surface common to every driver kind.
///
/// # Lifecycle
///
/// 1. `configure()` - validate `HardwareInfo`; success forces `Configured`
/// 2. `start()` - `Configured | Stopped → Started`
/// 3. cycle primitives of the role trait, repeatedly
/// 4. `stop()` - `Started → Stopped`
///
/// Drivers normally delegate the transition rules to
/// [`StatusMachine`](crate::hardware::status::StatusMachine).
pub trait HardwareLifecycle {
    /// Validate and apply the hardware description.
    ///
    /// # Errors
    /// `HwError::Configuration` if parameters are missing or malformed. The
    /// status must stay unchanged on failure.
    fn configure(&mut self, info: &HardwareInfo) -> HwResult;

    /// Enter `Started`.
    fn start(&mut self) -> HwResult;

    /// Enter `Stopped`.
    fn stop(&mut self) -> HwResult;

    /// Current lifecycle status. Pure read.
    fn status(&self) -> Status;

    /// Export read-only handles into the driver's own state storage.
    ///
    /// Default: the driver exports nothing.
    fn export_state_handles(&self) -> Vec<StateHandle<'_>> {
        Vec::new()
    }

    /// Export writable handles into the driver's own command storage.
    ///
    /// Default: the driver exports nothing.
    fn export_command_handles(&self) -> Vec<CommandHandle<'_>> {
        Vec::new()
    }

    /// Refresh exported state storage from hardware.
    ///
    /// Cycle primitive of the handle-based access path. Takes `&self` so it
    /// can run while exported handles are alive; storage behind handles is
    /// interior-mutable. Default: nothing to refresh.
    fn read(&self) -> HwResult {
        Ok(())
    }

    /// Push exported command storage to hardware. Default: nothing to push.
    fn write(&self) -> HwResult {
        Ok(())
    }
}

/// Driver for a single actuated joint.
pub trait ActuatorHardwareInterface: HardwareLifecycle {
    /// Produce `values[i]` for state interface `request.interfaces[i]`.
    ///
    /// `values.len() == request.interfaces.len()` on every call.
    fn read_joint(&mut self, request: InterfaceRequest<'_>, values: &mut [f64]) -> HwResult;

    /// Consume `values[i]` for command interface `request.interfaces[i]`.
    fn write_joint(&mut self, request: InterfaceRequest<'_>, values: &[f64]) -> HwResult;
}

/// Driver for one or more sensors.
pub trait SensorHardwareInterface: HardwareLifecycle {
    /// Produce `values[i]` for state interface `request.interfaces[i]`.
    fn read_sensor(&mut self, request: InterfaceRequest<'_>, values: &mut [f64]) -> HwResult;
}

/// Driver for a complete system: many joints and sensors behind one bus.
pub trait SystemHardwareInterface: HardwareLifecycle {
    /// Produce sensor state values, see [`SensorHardwareInterface::read_sensor`].
    fn read_sensor(&mut self, request: InterfaceRequest<'_>, values: &mut [f64]) -> HwResult;

    /// Produce joint state values, see [`ActuatorHardwareInterface::read_joint`].
    fn read_joint(&mut self, request: InterfaceRequest<'_>, values: &mut [f64]) -> HwResult;

    /// Consume joint command values, see [`ActuatorHardwareInterface::write_joint`].
    fn write_joint(&mut self, request: InterfaceRequest<'_>, values: &[f64]) -> HwResult;
}
