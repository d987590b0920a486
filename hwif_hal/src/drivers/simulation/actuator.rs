//! Simulated single-joint actuator.

use super::sources::{LoopbackJoint, ensure_started, parameter};
use hwif_common::component_info::HardwareInfo;
use hwif_common::error::{HwError, HwResult};
use hwif_common::hardware::driver::{
    ActuatorHardwareInterface, HardwareLifecycle, InterfaceRequest,
};
use hwif_common::hardware::handle::{CommandHandle, StateHandle};
use hwif_common::hardware::status::StatusMachine;
use hwif_common::types::Status;
use tracing::info;

/// Parameter holding the joint's start position.
pub const INITIAL_POSITION_PARAMETER: &str = "initial_position";

/// Loop-back actuator: `position`/`velocity` states follow the commands.
///
/// The joint is named after the single entry of `HardwareInfo::joints`, or
/// after the hardware itself when no joint is listed.
#[derive(Debug)]
pub struct SimulatedActuator {
    status: StatusMachine,
    joint: LoopbackJoint,
}

impl SimulatedActuator {
    /// Unconfigured actuator.
    pub fn new() -> Self {
        Self {
            status: StatusMachine::new(),
            joint: LoopbackJoint::new("", 0.0),
        }
    }
}

impl Default for SimulatedActuator {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareLifecycle for SimulatedActuator {
    fn configure(&mut self, info: &HardwareInfo) -> HwResult {
        if info.joints.len() > 1 {
            return Err(HwError::Configuration(format!(
                "Actuator {} drives one joint, {} listed",
                info.name,
                info.joints.len()
            )));
        }
        let initial = parameter::<f64>(info, INITIAL_POSITION_PARAMETER)?.unwrap_or(0.0);
        let name = info.joints.first().map_or(info.name.as_str(), |j| j.name.as_str());

        self.joint = LoopbackJoint::new(name, initial);
        self.status.configured();
        info!(hardware = %info.name, joint = name, initial, "Simulated actuator configured");
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

    fn export_state_handles(&self) -> Vec<StateHandle<'_>> {
        self.joint.state_handles().into()
    }

    fn export_command_handles(&self) -> Vec<CommandHandle<'_>> {
        self.joint.command_handles().into()
    }

    fn read(&self) -> HwResult {
        ensure_started(&self.status)?;
        self.joint.refresh();
        Ok(())
    }
}

impl ActuatorHardwareInterface for SimulatedActuator {
    fn read_joint(&mut self, request: InterfaceRequest<'_>, values: &mut [f64]) -> HwResult {
        ensure_started(&self.status)?;
        self.joint.read(request.interfaces, values)
    }

    fn write_joint(&mut self, request: InterfaceRequest<'_>, values: &[f64]) -> HwResult {
        ensure_started(&self.status)?;
        self.joint.write(request.interfaces, values)
    }
}
