//! Simulated multi-joint system with force/torque sensing.

use super::sources::{ForceTorqueSource, LoopbackJoint, ensure_started, parameter};
use super::sensor::BINARY_TO_VOLTAGE_PARAMETER;
use hwif_common::component_info::HardwareInfo;
use hwif_common::error::{HwError, HwResult};
use hwif_common::hardware::driver::{HardwareLifecycle, InterfaceRequest, SystemHardwareInterface};
use hwif_common::hardware::handle::{CommandHandle, StateHandle};
use hwif_common::hardware::status::StatusMachine;
use hwif_common::types::Status;
use tracing::info;

/// Comma-separated start positions, one per joint.
pub const INITIAL_POSITIONS_PARAMETER: &str = "initial_positions";

/// One loop-back joint per `HardwareInfo::joints` entry and one force/torque
/// source per `HardwareInfo::sensors` entry.
///
/// Requests are routed by `InterfaceRequest::position`. The force/torque
/// scale factor defaults to `1.0`.
#[derive(Debug, Default)]
pub struct SimulatedSystem {
    status: StatusMachine,
    joints: Vec<LoopbackJoint>,
    sensors: Vec<ForceTorqueSource>,
}

impl SimulatedSystem {
    /// Unconfigured system.
    pub fn new() -> Self {
        Self::default()
    }

    fn joint(&self, request: &InterfaceRequest<'_>) -> HwResult<&LoopbackJoint> {
        self.joints
            .get(request.position)
            .ok_or_else(|| no_component("joint", request))
    }

    fn sensor(&self, request: &InterfaceRequest<'_>) -> HwResult<&ForceTorqueSource> {
        self.sensors
            .get(request.position)
            .ok_or_else(|| no_component("sensor", request))
    }
}

fn no_component(kind: &str, request: &InterfaceRequest<'_>) -> HwError {
    HwError::Driver(format!(
        "No simulated {kind} at position {} ({})",
        request.position, request.component
    ))
}

fn initial_positions(info: &HardwareInfo) -> HwResult<Vec<f64>> {
    let Some(raw) = info.parameter(INITIAL_POSITIONS_PARAMETER) else {
        return Ok(vec![0.0; info.joints.len()]);
    };
    let positions = raw
        .split(',')
        .map(|item| item.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            HwError::Configuration(format!(
                "System {}: bad {INITIAL_POSITIONS_PARAMETER} '{raw}': {e}",
                info.name
            ))
        })?;
    if positions.len() != info.joints.len() {
        return Err(HwError::Configuration(format!(
            "System {}: {} initial positions for {} joints",
            info.name,
            positions.len(),
            info.joints.len()
        )));
    }
    Ok(positions)
}

impl HardwareLifecycle for SimulatedSystem {
    fn configure(&mut self, info: &HardwareInfo) -> HwResult {
        let positions = initial_positions(info)?;
        let factor = parameter::<f64>(info, BINARY_TO_VOLTAGE_PARAMETER)?.unwrap_or(1.0);

        self.joints = info
            .joints
            .iter()
            .zip(positions)
            .map(|(joint, position)| LoopbackJoint::new(&joint.name, position))
            .collect();
        self.sensors = info
            .sensors
            .iter()
            .map(|sensor| ForceTorqueSource::new(&sensor.name, factor))
            .collect();
        self.status.configured();
        info!(
            hardware = %info.name,
            joints = self.joints.len(),
            sensors = self.sensors.len(),
            "Simulated system configured"
        );
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
        let joints = self.joints.iter().flat_map(|joint| joint.state_handles());
        let sensors = self.sensors.iter().flat_map(|sensor| sensor.state_handles());
        joints.chain(sensors).collect()
    }

    fn export_command_handles(&self) -> Vec<CommandHandle<'_>> {
        self.joints
            .iter()
            .flat_map(|joint| joint.command_handles())
            .collect()
    }

    fn read(&self) -> HwResult {
        ensure_started(&self.status)?;
        self.joints.iter().for_each(LoopbackJoint::refresh);
        self.sensors.iter().for_each(ForceTorqueSource::refresh);
        Ok(())
    }
}

impl SystemHardwareInterface for SimulatedSystem {
    fn read_sensor(&mut self, request: InterfaceRequest<'_>, values: &mut [f64]) -> HwResult {
        ensure_started(&self.status)?;
        self.sensor(&request)?.read(request.interfaces, values)
    }

    fn read_joint(&mut self, request: InterfaceRequest<'_>, values: &mut [f64]) -> HwResult {
        ensure_started(&self.status)?;
        self.joint(&request)?.read(request.interfaces, values)
    }

    fn write_joint(&mut self, request: InterfaceRequest<'_>, values: &[f64]) -> HwResult {
        ensure_started(&self.status)?;
        let joint = self.joint(&request)?;
        if joint.name() != request.component {
            return Err(HwError::Driver(format!(
                "Joint at position {} is {}, not {}",
                request.position,
                joint.name(),
                request.component
            )));
        }
        joint.write(request.interfaces, values)
    }
}
