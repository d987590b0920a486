//! Simulated force/torque sensor hardware.

use super::sources::{ForceTorqueSource, ensure_started, required_parameter};
use hwif_common::component_info::HardwareInfo;
use hwif_common::error::{HwError, HwResult};
use hwif_common::hardware::driver::{HardwareLifecycle, InterfaceRequest, SensorHardwareInterface};
use hwif_common::hardware::handle::StateHandle;
use hwif_common::hardware::status::StatusMachine;
use hwif_common::types::Status;
use tracing::info;

/// Scale from raw counts to reported values.
pub const BINARY_TO_VOLTAGE_PARAMETER: &str = "binary_to_voltage_factor";

/// One force/torque source per sensor listed in `HardwareInfo::sensors`.
///
/// Requests are routed by `InterfaceRequest::position`.
#[derive(Debug, Default)]
pub struct SimulatedSensor {
    status: StatusMachine,
    sources: Vec<ForceTorqueSource>,
}

impl SimulatedSensor {
    /// Unconfigured sensor hardware.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HardwareLifecycle for SimulatedSensor {
    fn configure(&mut self, info: &HardwareInfo) -> HwResult {
        let factor: f64 = required_parameter(info, BINARY_TO_VOLTAGE_PARAMETER)?;
        if info.sensors.is_empty() {
            return Err(HwError::Configuration(format!(
                "Sensor hardware {} lists no sensors",
                info.name
            )));
        }

        self.sources = info
            .sensors
            .iter()
            .map(|sensor| ForceTorqueSource::new(&sensor.name, factor))
            .collect();
        self.status.configured();
        info!(
            hardware = %info.name,
            sensors = self.sources.len(),
            factor,
            "Simulated sensor configured"
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
        self.sources.iter().flat_map(|source| source.state_handles()).collect()
    }

    fn read(&self) -> HwResult {
        ensure_started(&self.status)?;
        self.sources.iter().for_each(ForceTorqueSource::refresh);
        Ok(())
    }
}

impl SensorHardwareInterface for SimulatedSensor {
    fn read_sensor(&mut self, request: InterfaceRequest<'_>, values: &mut [f64]) -> HwResult {
        ensure_started(&self.status)?;
        let source = self.sources.get(request.position).ok_or_else(|| {
            HwError::Driver(format!(
                "No simulated sensor at position {} ({})",
                request.position, request.component
            ))
        })?;
        source.read(request.interfaces, values)
    }
}
