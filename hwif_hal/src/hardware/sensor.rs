//! Adapter for sensor drivers.

use super::{Scratch, read_sensor_with};
use crate::components::Sensor;
use hwif_common::component_info::HardwareInfo;
use hwif_common::error::HwResult;
use hwif_common::hardware::driver::SensorHardwareInterface;
use hwif_common::hardware::handle::StateHandle;
use hwif_common::types::Status;
use tracing::debug;

/// Owns one sensor driver.
pub struct SensorHardware {
    driver: Box<dyn SensorHardwareInterface>,
    scratch: Scratch,
}

impl SensorHardware {
    /// Take ownership of `driver`.
    pub fn new(driver: Box<dyn SensorHardwareInterface>) -> Self {
        Self {
            driver,
            scratch: Scratch::default(),
        }
    }

    /// Forward to the driver's `configure`.
    pub fn configure(&mut self, info: &HardwareInfo) -> HwResult {
        debug!(hardware = %info.name, "Configuring sensor hardware");
        self.driver.configure(info)
    }

    /// Forward to the driver's `start`.
    pub fn start(&mut self) -> HwResult {
        debug!("Starting sensor hardware");
        self.driver.start()
    }

    /// Forward to the driver's `stop`.
    pub fn stop(&mut self) -> HwResult {
        debug!("Stopping sensor hardware");
        self.driver.stop()
    }

    /// Driver status.
    pub fn status(&self) -> Status {
        self.driver.status()
    }

    /// Driver state handles. They borrow the adapter.
    pub fn export_state_handles(&self) -> Vec<StateHandle<'_>> {
        self.driver.export_state_handles()
    }

    /// Refresh handle-backed state storage.
    pub fn read(&self) -> HwResult {
        self.driver.read()
    }

    /// Fill every sensor's state interfaces, in iteration order.
    ///
    /// `position` in each driver request is the sensor's index in `sensors`.
    ///
    /// # Errors
    /// The first failure, unchanged. Later sensors are not read; earlier ones
    /// keep their new values.
    pub fn read_sensors<'s>(&mut self, sensors: impl IntoIterator<Item = &'s mut Sensor>) -> HwResult {
        for (position, sensor) in sensors.into_iter().enumerate() {
            let driver = &mut self.driver;
            read_sensor_with(&mut self.scratch, position, sensor, |request, values| {
                driver.read_sensor(request, values)
            })?;
        }
        Ok(())
    }
}
