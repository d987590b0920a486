//! Adapter for single-joint actuator drivers.

use super::{Scratch, read_joint_with, write_joint_with};
use crate::components::Joint;
use hwif_common::component_info::HardwareInfo;
use hwif_common::error::HwResult;
use hwif_common::hardware::driver::ActuatorHardwareInterface;
use hwif_common::hardware::handle::{CommandHandle, StateHandle};
use hwif_common::types::Status;
use tracing::debug;

/// Owns one actuator driver.
pub struct ActuatorHardware {
    driver: Box<dyn ActuatorHardwareInterface>,
    scratch: Scratch,
}

impl ActuatorHardware {
    /// Take ownership of `driver`.
    pub fn new(driver: Box<dyn ActuatorHardwareInterface>) -> Self {
        Self {
            driver,
            scratch: Scratch::default(),
        }
    }

    /// Forward to the driver's `configure`.
    pub fn configure(&mut self, info: &HardwareInfo) -> HwResult {
        debug!(hardware = %info.name, "Configuring actuator");
        self.driver.configure(info)
    }

    /// Forward to the driver's `start`.
    pub fn start(&mut self) -> HwResult {
        debug!("Starting actuator");
        self.driver.start()
    }

    /// Forward to the driver's `stop`.
    pub fn stop(&mut self) -> HwResult {
        debug!("Stopping actuator");
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

    /// Driver command handles. They borrow the adapter.
    pub fn export_command_handles(&self) -> Vec<CommandHandle<'_>> {
        self.driver.export_command_handles()
    }

    /// Refresh handle-backed state storage.
    pub fn read(&self) -> HwResult {
        self.driver.read()
    }

    /// Push handle-backed command storage.
    pub fn write(&self) -> HwResult {
        self.driver.write()
    }

    /// Fill `joint`'s state interfaces from the driver.
    ///
    /// # Errors
    /// Driver errors and joint addressing errors, unchanged.
    pub fn read_joint(&mut self, joint: &mut Joint) -> HwResult {
        let driver = &mut self.driver;
        read_joint_with(&mut self.scratch, 0, joint, |request, values| {
            driver.read_joint(request, values)
        })
    }

    /// Hand `joint`'s current commands to the driver.
    ///
    /// # Errors
    /// Driver errors and joint addressing errors, unchanged.
    pub fn write_joint(&mut self, joint: &Joint) -> HwResult {
        let driver = &mut self.driver;
        write_joint_with(&mut self.scratch, 0, joint, |request, values| {
            driver.write_joint(request, values)
        })
    }
}
