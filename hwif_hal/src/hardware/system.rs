//! Adapter for system drivers serving several joints and sensors.

use super::{Scratch, read_joint_with, read_sensor_with, write_joint_with};
use crate::components::{Joint, Sensor};
use hwif_common::component_info::HardwareInfo;
use hwif_common::error::HwResult;
use hwif_common::hardware::driver::SystemHardwareInterface;
use hwif_common::hardware::handle::{CommandHandle, StateHandle};
use hwif_common::types::Status;
use tracing::debug;

/// Owns one system driver.
pub struct SystemHardware {
    driver: Box<dyn SystemHardwareInterface>,
    scratch: Scratch,
}

impl SystemHardware {
    /// Take ownership of `driver`.
    pub fn new(driver: Box<dyn SystemHardwareInterface>) -> Self {
        Self {
            driver,
            scratch: Scratch::default(),
        }
    }

    /// Forward to the driver's `configure`.
    pub fn configure(&mut self, info: &HardwareInfo) -> HwResult {
        debug!(
            hardware = %info.name,
            joints = info.joints.len(),
            sensors = info.sensors.len(),
            "Configuring system"
        );
        self.driver.configure(info)
    }

    /// Forward to the driver's `start`.
    pub fn start(&mut self) -> HwResult {
        debug!("Starting system");
        self.driver.start()
    }

    /// Forward to the driver's `stop`.
    pub fn stop(&mut self) -> HwResult {
        debug!("Stopping system");
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

    /// Fill every sensor's state interfaces, in iteration order.
    ///
    /// # Errors
    /// The first failure, unchanged. Later sensors are not read.
    pub fn read_sensors<'s>(&mut self, sensors: impl IntoIterator<Item = &'s mut Sensor>) -> HwResult {
        for (position, sensor) in sensors.into_iter().enumerate() {
            let driver = &mut self.driver;
            read_sensor_with(&mut self.scratch, position, sensor, |request, values| {
                driver.read_sensor(request, values)
            })?;
        }
        Ok(())
    }

    /// Fill every joint's state interfaces, in iteration order.
    ///
    /// `position` in each driver request is the joint's index in `joints`.
    ///
    /// # Errors
    /// The first failure, unchanged. Later joints are not read.
    pub fn read_joints<'j>(&mut self, joints: impl IntoIterator<Item = &'j mut Joint>) -> HwResult {
        for (position, joint) in joints.into_iter().enumerate() {
            let driver = &mut self.driver;
            read_joint_with(&mut self.scratch, position, joint, |request, values| {
                driver.read_joint(request, values)
            })?;
        }
        Ok(())
    }

    /// Hand every joint's commands to the driver, in iteration order.
    ///
    /// # Errors
    /// The first failure, unchanged. Later joints are not written; earlier
    /// writes are not rolled back.
    pub fn write_joints<'j>(&mut self, joints: impl IntoIterator<Item = &'j Joint>) -> HwResult {
        for (position, joint) in joints.into_iter().enumerate() {
            let driver = &mut self.driver;
            write_joint_with(&mut self.scratch, position, joint, |request, values| {
                driver.write_joint(request, values)
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{JointPolicy, SensorPolicy};
    use hwif_common::component_info::{ComponentInfo, InterfaceInfo};
    use hwif_common::consts::{FRAME_ID_PARAMETER, HW_IF_POSITION, HW_IF_VELOCITY};
    use hwif_common::error::HwError;
    use hwif_common::hardware::driver::{HardwareLifecycle, InterfaceRequest};
    use hwif_common::hardware::status::StatusMachine;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Log {
        reads: Vec<usize>,
        writes: Vec<(usize, Vec<f64>)>,
    }

    /// One position source per joint, one force/torque source.
    struct RecordingSystem {
        status: StatusMachine,
        joint_sources: Vec<f64>,
        ft_source: [f64; 6],
        fail_joint: Option<usize>,
        log: Rc<RefCell<Log>>,
    }

    impl HardwareLifecycle for RecordingSystem {
        fn configure(&mut self, _info: &HardwareInfo) -> HwResult {
            self.status.configured();
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
    }

    impl SystemHardwareInterface for RecordingSystem {
        fn read_sensor(&mut self, _request: InterfaceRequest<'_>, values: &mut [f64]) -> HwResult {
            values.copy_from_slice(&self.ft_source[..values.len()]);
            Ok(())
        }

        fn read_joint(&mut self, request: InterfaceRequest<'_>, values: &mut [f64]) -> HwResult {
            self.log.borrow_mut().reads.push(request.position);
            if self.fail_joint == Some(request.position) {
                return Err(HwError::Driver("encoder fault".into()));
            }
            values.fill(self.joint_sources[request.position]);
            Ok(())
        }

        fn write_joint(&mut self, request: InterfaceRequest<'_>, values: &[f64]) -> HwResult {
            self.log
                .borrow_mut()
                .writes
                .push((request.position, values.to_vec()));
            if self.fail_joint == Some(request.position) {
                return Err(HwError::Driver("amplifier fault".into()));
            }
            Ok(())
        }
    }

    fn system(fail_joint: Option<usize>) -> (SystemHardware, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        let driver = RecordingSystem {
            status: StatusMachine::new(),
            joint_sources: vec![1.1, 2.2, 3.3],
            ft_source: [1.34, 5.67, 8.21, 5.63, 5.78, 1.0],
            fail_joint,
            log: Rc::clone(&log),
        };
        (SystemHardware::new(Box::new(driver)), log)
    }

    fn joints(count: usize) -> Vec<Joint> {
        (0..count)
            .map(|i| {
                let mut joint = Joint::new(JointPolicy::position());
                joint
                    .configure(&ComponentInfo::new(format!("joint{}", i + 1)))
                    .unwrap();
                joint
            })
            .collect()
    }

    #[test]
    fn two_joints_one_sensor() {
        let (mut hw, log) = system(None);
        hw.configure(&HardwareInfo::new("arm")).unwrap();
        hw.start().unwrap();

        let mut joints = joints(2);
        let mut sensor = Sensor::new(SensorPolicy::force_torque());
        sensor
            .configure(&ComponentInfo::new("tcp_fts").with_parameter(FRAME_ID_PARAMETER, "tcp_link"))
            .unwrap();

        hw.read_joints(&mut joints).unwrap();
        hw.read_sensors([&mut sensor]).unwrap();

        let mut out = [0.0];
        joints[0].get_state(&mut out, &[HW_IF_POSITION]).unwrap();
        assert_eq!(out, [1.1]);
        joints[1].get_state(&mut out, &[HW_IF_POSITION]).unwrap();
        assert_eq!(out, [2.2]);
        sensor.get_state(&mut out, &["torque_x"]).unwrap();
        assert_eq!(out, [5.63]);

        joints[0].set_all_commands(&[0.5]).unwrap();
        joints[1].set_all_commands(&[-0.5]).unwrap();
        hw.write_joints(&joints).unwrap();

        let log = log.borrow();
        assert_eq!(log.reads, [0, 1]);
        assert_eq!(log.writes, [(0, vec![0.5]), (1, vec![-0.5])]);
    }

    #[test]
    fn read_joints_fail_fast() {
        let (mut hw, log) = system(Some(1));
        let mut joints = joints(3);

        assert_eq!(
            hw.read_joints(&mut joints),
            Err(HwError::Driver("encoder fault".into()))
        );
        assert_eq!(log.borrow().reads, [0, 1]);

        let mut out = [0.0];
        joints[0].get_all_states(&mut out).unwrap();
        assert_eq!(out, [1.1]);
        joints[2].get_all_states(&mut out).unwrap();
        assert_eq!(out, [0.0]);
    }

    #[test]
    fn write_joints_fail_fast() {
        let (mut hw, log) = system(Some(0));
        let joints = joints(3);

        assert!(hw.write_joints(&joints).is_err());
        assert_eq!(log.borrow().writes.len(), 1);
    }

    #[test]
    fn joint_without_interfaces_reports_not_provided() {
        let (mut hw, log) = system(None);
        let commands_only = ComponentInfo::new("joint0")
            .with_command_interface(InterfaceInfo::new(HW_IF_POSITION))
            .with_command_interface(InterfaceInfo::new(HW_IF_VELOCITY));
        let mut joint = Joint::new(JointPolicy::multi_interface());
        joint.configure(&commands_only).unwrap();

        let mut joints = joints(2);
        joints.insert(0, joint);
        assert_eq!(
            hw.read_joints(&mut joints),
            Err(HwError::InterfaceNotProvided)
        );
        assert_eq!(log.borrow().reads, [0]);

        let unconfigured = [Joint::default(), joints.remove(1)];
        assert_eq!(
            hw.write_joints(&unconfigured),
            Err(HwError::InterfaceNotProvided)
        );
        assert!(log.borrow().writes.is_empty());
    }
}
