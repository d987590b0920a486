//! Driver adapters.
//!
//! Each adapter owns exactly one driver behind its role trait and gives it a
//! stable surface:
//!
//! - lifecycle calls (`configure`, `start`, `stop`, `status`) delegate 1:1
//! - cycle calls move values between the driver and caller-owned
//!   [`Joint`](crate::components::Joint) / [`Sensor`](crate::components::Sensor)
//!   components
//! - collection calls walk the components in caller order and stop at the
//!   first failure, leaving earlier components updated
//!
//! Errors from the driver or a component pass through unchanged, including
//! `InterfaceNotProvided` for a component with no interfaces on the side
//! being cycled.

pub mod actuator;
pub mod sensor;
pub mod system;

pub use actuator::ActuatorHardware;
pub use sensor::SensorHardware;
pub use system::SystemHardware;

use crate::components::{Joint, Sensor};
use hwif_common::error::HwResult;
use hwif_common::hardware::driver::InterfaceRequest;

/// Reusable name and value buffers of one adapter.
///
/// Buffers grow to the widest component seen and are then reused, so a warm
/// adapter does not allocate during read/write cycles.
#[derive(Debug, Default)]
struct Scratch {
    names: Vec<String>,
    values: Vec<f64>,
}

impl Scratch {
    /// Copy `names` in and size the value buffer to match.
    fn load(&mut self, names: &[String]) -> (&[String], &mut [f64]) {
        self.names.truncate(names.len());
        let kept = self.names.len();
        for (dst, src) in self.names.iter_mut().zip(names) {
            dst.clone_from(src);
        }
        self.names.extend_from_slice(&names[kept..]);

        self.values.clear();
        self.values.resize(names.len(), 0.0);
        (&self.names, &mut self.values)
    }
}

/// Driver fills the joint's state interfaces.
fn read_joint_with<F>(scratch: &mut Scratch, position: usize, joint: &mut Joint, read: F) -> HwResult
where
    F: FnOnce(InterfaceRequest<'_>, &mut [f64]) -> HwResult,
{
    let (names, values) = scratch.load(joint.state_interface_names());
    read(
        InterfaceRequest {
            component: joint.name(),
            position,
            interfaces: names,
        },
        values,
    )?;
    joint.set_state(values, names)
}

/// Driver consumes the joint's current commands.
fn write_joint_with<F>(scratch: &mut Scratch, position: usize, joint: &Joint, write: F) -> HwResult
where
    F: FnOnce(InterfaceRequest<'_>, &[f64]) -> HwResult,
{
    let (names, values) = scratch.load(joint.command_interface_names());
    joint.get_command(values, names)?;
    write(
        InterfaceRequest {
            component: joint.name(),
            position,
            interfaces: names,
        },
        values,
    )
}

/// Driver fills the sensor's state interfaces.
fn read_sensor_with<F>(
    scratch: &mut Scratch,
    position: usize,
    sensor: &mut Sensor,
    read: F,
) -> HwResult
where
    F: FnOnce(InterfaceRequest<'_>, &mut [f64]) -> HwResult,
{
    let (names, values) = scratch.load(sensor.state_interface_names());
    read(
        InterfaceRequest {
            component: sensor.name(),
            position,
            interfaces: names,
        },
        values,
    )?;
    sensor.set_state(values, names)
}
