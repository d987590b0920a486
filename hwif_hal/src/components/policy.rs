//! Component configuration policies.
//!
//! A policy decides which interface lists a component accepts and may fill
//! in defaults. It runs before [`InterfaceSet`](super::InterfaceSet)
//! construction, which adds the structural checks every component shares
//! (non-empty, unique names).
//!
//! Policies are selected from a component's `class_type`:
//!
//! | class_type              | policy                         |
//! |-------------------------|--------------------------------|
//! | `joint`, empty          | `JointPolicy::Generic`         |
//! | `position_joint`        | `JointPolicy::SingleInterface` |
//! | `multi_interface_joint` | `JointPolicy::MultiCommand`    |
//! | `sensor`, empty         | `SensorPolicy::Generic`        |
//! | `force_torque_sensor`   | `SensorPolicy::ForceTorque`    |

use hwif_common::component_info::{ComponentInfo, InterfaceInfo};
use hwif_common::consts::{FORCE_TORQUE_INTERFACES, FRAME_ID_PARAMETER, HW_IF_POSITION};
use hwif_common::error::{HwError, HwResult};
use std::str::FromStr;

/// Class type of a joint without structural constraints.
pub const GENERIC_JOINT_CLASS: &str = "joint";
/// Class type of a single-interface position joint.
pub const POSITION_JOINT_CLASS: &str = "position_joint";
/// Class type of a joint needing several command interfaces.
pub const MULTI_INTERFACE_JOINT_CLASS: &str = "multi_interface_joint";
/// Class type of a sensor without structural constraints.
pub const GENERIC_SENSOR_CLASS: &str = "sensor";
/// Class type of a six-axis force/torque sensor.
pub const FORCE_TORQUE_SENSOR_CLASS: &str = "force_torque_sensor";

/// Command and state interface lists accepted by a policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInterfaces {
    /// Accepted command interfaces.
    pub command: Vec<InterfaceInfo>,
    /// Accepted state interfaces.
    pub state: Vec<InterfaceInfo>,
}

/// Configuration policy of a [`Joint`](super::Joint).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JointPolicy {
    /// Accept the declared interfaces as they are.
    #[default]
    Generic,
    /// At most one command and one state interface; an empty side gets
    /// `default_interface`.
    SingleInterface {
        /// Interface filled in for an empty side.
        default_interface: InterfaceInfo,
    },
    /// At least `min_command_interfaces` command interfaces.
    MultiCommand {
        /// Lower bound on declared command interfaces.
        min_command_interfaces: usize,
    },
}

impl JointPolicy {
    /// Single `position` interface with advisory bounds `[-1, 1]`.
    pub fn position() -> Self {
        Self::SingleInterface {
            default_interface: InterfaceInfo::new(HW_IF_POSITION).with_bounds(-1.0, 1.0),
        }
    }

    /// Two or more command interfaces.
    pub fn multi_interface() -> Self {
        Self::MultiCommand {
            min_command_interfaces: 2,
        }
    }

    /// Apply the policy to a component description.
    ///
    /// # Errors
    /// `HwError::Configuration` if the declared interfaces violate the policy.
    pub fn resolve(&self, info: &ComponentInfo) -> HwResult<ResolvedInterfaces> {
        let mut command = info.command_interfaces.clone();
        let mut state = info.state_interfaces.clone();

        match self {
            Self::Generic => {}
            Self::SingleInterface { default_interface } => {
                if command.len() > 1 || state.len() > 1 {
                    return Err(HwError::Configuration(format!(
                        "Joint {} allows at most one command and one state interface \
                         (got {} command, {} state)",
                        info.name,
                        command.len(),
                        state.len()
                    )));
                }
                if command.is_empty() {
                    command.push(default_interface.clone());
                }
                if state.is_empty() {
                    state.push(default_interface.clone());
                }
            }
            Self::MultiCommand {
                min_command_interfaces,
            } => {
                if command.len() < *min_command_interfaces {
                    return Err(HwError::Configuration(format!(
                        "Joint {} needs at least {} command interfaces (got {})",
                        info.name,
                        min_command_interfaces,
                        command.len()
                    )));
                }
            }
        }

        Ok(ResolvedInterfaces { command, state })
    }
}

impl FromStr for JointPolicy {
    type Err = HwError;

    fn from_str(class_type: &str) -> Result<Self, Self::Err> {
        match class_type {
            "" | GENERIC_JOINT_CLASS => Ok(Self::Generic),
            POSITION_JOINT_CLASS => Ok(Self::position()),
            MULTI_INTERFACE_JOINT_CLASS => Ok(Self::multi_interface()),
            other => Err(HwError::Configuration(format!(
                "Unknown joint class type: {other}"
            ))),
        }
    }
}

/// Configuration policy of a [`Sensor`](super::Sensor).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SensorPolicy {
    /// Accept the declared state interfaces as they are.
    #[default]
    Generic,
    /// Six-axis force/torque sensor.
    ///
    /// Requires a non-empty `frame_parameter`; an empty state list gets
    /// `force_x … torque_z`.
    ForceTorque {
        /// Parameter naming the sensor frame.
        frame_parameter: String,
    },
}

impl SensorPolicy {
    /// Force/torque policy keyed on `frame_id`.
    pub fn force_torque() -> Self {
        Self::ForceTorque {
            frame_parameter: FRAME_ID_PARAMETER.to_string(),
        }
    }

    /// Apply the policy to a component description's state interfaces.
    ///
    /// # Errors
    /// `HwError::Configuration` if the description violates the policy.
    pub fn resolve(&self, info: &ComponentInfo) -> HwResult<Vec<InterfaceInfo>> {
        let mut state = info.state_interfaces.clone();

        if let Self::ForceTorque { frame_parameter } = self {
            match info.parameter(frame_parameter) {
                Some(frame) if !frame.is_empty() => {}
                _ => {
                    return Err(HwError::Configuration(format!(
                        "Sensor {} requires a non-empty '{}' parameter",
                        info.name, frame_parameter
                    )));
                }
            }
            if state.is_empty() {
                state.extend(FORCE_TORQUE_INTERFACES.iter().map(|n| InterfaceInfo::new(*n)));
            }
        }

        Ok(state)
    }
}

impl FromStr for SensorPolicy {
    type Err = HwError;

    fn from_str(class_type: &str) -> Result<Self, Self::Err> {
        match class_type {
            "" | GENERIC_SENSOR_CLASS => Ok(Self::Generic),
            FORCE_TORQUE_SENSOR_CLASS => Ok(Self::force_torque()),
            other => Err(HwError::Configuration(format!(
                "Unknown sensor class type: {other}"
            ))),
        }
    }
}
