//! Interface catalog: descriptive records produced by an external loader.
//!
//! - `InterfaceInfo` - One named interface with advisory bounds
//! - `ComponentInfo` - A joint or sensor with its declared interfaces
//! - `HardwareInfo` - A hardware unit (driver) and the components it serves
//!
//! All types derive serde so they can be read from a TOML hardware
//! description; this crate never parses description text itself beyond that.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named scalar interface, e.g. `position` or `force_x`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InterfaceInfo {
    /// Interface name, matched exactly.
    pub name: String,

    /// Advisory lower bound. Not enforced by the core.
    #[serde(default)]
    pub min: Option<f64>,

    /// Advisory upper bound. Not enforced by the core.
    #[serde(default)]
    pub max: Option<f64>,
}

impl InterfaceInfo {
    /// Interface without bounds.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min: None,
            max: None,
        }
    }

    /// Attach advisory bounds.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// Description of a joint or sensor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentInfo {
    /// Component name (unique within a hardware description).
    pub name: String,

    /// Component type, e.g. "joint" or "sensor".
    #[serde(rename = "type", default)]
    pub component_type: String,

    /// Class selecting the configuration policy, e.g. "position_joint".
    #[serde(default)]
    pub class_type: String,

    /// Writable interfaces, in declaration order.
    #[serde(default)]
    pub command_interfaces: Vec<InterfaceInfo>,

    /// Readable interfaces, in declaration order.
    #[serde(default)]
    pub state_interfaces: Vec<InterfaceInfo>,

    /// Free-form key/value parameters.
    #[serde(default)]
    pub parameters: HashMap<String, String>,
}

impl ComponentInfo {
    /// Empty component description with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the class type.
    pub fn with_class_type(mut self, class_type: impl Into<String>) -> Self {
        self.class_type = class_type.into();
        self
    }

    /// Append a command interface.
    pub fn with_command_interface(mut self, interface: InterfaceInfo) -> Self {
        self.command_interfaces.push(interface);
        self
    }

    /// Append a state interface.
    pub fn with_state_interface(mut self, interface: InterfaceInfo) -> Self {
        self.state_interfaces.push(interface);
        self
    }

    /// Set a parameter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Look up a parameter.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }
}

/// Description of one hardware unit, handed to a driver's `configure()`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HardwareInfo {
    /// Hardware name.
    pub name: String,

    /// Hardware kind: "actuator", "sensor" or "system".
    #[serde(rename = "type", default)]
    pub hardware_type: String,

    /// Driver class, resolved by an external registry.
    #[serde(default)]
    pub class_type: String,

    /// Driver-specific parameters.
    #[serde(default)]
    pub hardware_parameters: HashMap<String, String>,

    /// Joints driven by this hardware, in cycle order.
    #[serde(default)]
    pub joints: Vec<ComponentInfo>,

    /// Sensors read by this hardware, in cycle order.
    #[serde(default)]
    pub sensors: Vec<ComponentInfo>,
}

impl HardwareInfo {
    /// Empty hardware description with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set a hardware parameter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.hardware_parameters.insert(key.into(), value.into());
        self
    }

    /// Look up a hardware parameter.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.hardware_parameters.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{HW_IF_POSITION, HW_IF_VELOCITY};

    #[test]
    fn component_builder() {
        let info = ComponentInfo::new("joint1")
            .with_class_type("position_joint")
            .with_command_interface(InterfaceInfo::new(HW_IF_POSITION).with_bounds(-1.0, 1.0))
            .with_parameter("max_position", "3.14");

        assert_eq!(info.name, "joint1");
        assert_eq!(info.command_interfaces.len(), 1);
        assert_eq!(info.command_interfaces[0].min, Some(-1.0));
        assert_eq!(info.parameter("max_position"), Some("3.14"));
        assert_eq!(info.parameter("min_position"), None);
    }

    #[test]
    fn hardware_info_from_toml() {
        let toml_str = r#"
name = "arm"
type = "system"
class_type = "simulation/system"

[hardware_parameters]
initial_positions = "0.1, 0.2"

[[joints]]
name = "joint1"
type = "joint"
class_type = "multi_interface_joint"
command_interfaces = [
    { name = "position", min = -3.14, max = 3.14 },
    { name = "velocity" },
]

[[sensors]]
name = "tcp_fts"
type = "sensor"
class_type = "force_torque_sensor"
parameters = { frame_id = "tcp_link" }
"#;

        let info: HardwareInfo = toml::from_str(toml_str).unwrap();
        assert_eq!(info.hardware_type, "system");
        assert_eq!(info.parameter("initial_positions"), Some("0.1, 0.2"));
        assert_eq!(info.joints.len(), 1);
        assert_eq!(info.joints[0].command_interfaces[0].max, Some(3.14));
        assert_eq!(info.joints[0].command_interfaces[1].name, HW_IF_VELOCITY);
        assert!(info.joints[0].command_interfaces[1].min.is_none());
        assert!(info.joints[0].state_interfaces.is_empty());
        assert_eq!(info.sensors[0].parameter("frame_id"), Some("tcp_link"));
    }
}
