//! Joint component: command and state interfaces of one actuated joint.

use super::access::{InterfaceRead, InterfaceWrite};
use super::interface_set::InterfaceSet;
use super::policy::JointPolicy;
use hwif_common::component_info::{ComponentInfo, InterfaceInfo};
use hwif_common::error::HwResult;
use std::collections::HashMap;

/// Named, validated command and state storage of a joint.
///
/// A joint starts unconfigured with empty interface sets. [`Joint::configure`]
/// runs the joint's [`JointPolicy`] and swaps in both sets only when all
/// checks pass; a failed configure leaves the previous sets and values
/// untouched.
///
/// # Example
///
/// ```rust
/// use hwif_common::component_info::ComponentInfo;
/// use hwif_hal::components::{Joint, JointPolicy};
///
/// let mut joint = Joint::new(JointPolicy::position());
/// joint.configure(&ComponentInfo::new("joint1")).unwrap();
///
/// joint.set_command(&[0.5], &["position"]).unwrap();
/// let mut out = [0.0];
/// joint.get_command(&mut out, &["position"]).unwrap();
/// assert_eq!(out, [0.5]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Joint {
    name: String,
    policy: JointPolicy,
    configured: bool,
    command: InterfaceSet,
    state: InterfaceSet,
    parameters: HashMap<String, String>,
}

impl Joint {
    /// Unconfigured joint governed by `policy`.
    pub fn new(policy: JointPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Select the policy from `info.class_type` and configure.
    ///
    /// # Errors
    /// `HwError::Configuration` on an unknown class type or a rejected
    /// interface list.
    pub fn from_info(info: &ComponentInfo) -> HwResult<Self> {
        let mut joint = Self::new(info.class_type.parse()?);
        joint.configure(info)?;
        Ok(joint)
    }

    /// Component name from the last successful configure.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Policy applied by [`Joint::configure`].
    pub fn policy(&self) -> &JointPolicy {
        &self.policy
    }

    /// True after the first successful configure.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Validate `info` against the policy and replace both interface sets.
    ///
    /// Storage of the new sets is zero-initialized.
    ///
    /// # Errors
    /// `HwError::Configuration` if the policy rejects the interfaces or a set
    /// contains an empty or duplicate name. Nothing changes on error.
    pub fn configure(&mut self, info: &ComponentInfo) -> HwResult {
        let resolved = self.policy.resolve(info)?;
        let command = InterfaceSet::new(resolved.command)?;
        let state = InterfaceSet::new(resolved.state)?;

        self.name.clone_from(&info.name);
        self.parameters.clone_from(&info.parameters);
        self.command = command;
        self.state = state;
        self.configured = true;
        Ok(())
    }

    /// Component parameters from the last successful configure.
    pub fn parameters(&self) -> &HashMap<String, String> {
        &self.parameters
    }

    // ─── Descriptive accessors ──────────────────────────────────────

    /// Configured command interfaces.
    pub fn command_interfaces(&self) -> &[InterfaceInfo] {
        self.command.interfaces()
    }

    /// Configured state interfaces.
    pub fn state_interfaces(&self) -> &[InterfaceInfo] {
        self.state.interfaces()
    }

    /// Command interface names in storage order.
    pub fn command_interface_names(&self) -> &[String] {
        self.command.names()
    }

    /// State interface names in storage order.
    pub fn state_interface_names(&self) -> &[String] {
        self.state.names()
    }

    // ─── Command side ───────────────────────────────────────────────

    /// Write `values[i]` to command interface `names[i]`.
    ///
    /// # Errors
    /// `InterfaceNotProvided`, `InterfaceNotFound` or
    /// `InterfaceValueSizeNotEqual`, checked in that order.
    pub fn set_command<N: AsRef<str>>(&mut self, values: &[f64], names: &[N]) -> HwResult {
        self.command.set(values, names)
    }

    /// Read command interfaces `names` into `values`, in request order.
    ///
    /// # Errors
    /// As [`Joint::set_command`].
    pub fn get_command<N: AsRef<str>>(&self, values: &mut [f64], names: &[N]) -> HwResult {
        self.command.get(values, names)
    }

    /// Overwrite all commands, in storage order.
    ///
    /// # Errors
    /// `InterfaceValueSizeNotEqual` unless `values` covers every interface.
    pub fn set_all_commands(&mut self, values: &[f64]) -> HwResult {
        self.command.set_all(values)
    }

    /// Copy all commands, in storage order.
    ///
    /// # Errors
    /// `InterfaceValueSizeNotEqual` unless `values` covers every interface.
    pub fn get_all_commands(&self, values: &mut [f64]) -> HwResult {
        self.command.get_all(values)
    }

    // ─── State side ─────────────────────────────────────────────────

    /// Write `values[i]` to state interface `names[i]`.
    ///
    /// # Errors
    /// As [`Joint::set_command`].
    pub fn set_state<N: AsRef<str>>(&mut self, values: &[f64], names: &[N]) -> HwResult {
        self.state.set(values, names)
    }

    /// Read state interfaces `names` into `values`, in request order.
    ///
    /// # Errors
    /// As [`Joint::set_command`].
    pub fn get_state<N: AsRef<str>>(&self, values: &mut [f64], names: &[N]) -> HwResult {
        self.state.get(values, names)
    }

    /// Overwrite all states, in storage order.
    ///
    /// # Errors
    /// `InterfaceValueSizeNotEqual` unless `values` covers every interface.
    pub fn set_all_states(&mut self, values: &[f64]) -> HwResult {
        self.state.set_all(values)
    }

    /// Copy all states, in storage order.
    ///
    /// # Errors
    /// `InterfaceValueSizeNotEqual` unless `values` covers every interface.
    pub fn get_all_states(&self, values: &mut [f64]) -> HwResult {
        self.state.get_all(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwif_common::consts::{HW_IF_EFFORT, HW_IF_POSITION, HW_IF_VELOCITY};
    use hwif_common::error::HwError;
    use hwif_common::types::ReturnType;

    #[test]
    fn position_joint_defaults_then_rejects_second_command() {
        let mut joint = Joint::new(JointPolicy::position());
        let mut info = ComponentInfo::new("joint1");
        joint.configure(&info).unwrap();

        assert!(joint.is_configured());
        assert_eq!(joint.command_interface_names(), [HW_IF_POSITION]);
        assert_eq!(joint.state_interface_names(), [HW_IF_POSITION]);
        assert_eq!(joint.command_interfaces()[0].min, Some(-1.0));

        joint.set_command(&[0.3], &[HW_IF_POSITION]).unwrap();

        info = info
            .with_command_interface(InterfaceInfo::new(HW_IF_POSITION))
            .with_command_interface(InterfaceInfo::new(HW_IF_VELOCITY));
        let result = joint.configure(&info);
        assert_eq!(ReturnType::of(&result), ReturnType::Error);

        // previous configuration and values survive
        assert_eq!(joint.command_interface_names(), [HW_IF_POSITION]);
        let mut out = [0.0];
        joint.get_command(&mut out, &[HW_IF_POSITION]).unwrap();
        assert_eq!(out, [0.3]);
    }

    #[test]
    fn reconfigure_zeroes_storage() {
        let mut joint = Joint::new(JointPolicy::position());
        let info = ComponentInfo::new("joint1");
        joint.configure(&info).unwrap();
        joint.set_all_states(&[2.5]).unwrap();

        joint.configure(&info).unwrap();
        let mut out = [9.0];
        joint.get_all_states(&mut out).unwrap();
        assert_eq!(out, [0.0]);
    }

    #[test]
    fn multi_interface_joint_access() {
        let info = ComponentInfo::new("joint1")
            .with_class_type("multi_interface_joint")
            .with_command_interface(InterfaceInfo::new(HW_IF_POSITION))
            .with_command_interface(InterfaceInfo::new(HW_IF_VELOCITY))
            .with_command_interface(InterfaceInfo::new(HW_IF_EFFORT))
            .with_state_interface(InterfaceInfo::new(HW_IF_POSITION))
            .with_state_interface(InterfaceInfo::new(HW_IF_VELOCITY));
        let mut joint = Joint::from_info(&info).unwrap();
        assert_eq!(joint.name(), "joint1");

        joint
            .set_command(&[1.2, 0.4], &[HW_IF_POSITION, HW_IF_VELOCITY])
            .unwrap();
        let mut out = [0.0; 2];
        joint
            .get_command(&mut out, &[HW_IF_VELOCITY, HW_IF_POSITION])
            .unwrap();
        assert_eq!(out, [0.4, 1.2]);

        let mut all = [0.0; 3];
        joint.get_all_commands(&mut all).unwrap();
        assert_eq!(all, [1.2, 0.4, 0.0]);

        assert_eq!(
            joint.set_command(&[1.0, 2.0], &[HW_IF_POSITION, "torque"]),
            Err(HwError::InterfaceNotFound("torque".into()))
        );
        assert_eq!(
            joint.set_state(&[1.0], &[HW_IF_POSITION, HW_IF_VELOCITY]),
            Err(HwError::InterfaceValueSizeNotEqual {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            joint.set_all_states(&[1.0]),
            Err(HwError::InterfaceValueSizeNotEqual {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn multi_interface_joint_rejects_single_command() {
        let info = ComponentInfo::new("joint1")
            .with_class_type("multi_interface_joint")
            .with_command_interface(InterfaceInfo::new(HW_IF_POSITION));
        assert!(matches!(
            Joint::from_info(&info),
            Err(HwError::Configuration(_))
        ));
    }

    #[test]
    fn duplicate_interface_rejected() {
        let mut joint = Joint::default();
        let info = ComponentInfo::new("joint1")
            .with_state_interface(InterfaceInfo::new(HW_IF_VELOCITY))
            .with_state_interface(InterfaceInfo::new(HW_IF_VELOCITY));
        assert!(joint.configure(&info).is_err());
        assert!(!joint.is_configured());
    }

    #[test]
    fn unconfigured_joint_reports_addressing_errors() {
        let mut joint = Joint::default();
        assert_eq!(
            joint.set_command(&[1.0], &[HW_IF_POSITION]),
            Err(HwError::InterfaceNotFound(HW_IF_POSITION.into()))
        );
        let none: &[&str] = &[];
        assert_eq!(
            joint.get_state(&mut [], none),
            Err(HwError::InterfaceNotProvided)
        );
        assert!(joint.get_all_commands(&mut []).is_ok());
    }
}
