//! Adapter integration tests.
//!
//! Builds the simulation drivers through the registry and drives them with
//! real components: lifecycle transitions, component read/write cycles and
//! pointer-style handle access.

use hwif_common::component_info::{ComponentInfo, HardwareInfo};
use hwif_common::consts::{FRAME_ID_PARAMETER, HW_IF_POSITION, HW_IF_VELOCITY};
use hwif_common::error::HwError;
use hwif_common::types::{Status, Transition};
use hwif_hal::components::{
    CommandHandleSet, InterfaceRead, InterfaceWrite, Joint, JointPolicy, Sensor, SensorPolicy,
    StateHandleSet,
};
use hwif_hal::driver_registry::{DriverKind, DriverRegistry, RegistryError};
use hwif_hal::drivers::register_all_drivers;
use hwif_hal::drivers::simulation::{
    ACTUATOR_DRIVER, BINARY_TO_VOLTAGE_PARAMETER, FT_RAW_COUNTS, INITIAL_POSITION_PARAMETER,
    INITIAL_POSITIONS_PARAMETER, SENSOR_DRIVER, SYSTEM_DRIVER,
};

fn registry() -> DriverRegistry {
    let mut registry = DriverRegistry::new();
    register_all_drivers(&mut registry);
    registry
}

fn arm_info() -> HardwareInfo {
    let mut info =
        HardwareInfo::new("arm").with_parameter(INITIAL_POSITIONS_PARAMETER, "-1.575, -0.7543");
    info.hardware_type = "system".to_string();
    info.class_type = SYSTEM_DRIVER.to_string();
    info.joints.push(ComponentInfo::new("joint1").with_class_type("position_joint"));
    info.joints.push(ComponentInfo::new("joint2").with_class_type("position_joint"));
    info.sensors.push(
        ComponentInfo::new("tcp_fts")
            .with_class_type("force_torque_sensor")
            .with_parameter(FRAME_ID_PARAMETER, "tcp_link"),
    );
    info
}

fn position_joint(name: &str) -> Joint {
    let mut joint = Joint::new(JointPolicy::position());
    joint.configure(&ComponentInfo::new(name)).unwrap();
    joint
}

fn ft_sensor(name: &str) -> Sensor {
    let mut sensor = Sensor::new(SensorPolicy::force_torque());
    sensor
        .configure(&ComponentInfo::new(name).with_parameter(FRAME_ID_PARAMETER, "tcp_link"))
        .unwrap();
    sensor
}

#[test]
fn registry_checks_role() {
    let registry = registry();
    assert!(registry.create_actuator(ACTUATOR_DRIVER).is_ok());
    assert!(matches!(
        registry.create_actuator(SYSTEM_DRIVER),
        Err(RegistryError::KindMismatch {
            expected: DriverKind::Actuator,
            found: DriverKind::System,
            ..
        })
    ));
    assert!(matches!(
        registry.create_sensor("ethercat/sensor"),
        Err(RegistryError::DriverNotFound(_))
    ));
}

#[test]
fn system_lifecycle() {
    let mut system = registry().create_system(SYSTEM_DRIVER).unwrap();
    assert_eq!(system.status(), Status::Unknown);
    assert_eq!(
        system.start(),
        Err(HwError::Lifecycle {
            transition: Transition::Start,
            status: Status::Unknown
        })
    );

    system.configure(&arm_info()).unwrap();
    assert_eq!(system.status(), Status::Configured);
    assert!(system.stop().is_err());
    assert_eq!(system.status(), Status::Configured);

    system.start().unwrap();
    assert_eq!(system.status(), Status::Started);
    assert!(system.start().is_err());

    system.stop().unwrap();
    assert_eq!(system.status(), Status::Stopped);
    system.start().unwrap();
    assert_eq!(system.status(), Status::Started);
}

#[test]
fn system_cycles_components() {
    let info = arm_info();
    let mut system = registry().create_system(SYSTEM_DRIVER).unwrap();
    system.configure(&info).unwrap();

    let mut joints: Vec<Joint> = info
        .joints
        .iter()
        .map(|j| Joint::from_info(j).unwrap())
        .collect();
    let mut sensors: Vec<Sensor> = info
        .sensors
        .iter()
        .map(|s| Sensor::from_info(s).unwrap())
        .collect();

    // Not started yet.
    assert!(system.read_joints(&mut joints).is_err());

    system.start().unwrap();
    system.read_joints(&mut joints).unwrap();
    system.read_sensors(&mut sensors).unwrap();

    let mut out = [0.0];
    joints[0].get_all_states(&mut out).unwrap();
    assert_eq!(out, [-1.575]);
    joints[1].get_all_states(&mut out).unwrap();
    assert_eq!(out, [-0.7543]);
    sensors[0].get_state(&mut out, &["force_y"]).unwrap();
    assert_eq!(out, [FT_RAW_COUNTS[1]]);

    joints[1].set_all_commands(&[0.25]).unwrap();
    system.write_joints(&joints).unwrap();
    system.read_joints(&mut joints).unwrap();
    joints[1].get_state(&mut out, &[HW_IF_POSITION]).unwrap();
    assert_eq!(out, [0.25]);

    // Positions follow caller order; the driver refuses a joint at the wrong slot.
    joints.swap(0, 1);
    assert!(matches!(
        system.write_joints(&joints),
        Err(HwError::Driver(_))
    ));
}

#[test]
fn system_handles_share_driver_storage() {
    let mut system = registry().create_system(SYSTEM_DRIVER).unwrap();
    system.configure(&arm_info()).unwrap();
    system.start().unwrap();

    let states = StateHandleSet::for_component("joint2", system.export_state_handles()).unwrap();
    let mut commands =
        CommandHandleSet::for_component("joint2", system.export_command_handles()).unwrap();
    let fts = StateHandleSet::for_component("tcp_fts", system.export_state_handles()).unwrap();
    assert_eq!(states.len(), 2);
    assert_eq!(fts.len(), 6);

    let mut out = [0.0; 2];
    states.get(&mut out, &[HW_IF_POSITION, HW_IF_VELOCITY]).unwrap();
    assert_eq!(out, [-0.7543, 0.0]);

    commands.set(&[0.5, 0.1], &[HW_IF_POSITION, HW_IF_VELOCITY]).unwrap();
    system.read().unwrap();
    states.get_all(&mut out).unwrap();
    assert_eq!(out, [0.5, 0.1]);

    let mut force_x = [0.0];
    fts.get(&mut force_x, &["force_x"]).unwrap();
    assert_eq!(force_x, [FT_RAW_COUNTS[0]]);

    assert_eq!(
        commands.set(&[0.0], &["effort"]),
        Err(HwError::InterfaceNotFound("effort".into()))
    );
}

#[test]
fn actuator_loops_commands_back() {
    let mut actuator = registry().create_actuator(ACTUATOR_DRIVER).unwrap();
    let mut info = HardwareInfo::new("gripper").with_parameter(INITIAL_POSITION_PARAMETER, "0.4");
    info.joints.push(ComponentInfo::new("finger"));
    actuator.configure(&info).unwrap();
    actuator.start().unwrap();

    let mut joint = position_joint("finger");
    actuator.read_joint(&mut joint).unwrap();
    let mut out = [0.0];
    joint.get_all_states(&mut out).unwrap();
    assert_eq!(out, [0.4]);

    joint.set_all_commands(&[-0.2]).unwrap();
    actuator.write_joint(&joint).unwrap();
    actuator.read_joint(&mut joint).unwrap();
    joint.get_all_states(&mut out).unwrap();
    assert_eq!(out, [-0.2]);

    actuator.stop().unwrap();
    assert!(actuator.write_joint(&joint).is_err());
}

#[test]
fn sensor_hardware_scales_counts() {
    let mut hardware = registry().create_sensor(SENSOR_DRIVER).unwrap();
    let mut info = HardwareInfo::new("wrist");
    info.sensors.push(ComponentInfo::new("ft_a"));
    info.sensors.push(ComponentInfo::new("ft_b"));
    assert!(matches!(
        hardware.configure(&info),
        Err(HwError::Configuration(_))
    ));
    assert_eq!(hardware.status(), Status::Unknown);

    let info = info.with_parameter(BINARY_TO_VOLTAGE_PARAMETER, "2.0");
    hardware.configure(&info).unwrap();
    hardware.start().unwrap();

    let mut sensors = vec![ft_sensor("ft_a"), ft_sensor("ft_b")];
    hardware.read_sensors(&mut sensors).unwrap();

    let mut values = [0.0; 6];
    for sensor in &sensors {
        sensor.get_all_states(&mut values).unwrap();
        let expected = FT_RAW_COUNTS.map(|raw| raw * 2.0);
        assert_eq!(values, expected);
    }
}
