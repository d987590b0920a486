//! # HWIF HAL Library
//!
//! Hardware abstraction core: joint and sensor components with validated,
//! name-indexed interface storage, and driver adapters that move values
//! between drivers and components.
//!
//! Drivers implement the traits defined in `hwif_common::hardware::driver`.
//!
//! # Module Structure
//!
//! - [`components`] - `Joint`, `Sensor`, configuration policies, storage strategies
//! - [`hardware`] - Actuator/sensor/system driver adapters
//! - [`driver_registry`] - Driver factory registration
//! - [`drivers`] - Built-in simulation drivers
//! - [`config`] - Runtime configuration of the demo binary
//! - [`runtime`] - Cycle loop of the demo binary
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                           hwif_hal                               │
//! │  ┌─────────────┐    ┌──────────────┐    ┌─────────────────────┐  │
//! │  │ Joint/Sensor│◄──►│  Adapters    │◄───│  Driver Registry    │  │
//! │  │ (components)│    │  (hardware)  │    │                     │  │
//! │  └─────────────┘    └──────┬───────┘    └─────────────────────┘  │
//! │                            │                                     │
//! │                            ▼                                     │
//! │                ┌──────────────────────────┐                      │
//! │                │ Actuator/Sensor/System   │ (trait objects)      │
//! │                │ HardwareInterface        │                      │
//! │                └──────────────────────────┘                      │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use hwif_common::component_info::{ComponentInfo, HardwareInfo};
//! use hwif_hal::components::{Joint, JointPolicy};
//! use hwif_hal::driver_registry::DriverRegistry;
//! use hwif_hal::drivers::register_all_drivers;
//!
//! let mut registry = DriverRegistry::new();
//! register_all_drivers(&mut registry);
//!
//! let mut info = HardwareInfo::new("act");
//! info.joints.push(ComponentInfo::new("joint1"));
//!
//! let mut actuator = registry.create_actuator("simulation/actuator").unwrap();
//! actuator.configure(&info).unwrap();
//! actuator.start().unwrap();
//!
//! let mut joint = Joint::new(JointPolicy::position());
//! joint.configure(&info.joints[0]).unwrap();
//! joint.set_command(&[0.5], &["position"]).unwrap();
//! actuator.write_joint(&joint).unwrap();
//! actuator.read_joint(&mut joint).unwrap();
//!
//! let mut position = [0.0];
//! joint.get_state(&mut position, &["position"]).unwrap();
//! assert_eq!(position, [0.5]);
//! ```

#![deny(missing_docs)]

pub mod components;
pub mod config;
pub mod driver_registry;
pub mod drivers;
pub mod hardware;
pub mod runtime;

// Re-export key types for convenience
pub use crate::components::{Joint, JointPolicy, Sensor, SensorPolicy};
pub use crate::driver_registry::{DriverFactory, DriverKind, DriverRegistry, RegistryError};
pub use crate::hardware::{ActuatorHardware, SensorHardware, SystemHardware};
pub use crate::runtime::{Runtime, RuntimeError};
