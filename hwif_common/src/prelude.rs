//! Prelude module for common re-exports.
//!
//! ```rust
//! use hwif_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, SharedConfig};

// ─── Interface catalog ──────────────────────────────────────────────
pub use crate::component_info::{ComponentInfo, HardwareInfo, InterfaceInfo};
pub use crate::consts::{
    FORCE_TORQUE_INTERFACES, FRAME_ID_PARAMETER, HW_IF_EFFORT, HW_IF_POSITION, HW_IF_VELOCITY,
};

// ─── Results & status ───────────────────────────────────────────────
pub use crate::error::{HwError, HwResult};
pub use crate::types::{ReturnType, Status, Transition};

// ─── Driver contract ────────────────────────────────────────────────
pub use crate::hardware::driver::{
    ActuatorHardwareInterface, HardwareLifecycle, InterfaceRequest, SensorHardwareInterface,
    SystemHardwareInterface,
};
pub use crate::hardware::handle::{BoundHandle, CommandHandle, StateHandle};
pub use crate::hardware::status::StatusMachine;
