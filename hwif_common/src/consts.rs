//! Well-known interface names and system defaults.
//!
//! Single source of truth for interface naming. Names are matched exactly
//! (case-sensitive) everywhere in the workspace.

/// Position interface (rad or m).
pub const HW_IF_POSITION: &str = "position";

/// Velocity interface (rad/s or m/s).
pub const HW_IF_VELOCITY: &str = "velocity";

/// Effort interface (Nm or N).
pub const HW_IF_EFFORT: &str = "effort";

/// Force/torque state interfaces in canonical order.
pub const FORCE_TORQUE_INTERFACES: [&str; 6] = [
    "force_x", "force_y", "force_z", "torque_x", "torque_y", "torque_z",
];

/// Parameter naming the reference frame of a force/torque sensor.
pub const FRAME_ID_PARAMETER: &str = "frame_id";

/// Default control cycle time in microseconds (1 kHz).
pub const CYCLE_TIME_US: u32 = 1000;

/// Default runtime configuration path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/hwif/hardware.toml";
