//! Result and lifecycle status codes.
//!
//! - `ReturnType` - Wire-level result code of every fallible operation
//! - `Status` - Lifecycle status of a driver-bearing object
//! - `Transition` - Lifecycle transition requested by a caller

use crate::error::HwResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result code of a hardware operation.
///
/// Rust callers work with [`HwResult`]; `ReturnType` is the flat code an
/// outer layer (logs, IPC, tests) reports. Every `HwError` maps onto exactly
/// one non-`Ok` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnType {
    /// Operation succeeded.
    Ok,
    /// Configuration, lifecycle or driver failure.
    Error,
    /// A requested interface name is not configured.
    InterfaceNotFound,
    /// The interface name list was empty.
    InterfaceNotProvided,
    /// Value count does not match the interface count.
    InterfaceValueSizeNotEqual,
}

impl ReturnType {
    /// Code of a complete operation result.
    pub fn of<T>(result: &HwResult<T>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(e) => e.return_type(),
        }
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ok => "OK",
            Self::Error => "ERROR",
            Self::InterfaceNotFound => "INTERFACE_NOT_FOUND",
            Self::InterfaceNotProvided => "INTERFACE_NOT_PROVIDED",
            Self::InterfaceValueSizeNotEqual => "INTERFACE_VALUE_SIZE_NOT_EQUAL",
        };
        f.write_str(s)
    }
}

/// Lifecycle status of a driver.
///
/// Unknown → Configured → Started ↔ Stopped. See
/// [`StatusMachine`](crate::hardware::status::StatusMachine) for the
/// transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Initial status, nothing configured yet.
    #[default]
    Unknown,
    /// Last `configure()` succeeded.
    Configured,
    /// Running; read/write cycles are expected.
    Started,
    /// Halted after having been started.
    Stopped,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unknown => "UNKNOWN",
            Self::Configured => "CONFIGURED",
            Self::Started => "STARTED",
            Self::Stopped => "STOPPED",
        };
        f.write_str(s)
    }
}

/// Lifecycle transition requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// `start()`
    Start,
    /// `stop()`
    Stop,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Stop => f.write_str("stop"),
        }
    }
}
