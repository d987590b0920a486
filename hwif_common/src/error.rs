//! Error type shared by every hardware operation.
//!
//! Failures are returned, never thrown: each fallible operation yields
//! [`HwResult`], and [`HwError::return_type`] flattens the error into the
//! [`ReturnType`] code reported to outer layers.

use crate::types::{ReturnType, Status, Transition};
use thiserror::Error;

/// Result alias used throughout the hardware abstraction.
pub type HwResult<T = ()> = Result<T, HwError>;

/// Error types for hardware operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HwError {
    /// Declared interfaces or parameters violate a component or driver policy.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Lifecycle transition not allowed from the current status.
    #[error("Cannot {transition} from status {status}")]
    Lifecycle {
        /// Requested transition.
        transition: Transition,
        /// Status at the time of the request (unchanged).
        status: Status,
    },

    /// Opaque failure reported by a hardware driver.
    #[error("Driver error: {0}")]
    Driver(String),

    /// Requested interface name is not part of the configured set.
    #[error("Interface not found: {0}")]
    InterfaceNotFound(String),

    /// Interface name list was empty.
    #[error("No interface names provided")]
    InterfaceNotProvided,

    /// Number of values differs from the number of addressed interfaces.
    #[error("Interface value count mismatch: expected {expected}, got {actual}")]
    InterfaceValueSizeNotEqual {
        /// Number of addressed interfaces.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
}

impl HwError {
    /// Flat result code for this error.
    pub const fn return_type(&self) -> ReturnType {
        match self {
            Self::Configuration(_) | Self::Lifecycle { .. } | Self::Driver(_) => {
                ReturnType::Error
            }
            Self::InterfaceNotFound(_) => ReturnType::InterfaceNotFound,
            Self::InterfaceNotProvided => ReturnType::InterfaceNotProvided,
            Self::InterfaceValueSizeNotEqual { .. } => ReturnType::InterfaceValueSizeNotEqual,
        }
    }

    /// True for errors caused by how the caller addressed interfaces.
    pub const fn is_addressing(&self) -> bool {
        matches!(
            self,
            Self::InterfaceNotFound(_) | Self::InterfaceNotProvided
        )
    }
}
