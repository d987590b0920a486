//! Joint and sensor components and their interface storage.
//!
//! - [`access`] - `InterfaceRead` / `InterfaceWrite` contract with shared validation
//! - [`interface_set`] - Owned storage strategy
//! - [`handle_set`] - Pointer-style storage strategy over driver handles
//! - [`policy`] - Per-class configuration policies
//! - [`joint`] - Command + state component
//! - [`sensor`] - State-only component

pub mod access;
pub mod handle_set;
pub mod interface_set;
pub mod joint;
pub mod policy;
pub mod sensor;

pub use access::{InterfaceRead, InterfaceWrite};
pub use handle_set::{CommandHandleSet, HandleSet, StateHandleSet};
pub use interface_set::InterfaceSet;
pub use joint::Joint;
pub use policy::{JointPolicy, SensorPolicy};
pub use sensor::Sensor;
