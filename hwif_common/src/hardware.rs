//! Hardware driver contract, lifecycle state machine and pointer-style handles.

pub mod driver;
pub mod handle;
pub mod status;
