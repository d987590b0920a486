//! HWIF Common Library
//!
//! Shared vocabulary of the hardware abstraction core: the interface catalog,
//! result and status codes, the driver contract, the lifecycle state machine
//! and pointer-style interface handles.
//!
//! # Module Structure
//!
//! - [`component_info`] - Interface/component/hardware descriptions
//! - [`consts`] - Well-known interface names and defaults
//! - [`error`] - `HwError` and `HwResult`
//! - [`types`] - `ReturnType`, `Status`, `Transition`
//! - [`hardware`] - Driver traits, `StatusMachine`, handles
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use hwif_common::prelude::*;
//!
//! let mut lifecycle = StatusMachine::new();
//! lifecycle.configured();
//! assert!(lifecycle.start().is_ok());
//! assert_eq!(lifecycle.status(), Status::Started);
//! ```

pub mod component_info;
pub mod config;
pub mod consts;
pub mod error;
pub mod hardware;
pub mod prelude;
pub mod types;
