//! Pointer-style interface handles.
//!
//! A handle binds `{component_name, interface_name}` to a scalar slot that a
//! driver owns. It is a non-owning back-reference (`&'a Cell<f64>`): the
//! borrow checker ties every handle to the driver it was exported from, so
//! the driver always outlives its handles. No shared ownership is involved.
//!
//! Handles are neither `Send` nor `Sync`. Concurrent access to driver storage
//! needs external synchronization.

use static_assertions::assert_not_impl_any;
use std::cell::Cell;

/// Common surface of state and command handles.
pub trait BoundHandle {
    /// Component owning the interface, e.g. "joint1".
    fn component_name(&self) -> &str;

    /// Interface name, e.g. "position".
    fn interface_name(&self) -> &str;

    /// Current value of the bound slot.
    fn value(&self) -> f64;
}

/// Read-only view of a driver-owned state value.
#[derive(Debug, Clone)]
pub struct StateHandle<'a> {
    component_name: String,
    interface_name: String,
    value: &'a Cell<f64>,
}

impl<'a> StateHandle<'a> {
    /// Bind a state interface to `value`.
    pub fn new(
        component_name: impl Into<String>,
        interface_name: impl Into<String>,
        value: &'a Cell<f64>,
    ) -> Self {
        Self {
            component_name: component_name.into(),
            interface_name: interface_name.into(),
            value,
        }
    }
}

impl BoundHandle for StateHandle<'_> {
    fn component_name(&self) -> &str {
        &self.component_name
    }

    fn interface_name(&self) -> &str {
        &self.interface_name
    }

    #[inline]
    fn value(&self) -> f64 {
        self.value.get()
    }
}

/// Read/write view of a driver-owned command value.
#[derive(Debug, Clone)]
pub struct CommandHandle<'a> {
    component_name: String,
    interface_name: String,
    value: &'a Cell<f64>,
}

impl<'a> CommandHandle<'a> {
    /// Bind a command interface to `value`.
    pub fn new(
        component_name: impl Into<String>,
        interface_name: impl Into<String>,
        value: &'a Cell<f64>,
    ) -> Self {
        Self {
            component_name: component_name.into(),
            interface_name: interface_name.into(),
            value,
        }
    }

    /// Write a new command value into driver storage.
    #[inline]
    pub fn set_value(&self, value: f64) {
        self.value.set(value);
    }
}

impl BoundHandle for CommandHandle<'_> {
    fn component_name(&self) -> &str {
        &self.component_name
    }

    fn interface_name(&self) -> &str {
        &self.interface_name
    }

    #[inline]
    fn value(&self) -> f64 {
        self.value.get()
    }
}

assert_not_impl_any!(StateHandle<'static>: Send, Sync);
assert_not_impl_any!(CommandHandle<'static>: Send, Sync);
